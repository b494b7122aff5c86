//! Demo Feed
//!
//! Simulated household energy feed. Stands in for the real acquisition layer
//! so the screen has something to display: while the screen is active and
//! configured, the whole output snapshot is regenerated on every tick.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::chart::series::SECONDS_PER_DAY;
use crate::chart::{DataPoint, DAILY_BUCKETS};
use crate::state::viewmodel::{MyElectricData, MyElectricViewModel};

/// Interval between snapshot regenerations, in milliseconds.
pub const TICK_MILLIS: u32 = 10_000;

/// Span of the power line series.
const LINE_SPAN_SECS: i64 = 6 * 3_600;
/// Resolution of the power line series.
const LINE_STEP_SECS: i64 = 300;

/// Start the feed. Ticks are dropped while the screen is inactive or the
/// app is not configured.
pub fn start_demo_feed(vm: MyElectricViewModel) {
    // First snapshot as soon as the screen is both visible and configured.
    create_effect(move |_| {
        let live = vm.active.get() && vm.is_ready.get();
        if live && vm.data.with_untracked(|d| d.generated_at == 0) {
            let now = chrono::Utc::now().timestamp();
            vm.data.set(generate_snapshot(now, |_| js_sys::Math::random()));
        }
    });

    Interval::new(TICK_MILLIS, move || {
        if vm.active.get_untracked() && vm.is_ready.get_untracked() {
            let now = chrono::Utc::now().timestamp();
            vm.data.set(generate_snapshot(now, |_| js_sys::Math::random()));
        }
    })
    .forget();
}

/// Build one wholesale snapshot for the instant `now`.
///
/// `jitter` supplies per-sample noise in `[0, 1)`; tests inject a constant.
pub fn generate_snapshot(now: i64, mut jitter: impl FnMut(i64) -> f64) -> MyElectricData {
    let start = now - LINE_SPAN_SECS;
    let mut line = Vec::with_capacity((LINE_SPAN_SECS / LINE_STEP_SECS + 1) as usize);
    let mut t = start;
    while t <= now {
        line.push(DataPoint {
            timestamp: t,
            value: synth_power(t, jitter(t)),
        });
        t += LINE_STEP_SECS;
    }

    let midnight = now - now.rem_euclid(SECONDS_PER_DAY);
    let usage_today = usage_since(&line, midnight);

    let mut bar = Vec::with_capacity(DAILY_BUCKETS as usize);
    for offset in (1..DAILY_BUCKETS).rev() {
        let day = now - offset * SECONDS_PER_DAY;
        bar.push(DataPoint {
            timestamp: day,
            value: synth_daily_usage(day, jitter(day)),
        });
    }
    // Today's bucket mirrors the usage label so the two never disagree.
    bar.push(DataPoint {
        timestamp: now,
        value: usage_today,
    });

    let power_now = line.last().map(|p| p.value).unwrap_or(0.0);

    MyElectricData {
        power_now,
        usage_today,
        line_chart_data: line,
        bar_chart_data: bar,
        generated_at: now,
    }
}

/// Trapezoidal integral of the points at or after `since`, in kWh.
///
/// Segments starting before `since` are skipped, so the integral covers
/// whole sample intervals inside the window.
pub fn usage_since(points: &[DataPoint], since: i64) -> f64 {
    let mut watt_hours = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.timestamp < since {
            continue;
        }
        let hours = (b.timestamp - a.timestamp) as f64 / 3_600.0;
        watt_hours += (a.value + b.value) / 2.0 * hours;
    }
    watt_hours / 1_000.0
}

/// Synthetic instantaneous power: baseline load plus a daytime hump peaking
/// around midday, plus noise.
fn synth_power(timestamp: i64, jitter: f64) -> f64 {
    let time_of_day = timestamp.rem_euclid(SECONDS_PER_DAY) as f64 / SECONDS_PER_DAY as f64;
    let phase = time_of_day * std::f64::consts::TAU;
    220.0 + 90.0 * (1.0 - phase.cos()) + 120.0 * jitter
}

/// Synthetic whole-day usage in kWh: hourly samples of the power curve.
fn synth_daily_usage(day: i64, jitter: f64) -> f64 {
    let day_start = day - day.rem_euclid(SECONDS_PER_DAY);
    let mut watt_hours = 0.0;
    for hour in 0..24 {
        watt_hours += synth_power(day_start + hour * 3_600, jitter);
    }
    watt_hours / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::daily_entries;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn snapshot_is_regenerated_wholesale() {
        let snap = generate_snapshot(NOW, |_| 0.0);

        assert_eq!(snap.generated_at, NOW);
        assert_eq!(
            snap.line_chart_data.len(),
            (LINE_SPAN_SECS / LINE_STEP_SECS + 1) as usize
        );
        assert_eq!(snap.bar_chart_data.len(), DAILY_BUCKETS as usize);

        // Labels agree with the series they summarise.
        assert_eq!(snap.power_now, snap.line_chart_data.last().unwrap().value);
        assert_eq!(snap.usage_today, snap.bar_chart_data.last().unwrap().value);
    }

    #[test]
    fn snapshot_buckets_cover_the_last_fourteen_days() {
        let snap = generate_snapshot(NOW, |_| 0.0);

        let entries = daily_entries(&snap.bar_chart_data, snap.generated_at);
        let offsets: Vec<i64> = entries.iter().map(|e| e.x as i64).collect();
        let expected: Vec<i64> = (-13..=0).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn snapshot_is_deterministic_under_fixed_jitter() {
        let a = generate_snapshot(NOW, |_| 0.25);
        let b = generate_snapshot(NOW, |_| 0.25);
        assert_eq!(a, b);
    }

    #[test]
    fn usage_integrates_power_over_time() {
        // A constant 3600 W over one hour is exactly 3.6 kWh.
        let points = vec![
            DataPoint { timestamp: 0, value: 3_600.0 },
            DataPoint { timestamp: 1_800, value: 3_600.0 },
            DataPoint { timestamp: 3_600, value: 3_600.0 },
        ];
        assert!((usage_since(&points, 0) - 3.6).abs() < 1e-9);
    }

    #[test]
    fn usage_window_excludes_earlier_segments() {
        let points = vec![
            DataPoint { timestamp: 0, value: 1_000.0 },
            DataPoint { timestamp: 3_600, value: 1_000.0 },
            DataPoint { timestamp: 7_200, value: 1_000.0 },
        ];
        // Only the second hour is inside the window.
        assert!((usage_since(&points, 3_600) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn today_usage_matches_line_series_integral() {
        let snap = generate_snapshot(NOW, |_| 0.0);
        let midnight = NOW - NOW.rem_euclid(SECONDS_PER_DAY);
        let integral = usage_since(&snap.line_chart_data, midnight);
        assert!((snap.usage_today - integral).abs() < 1e-9);
    }
}
