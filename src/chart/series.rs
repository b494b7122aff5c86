//! Chart Series
//!
//! Data points and the pure transforms from feed series to chart coordinates.

/// Seconds in one day, the width of a daily usage bucket.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of buckets shown by the daily usage bar chart.
pub const DAILY_BUCKETS: i64 = 14;

/// A single feed data point: epoch-second timestamp and measured value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataPoint {
    pub timestamp: i64,
    pub value: f64,
}

/// A chart-native coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

/// Map a power series onto line chart entries.
///
/// x is the point's absolute epoch-second timestamp, y the raw value. No
/// coordinate transform is applied.
pub fn line_entries(points: &[DataPoint]) -> Vec<Entry> {
    points
        .iter()
        .map(|p| Entry {
            x: p.timestamp as f64,
            y: p.value,
        })
        .collect()
}

/// Signed day offset of `timestamp` relative to `reference`.
///
/// Euclidean division so past days floor towards negative offsets: a point
/// one hour before the reference lands in bucket -1, the reference instant
/// itself in bucket 0.
pub fn day_offset(timestamp: i64, reference: i64) -> i64 {
    (timestamp - reference).div_euclid(SECONDS_PER_DAY)
}

/// Map a daily usage series onto bar chart entries.
///
/// x is the day offset relative to `reference`, negative for past days. The
/// reference is the snapshot's generation instant, fixed per emission, so
/// redrawing without new data never shifts bars.
pub fn daily_entries(points: &[DataPoint], reference: i64) -> Vec<Entry> {
    points
        .iter()
        .map(|p| Entry {
            x: day_offset(p.timestamp, reference) as f64,
            y: p.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn line_entries_use_absolute_epoch_seconds() {
        let points = vec![
            DataPoint { timestamp: NOW - 3_600, value: 1.2 },
            DataPoint { timestamp: NOW, value: 2.4 },
        ];

        let entries = line_entries(&points);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Entry { x: (NOW - 3_600) as f64, y: 1.2 });
        assert_eq!(entries[1], Entry { x: NOW as f64, y: 2.4 });
    }

    #[test]
    fn day_offset_floors_past_days_to_negative() {
        // An hour before the reference is "yesterday" in relative-day terms.
        assert_eq!(day_offset(NOW - 3_600, NOW), -1);
        assert_eq!(day_offset(NOW, NOW), 0);
        assert_eq!(day_offset(NOW - SECONDS_PER_DAY, NOW), -1);
        assert_eq!(day_offset(NOW - SECONDS_PER_DAY - 1, NOW), -2);
        assert_eq!(day_offset(NOW - 13 * SECONDS_PER_DAY, NOW), -13);
    }

    #[test]
    fn daily_entries_share_bucket_within_one_day() {
        // Two points inside the same relative day produce the same x.
        let points = vec![
            DataPoint { timestamp: NOW - 3_600, value: 1.2 },
            DataPoint { timestamp: NOW - 7_200, value: 2.4 },
        ];

        let entries = daily_entries(&points, NOW);
        assert_eq!(entries[0].x, -1.0);
        assert_eq!(entries[1].x, -1.0);
        assert_eq!(entries[0].y, 1.2);
        assert_eq!(entries[1].y, 2.4);
    }

    #[test]
    fn daily_entries_fixed_reference_is_stable() {
        let points = vec![DataPoint { timestamp: NOW - 2 * SECONDS_PER_DAY, value: 5.0 }];

        let first = daily_entries(&points, NOW);
        // A later redraw with the same snapshot reference must not move bars.
        let second = daily_entries(&points, NOW);
        assert_eq!(first, second);
        assert_eq!(first[0].x, -2.0);
    }

    #[test]
    fn empty_series_maps_to_no_entries() {
        assert!(line_entries(&[]).is_empty());
        assert!(daily_entries(&[], NOW).is_empty());
    }
}
