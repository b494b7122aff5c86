//! Daily Chart Component
//!
//! Bar chart of daily usage over the last fourteen days, bucketed by day
//! offset relative to the snapshot's reference instant.

use std::cell::RefCell;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::{daily_entries, ChartModel, Entry, DAILY_BUCKETS};
use crate::state::MyElectricViewModel;

const BAR_COLOR: &str = "#2196F3";

/// Bar chart of the daily usage series.
#[component]
pub fn DailyChart() -> impl IntoView {
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let model = RefCell::new(ChartModel::new());

    create_effect(move |_| {
        let entries = vm
            .data
            .with(|d| daily_entries(&d.bar_chart_data, d.generated_at));

        if let Some(canvas) = canvas_ref.get() {
            let mut model = model.borrow_mut();
            if model.update(entries) {
                draw_daily_chart(&canvas, model.entries());
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="280"
            class="w-full h-56 rounded-lg"
        />
    }
}

/// Draw the bar chart on canvas
fn draw_daily_chart(canvas: &HtmlCanvasElement, entries: &[Entry]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 16.0;
    let margin_right = 16.0;
    let margin_top = 20.0;
    let margin_bottom = 28.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if entries.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 28.0, height / 2.0);
        return;
    }

    let y_max = entries
        .iter()
        .map(|e| e.y)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.15;

    let slot_width = chart_width / DAILY_BUCKETS as f64;
    let oldest_offset = -(DAILY_BUCKETS - 1) as f64;

    ctx.set_font("10px sans-serif");

    for entry in entries {
        // Buckets outside the displayed window are dropped, not clamped.
        if entry.x < oldest_offset || entry.x > 0.0 {
            continue;
        }

        let slot = entry.x - oldest_offset;
        let bar_height = (entry.y / y_max * chart_height).max(0.0);
        let x = margin_left + slot * slot_width + slot_width * 0.15;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, y, slot_width * 0.7, bar_height);

        // Value above the bar
        ctx.set_fill_style(&"#d1d5db".into());
        let _ = ctx.fill_text(&format!("{:.1}", entry.y), x, y - 4.0);
    }

    // Day-offset labels along the x-axis
    ctx.set_fill_style(&"#9ca3af".into());
    for slot in 0..DAILY_BUCKETS {
        let offset = slot - (DAILY_BUCKETS - 1);
        if offset % 2 != 0 {
            continue;
        }

        let label = if offset == 0 {
            "Today".to_string()
        } else {
            format!("{}d", offset)
        };
        let x = margin_left + slot as f64 * slot_width + slot_width * 0.15;
        let _ = ctx.fill_text(&label, x, height - 8.0);
    }
}
