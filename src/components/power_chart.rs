//! Power Chart Component
//!
//! Continuous power line chart drawn on HTML5 Canvas.

use std::cell::RefCell;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::chart::{line_entries, ChartModel, Entry};
use crate::state::MyElectricViewModel;

const SERIES_COLOR: &str = "#2196F3";
const SERIES_FILL: &str = "rgba(33, 150, 243, 0.25)";

/// Line chart of the continuous power series.
#[component]
pub fn PowerChart() -> impl IntoView {
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let model = RefCell::new(ChartModel::new());

    // Refill the widget's series and redraw only when it actually changed.
    create_effect(move |_| {
        let entries = vm.data.with(|d| line_entries(&d.line_chart_data));

        if let Some(canvas) = canvas_ref.get() {
            let mut model = model.borrow_mut();
            if model.update(entries) {
                draw_line_chart(&canvas, model.entries());
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Draw the line chart on canvas
fn draw_line_chart(canvas: &HtmlCanvasElement, entries: &[Entry]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 48.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;

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

    let x_min = entries[0].x;
    let x_span = (entries[entries.len() - 1].x - x_min).max(1.0);
    let y_max = entries
        .iter()
        .map(|e| e.y)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0)
        * 1.1;

    let x_px = |x: f64| margin_left + (x - x_min) / x_span * chart_width;
    let y_px = |y: f64| margin_top + (1.0 - y / y_max) * chart_height;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Filled area under the series
    ctx.set_fill_style(&SERIES_FILL.into());
    ctx.begin_path();
    ctx.move_to(x_px(entries[0].x), y_px(entries[0].y));
    for entry in &entries[1..] {
        ctx.line_to(x_px(entry.x), y_px(entry.y));
    }
    ctx.line_to(x_px(entries[entries.len() - 1].x), margin_top + chart_height);
    ctx.line_to(x_px(entries[0].x), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();

    // Series line
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, entry) in entries.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_px(entry.x), y_px(entry.y));
        } else {
            ctx.line_to(x_px(entry.x), y_px(entry.y));
        }
    }
    ctx.stroke();

    // Time-of-day labels along the x-axis
    ctx.set_fill_style(&"#9ca3af".into());
    for i in 0..=4 {
        let x = x_min + x_span * i as f64 / 4.0;
        let label = chrono::DateTime::from_timestamp(x as i64, 0)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_default();
        let _ = ctx.fill_text(&label, x_px(x) - 15.0, height - 10.0);
    }
}
