//! Line Chart Component
//!
//! Sales-over-time chart using HTML5 Canvas. Points are drawn in the order
//! the transformer produced them; the x-axis is categorical over the point
//! labels, one slot per event.

use leptos::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::LineChartPoint;

/// Series line color
const LINE_COLOR: &str = "#8884d8";

/// Sales-over-time line chart
#[component]
pub fn LineChart(
    #[prop(into)]
    points: Signal<Vec<LineChartPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new batch lands
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw the series on canvas
fn draw_line_chart(canvas: &HtmlCanvasElement, points: &[LineChartPoint]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Find min/max for the y-axis over the finite sales values
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for point in points {
        if point.sales.is_finite() {
            y_min = y_min.min(point.sales);
            y_max = y_max.max(point.sales);
        }
    }
    if y_min > y_max {
        // Nothing finite to scale against
        y_min = 0.0;
        y_max = 1.0;
    }

    // Add padding to y range
    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // One x slot per point, in input order
    let x_step = chart_width / (points.len().saturating_sub(1)).max(1) as f64;
    let x_at = |i: usize| margin_left + i as f64 * x_step;
    let y_at = |sales: f64| margin_top + ((y_max - sales) / (y_max - y_min)) * chart_height;

    // Draw the series line, breaking it around non-finite values
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    let mut started = false;
    for (i, point) in points.iter().enumerate() {
        if !point.sales.is_finite() {
            started = false;
            continue;
        }
        let x = x_at(i);
        let y = y_at(point.sales);
        if started {
            ctx.line_to(x, y);
        } else {
            ctx.move_to(x, y);
            started = true;
        }
    }
    ctx.stroke();

    // Draw point markers
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        if !point.sales.is_finite() {
            continue;
        }
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(point.sales), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Draw x-axis labels, sampling to at most 6
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let label_step = (points.len() / 6).max(1);
    for (i, point) in points.iter().enumerate().step_by(label_step) {
        let _ = ctx.fill_text(&point.time, x_at(i) - 15.0, height - 10.0);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}
