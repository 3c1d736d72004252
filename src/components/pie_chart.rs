//! Pie Chart Component
//!
//! Sales-by-product distribution using HTML5 Canvas, with an HTML legend.

use leptos::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::PieChartSlice;

/// Slice color palette, cycled per product
const SLICE_COLORS: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

/// Sales-by-product pie chart
#[component]
pub fn PieChart(
    #[prop(into)]
    slices: Signal<Vec<PieChartSlice>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new batch lands
    create_effect(move |_| {
        let slices = slices.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &slices);
        }
    });

    view! {
        <div class="flex flex-col items-center">
            <canvas
                node_ref=canvas_ref
                width="300"
                height="300"
                class="rounded-lg"
            />
            <PieLegend slices=slices />
        </div>
    }
}

/// Legend showing slice colors, names, and summed amounts
#[component]
fn PieLegend(
    #[prop(into)]
    slices: Signal<Vec<PieChartSlice>>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                slices.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slice)| {
                        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300 capitalize">{slice.name}</span>
                                <span class="text-sm text-gray-500">
                                    {format!("${:.2}", slice.value)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Draw the distribution on canvas
fn draw_pie_chart(canvas: &HtmlCanvasElement, slices: &[PieChartSlice]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 20.0;

    // Only positive finite values occupy arc length
    let total: f64 = slices
        .iter()
        .map(|slice| slice.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();

    if total <= 0.0 {
        // Sentinel batch or degenerate values: nothing to slice up
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No sales data", cx - 50.0, cy);
        return;
    }

    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, slice) in slices.iter().enumerate() {
        if !slice.value.is_finite() || slice.value <= 0.0 {
            continue;
        }

        let sweep = slice.value / total * std::f64::consts::TAU;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();

        ctx.set_fill_style(&SLICE_COLORS[idx % SLICE_COLORS.len()].into());
        ctx.fill();

        start += sweep;
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
