//! Progress chart
//!
//! Weight, body fat and muscle mass of the selected athlete on an HTML5
//! canvas. Points are spaced evenly; missing values break the line.

use crate::context::use_dash;
use gymdash::SelectControl;
use gymdash::render::SeriesPoint;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct Line {
    label: &'static str,
    color: &'static str,
    value: fn(&SeriesPoint) -> Option<f64>,
}

static LINES: [Line; 3] = [
    Line {
        label: "Weight",
        color: "#FF9800",
        value: |p| p.weight,
    },
    Line {
        label: "Body fat %",
        color: "#F44336",
        value: |p| p.body_fat,
    },
    Line {
        label: "Muscle mass",
        color: "#2196F3",
        value: |p| p.muscle_mass,
    },
];

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

#[component]
pub fn ProgressChart(control: SelectControl) -> impl IntoView {
    let ctx = use_dash();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let series = Memo::new(move |_| ctx.model.with(|m| m.series(control).to_vec()));

    Effect::new(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Progress"</h3>
                <canvas node_ref=canvas_ref width="800" height="320" class="w-full h-64 rounded-lg"></canvas>
                <div class="flex justify-center gap-4 text-sm">
                    {LINES
                        .iter()
                        .map(|line| view! {
                            <span class="flex items-center gap-1">
                                <span class="inline-block w-3 h-3 rounded-full" style:background-color=line.color></span>
                                {line.label}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Y axis range over every value, padded by a tenth on each side
fn y_bounds(points: &[SeriesPoint]) -> Option<(f64, f64)> {
    let values = points
        .iter()
        .flat_map(|p| LINES.iter().filter_map(move |line| (line.value)(p)));

    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    Some((min - padding, max + padding))
}

fn x_at(index: usize, count: usize, chart_width: f64) -> f64 {
    if count < 2 {
        MARGIN_LEFT + chart_width / 2.0
    } else {
        MARGIN_LEFT + index as f64 / (count - 1) as f64 * chart_width
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_font("12px sans-serif");

    let Some((y_min, y_max)) = y_bounds(points) else {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No measurements", width / 2.0 - 60.0, height / 2.0);
        return;
    };
    let y_at = |v: f64| MARGIN_TOP + (y_max - v) / (y_max - y_min) * chart_height;

    // Grid and y labels
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = MARGIN_TOP + i as f64 / 4.0 * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - i as f64 / 4.0 * (y_max - y_min);
        ctx.set_fill_style_str("#6b7280");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    for line in &LINES {
        ctx.set_stroke_style_str(line.color);
        ctx.set_fill_style_str(line.color);
        ctx.set_line_width(2.0);
        ctx.begin_path();

        let mut pen_down = false;
        for (i, point) in points.iter().enumerate() {
            match (line.value)(point) {
                Some(v) => {
                    let (x, y) = (x_at(i, points.len(), chart_width), y_at(v));
                    if pen_down {
                        ctx.line_to(x, y);
                    } else {
                        ctx.move_to(x, y);
                    }
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();

        for (i, point) in points.iter().enumerate() {
            if let Some(v) = (line.value)(point) {
                ctx.begin_path();
                let _ = ctx.arc(
                    x_at(i, points.len(), chart_width),
                    y_at(v),
                    3.0,
                    0.0,
                    std::f64::consts::PI * 2.0,
                );
                ctx.fill();
            }
        }
    }

    // X labels
    ctx.set_fill_style_str("#6b7280");
    for (i, point) in points.iter().enumerate() {
        let x = x_at(i, points.len(), chart_width);
        let _ = ctx.fill_text(&point.label, x - 30.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(weight: Option<f64>, body_fat: Option<f64>) -> SeriesPoint {
        SeriesPoint {
            label: String::new(),
            weight,
            body_fat,
            muscle_mass: None,
        }
    }

    #[test]
    fn bounds_cover_every_line_with_padding() {
        let points = [point(Some(80.0), Some(20.0)), point(Some(70.0), None)];
        let (lo, hi) = y_bounds(&points).unwrap();
        assert!((lo - 14.0).abs() < 1e-9);
        assert!((hi - 86.0).abs() < 1e-9);
    }

    #[test]
    fn flat_or_missing_series() {
        assert_eq!(y_bounds(&[point(None, None)]), None);
        assert_eq!(y_bounds(&[point(Some(5.0), None)]), Some((4.0, 6.0)));
    }

    #[test]
    fn single_points_are_centred() {
        assert_eq!(x_at(0, 1, 100.0), MARGIN_LEFT + 50.0);
        assert_eq!(x_at(2, 3, 100.0), MARGIN_LEFT + 100.0);
    }
}
