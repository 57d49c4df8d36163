use dioxus::prelude::*;
use bikeshare_client_core::chart::{area_path, ticks, WEEKLY_DEMAND};
use crate::theme::AppColors;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 24.0;

/// Weekly demand trend as an inline SVG area chart.
#[component]
pub fn DemandChart() -> Element {
    let values: Vec<f64> = WEEKLY_DEMAND.iter().map(|(_, v)| *v).collect();
    let trend = area_path(&values, WIDTH, HEIGHT);
    let view_box = format!("0 0 {} {}", WIDTH + MARGIN_LEFT, HEIGHT + MARGIN_BOTTOM);
    let transform = format!("translate({}, 0)", MARGIN_LEFT);

    // (label, y) per grid line, (day, x) per point
    let grid: Vec<(String, f64)> = ticks(trend.y_max)
        .into_iter()
        .map(|t| (format!("{}", t), HEIGHT - t / trend.y_max * HEIGHT))
        .collect();
    let days: Vec<(&str, f64)> = WEEKLY_DEMAND
        .iter()
        .zip(trend.points.iter())
        .map(|((day, _), (x, _))| (*day, *x))
        .collect();
    let label_y = HEIGHT + 18.0;

    rsx! {
        svg {
            width: "100%",
            height: "300",
            view_box: "{view_box}",
            preserve_aspect_ratio: "none",
            g { transform: "{transform}",
                for (label, y) in grid {
                    line {
                        x1: "0",
                        x2: "{WIDTH}",
                        y1: "{y}",
                        y2: "{y}",
                        stroke: AppColors::SURFACE_RAISED,
                        stroke_dasharray: "3 3",
                    }
                    text {
                        x: "-8",
                        y: "{y}",
                        dy: "4",
                        fill: AppColors::MUTED,
                        font_size: "11",
                        text_anchor: "end",
                        "{label}"
                    }
                }
                path { d: "{trend.area}", fill: AppColors::PRIMARY, fill_opacity: "0.3", stroke: "none" }
                path { d: "{trend.line}", fill: "none", stroke: AppColors::PRIMARY, stroke_width: "2" }
                for (day, x) in days {
                    text {
                        x: "{x}",
                        y: "{label_y}",
                        fill: AppColors::MUTED,
                        font_size: "11",
                        text_anchor: "middle",
                        "{day}"
                    }
                }
            }
        }
    }
}
