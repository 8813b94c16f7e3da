//! SVG rendering of a [`ChartSeries`].

use contracts::dashboards::d400_analytics::{ChartKind, ChartPoint, ChartSeries, PlotArea};
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 250.0;
const POINT_RADIUS: f64 = 4.0;
/// Share of a slot a bar occupies.
const BAR_FILL: f64 = 0.7;
const Y_TICKS: usize = 4;

/// Marker markup with a native tooltip. `<title>` has to be parsed in the
/// SVG namespace, hence markup rather than view nodes.
fn marker_markup(series: &ChartSeries, index: usize, point: &ChartPoint, area: PlotArea) -> String {
    let color = series.color(index);
    let tooltip = series.tooltip(index).unwrap_or_default();
    match series.kind {
        ChartKind::Line => format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{}" fill="{color}"><title>{tooltip}</title></circle>"#,
            point.x, point.y, POINT_RADIUS
        ),
        ChartKind::Bar => {
            let width = point.slot_width * BAR_FILL;
            format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{color}" fill-opacity="0.6" stroke="{color}"><title>{tooltip}</title></rect>"#,
                point.x - width / 2.0,
                point.y,
                width,
                area.bottom() - point.y
            )
        }
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[component]
pub fn Chart(series: ChartSeries) -> impl IntoView {
    let area = PlotArea::DEFAULT;
    let points = series.scaled_points(area);
    let max = series.max_value();

    let grid = (0..=Y_TICKS)
        .map(|i| {
            let ratio = i as f64 / Y_TICKS as f64;
            let y = area.bottom() - ratio * area.height;
            view! {
                <line
                    x1=area.left
                    y1=y
                    x2=area.left + area.width
                    y2=y
                    stroke="#e0e0e0"
                />
                <text x=area.left - 6.0 y=y + 4.0 text-anchor="end" font-size="10" fill="#666">
                    {format_tick(max * ratio)}
                </text>
            }
        })
        .collect_view();

    let x_labels = points
        .iter()
        .map(|p| {
            view! {
                <text x=p.x y=area.bottom() + 16.0 text-anchor="middle" font-size="10" fill="#666">
                    {p.label.chars().take(10).collect::<String>()}
                </text>
            }
        })
        .collect_view();

    let line = (series.kind == ChartKind::Line).then(|| {
        view! {
            <polyline
                points=series.polyline(area)
                fill="none"
                stroke=series.color(0).to_string()
                stroke-width="2"
            />
        }
    });

    let markers = points
        .iter()
        .enumerate()
        .map(|(i, p)| view! { <g inner_html=marker_markup(&series, i, p, area)></g> })
        .collect_view();

    let legend_color = series.color(0).to_string();

    view! {
        <div class="chart">
            <h3 class="chart__title">{series.title.clone()}</h3>
            <svg
                class="chart__canvas"
                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                preserveAspectRatio="xMidYMid meet"
                role="img"
                aria-label=series.title.clone()
            >
                {grid}
                <line
                    x1=area.left
                    y1=area.bottom()
                    x2=area.left + area.width
                    y2=area.bottom()
                    stroke="#999"
                />
                {x_labels}
                {line}
                {markers}
            </svg>
            <div class="chart__legend">
                <span class="chart__legend-swatch" style=format!("background: {legend_color};")></span>
                {series.label.clone()}
            </div>
        </div>
    }
}
