use serde::{Deserialize, Serialize};

const MONTHS: [&str; 7] = [
    "January", "February", "March", "April", "May", "June", "July",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Drawing box of a chart inside its SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub const DEFAULT: PlotArea = PlotArea {
        left: 40.0,
        top: 10.0,
        width: 340.0,
        height: 200.0,
    };

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A value placed inside a [`PlotArea`]. `x` is the center of its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub slot_width: f64,
}

/// One dataset of the analytics page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    /// Legend and tooltip label.
    pub label: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One stroke color per value for bar charts, a single one for lines.
    pub colors: Vec<String>,
}

impl ChartSeries {
    fn new(
        title: &str,
        label: &str,
        kind: ChartKind,
        labels: &[&str],
        values: &[f64],
        colors: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            kind,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Color of the value at `index`, cycling through the palette.
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            "#1976d2"
        } else {
            &self.colors[index % self.colors.len()]
        }
    }

    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.values
            .get(index)
            .map(|value| format!("{}: {}", self.label, value))
    }

    /// Places every value in `area`: zero sits on the bottom edge, the largest
    /// value on the top edge.
    pub fn scaled_points(&self, area: PlotArea) -> Vec<ChartPoint> {
        let count = self.values.len().max(1) as f64;
        let slot_width = area.width / count;
        let max = self.max_value();

        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let ratio = if max > 0.0 { value / max } else { 0.0 };
                ChartPoint {
                    label: self.labels.get(i).cloned().unwrap_or_default(),
                    value,
                    x: area.left + slot_width * (i as f64 + 0.5),
                    y: area.bottom() - ratio * area.height,
                    slot_width,
                }
            })
            .collect()
    }

    /// `points` attribute of an SVG polyline through the scaled values.
    pub fn polyline(&self, area: PlotArea) -> String {
        self.scaled_points(area)
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn analytics_charts() -> Vec<ChartSeries> {
    vec![
        ChartSeries::new(
            "Number of Orders Over Time",
            "Number of Orders",
            ChartKind::Line,
            &MONTHS,
            &[12.0, 19.0, 3.0, 5.0, 2.0, 3.0, 15.0],
            &["rgba(75, 192, 192, 1)"],
        ),
        ChartSeries::new(
            "Jobs by Type",
            "Jobs by Type",
            ChartKind::Bar,
            &[
                "Normal Print",
                "Business Cards",
                "Brochures",
                "Posters",
                "Flyers",
                "Banners",
            ],
            &[30.0, 15.0, 25.0, 10.0, 20.0, 18.0],
            &[
                "rgba(255, 159, 64, 1)",
                "rgba(153, 102, 255, 1)",
                "rgba(255, 206, 86, 1)",
                "rgba(75, 192, 192, 1)",
                "rgba(54, 162, 235, 1)",
                "rgba(255, 99, 132, 1)",
            ],
        ),
        ChartSeries::new(
            "Revenue Over Time",
            "Revenue",
            ChartKind::Line,
            &MONTHS,
            &[3000.0, 4500.0, 2000.0, 6000.0, 4000.0, 7000.0, 5000.0],
            &["rgba(255, 206, 86, 1)"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_static_datasets() {
        let charts = analytics_charts();
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Bar, ChartKind::Line]);
        for chart in &charts {
            assert_eq!(chart.labels.len(), chart.values.len());
        }
        assert_eq!(charts[2].max_value(), 7000.0);
        assert_eq!(charts[0].tooltip(1).as_deref(), Some("Number of Orders: 19"));
        assert_eq!(charts[0].tooltip(7), None);
    }

    #[test]
    fn scaling_fills_plot_area() {
        let area = PlotArea { left: 0.0, top: 0.0, width: 70.0, height: 100.0 };
        let points = analytics_charts()[0].scaled_points(area);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].x, 5.0);
        assert_eq!(points[1].y, 0.0);
        assert!((points[0].y - (100.0 - 12.0 / 19.0 * 100.0)).abs() < 1e-9);
        assert!(points.iter().all(|p| p.y >= 0.0 && p.y <= 100.0));
    }

    #[test]
    fn all_zero_series_sits_on_baseline() {
        let mut series = analytics_charts().remove(1);
        series.values = vec![0.0; 6];
        let area = PlotArea::DEFAULT;
        assert!(series
            .scaled_points(area)
            .iter()
            .all(|p| p.y == area.bottom()));
        assert_eq!(series.color(7), "rgba(153, 102, 255, 1)");
    }
}
