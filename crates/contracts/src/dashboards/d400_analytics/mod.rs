pub mod chart;

pub use chart::{analytics_charts, ChartKind, ChartPoint, ChartSeries, PlotArea};
