mod chart;
mod dashboard;

pub use dashboard::AnalyticsDashboard;
