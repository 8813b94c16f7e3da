pub mod d400_analytics;

pub use d400_analytics::AnalyticsDashboard;
