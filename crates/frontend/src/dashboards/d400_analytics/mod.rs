pub mod ui;

pub use ui::AnalyticsDashboard;
