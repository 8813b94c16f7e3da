pub mod date_range;
pub mod list_view;
