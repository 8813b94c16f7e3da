pub mod card_animated;
pub mod date_input;
pub mod page_header;
pub mod pagination_controls;
pub mod sortable_header_cell;
