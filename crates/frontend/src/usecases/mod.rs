pub mod u501_order_link;
pub mod u502_order_form;
