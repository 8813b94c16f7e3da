mod normal_print_form;
mod view;

pub use view::OrderFormPage;
