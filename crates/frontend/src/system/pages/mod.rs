pub mod contact_support;
pub mod login;
