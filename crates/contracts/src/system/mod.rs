pub mod auth;
pub mod health;
pub mod routing;
pub mod storage;
