//! Shared model of the print-shop dashboard.
//!
//! Everything here is browser-independent: records, the filter / sort /
//! paginate pipeline, the session gate and the storage seam it persists
//! through. The frontend keeps these types in signals; the backend only
//! borrows the health payload.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
