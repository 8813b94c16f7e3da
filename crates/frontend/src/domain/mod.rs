pub mod a001_order;
pub mod a002_audit_log;
pub mod a003_print_job;
