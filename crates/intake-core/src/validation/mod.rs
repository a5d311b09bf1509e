//! Validation modules

pub mod fields;
pub mod file;

pub use fields::{report, submit_ready, FieldReport};
pub use file::{check_batch, FileChecker};
