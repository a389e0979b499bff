//! ROI Core - domain types, calculator, operator report and submission workflow.
//!
//! This crate has no knowledge of HTTP, SQLite or any mail provider. It defines
//! the traits those collaborators implement (`storage-sqlite`, `mailer`) and the
//! service that drives them.

pub mod constants;
pub mod errors;
pub mod mail;
pub mod roi;
pub mod submissions;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
