//! SQLite storage implementation for the ROI calculator.
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! It implements the repository traits defined in `roi-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that serializes all writes
//! - The submission document store
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod submissions;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::StorageError;

pub use roi_core::errors::{DatabaseError, Error, Result};
