//! SQLite document store for ROI submissions.

mod model;
mod repository;

pub use model::SubmissionDB;
pub use repository::SubmissionRepository;
