//! Submissions module - operator report, persistence seam and the submit workflow.

mod submissions_model;
mod submissions_report;
mod submissions_service;
mod submissions_traits;


pub use submissions_model::{ContactInfo, RoiSubmission, SubmissionError, SubmissionRecord};
pub use submissions_report::{render_report, report_subject};
pub use submissions_service::SubmissionService;
pub use submissions_traits::{SubmissionRepositoryTrait, SubmissionServiceTrait};
