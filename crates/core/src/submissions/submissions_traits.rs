use crate::errors::Result;
use crate::submissions::submissions_model::{RoiSubmission, SubmissionError, SubmissionRecord};
use async_trait::async_trait;

/// Trait for the submission document store.
///
/// Records are write-once: there is no update or delete path.
#[async_trait]
pub trait SubmissionRepositoryTrait: Send + Sync {
    async fn insert_submission(&self, record: SubmissionRecord) -> Result<SubmissionRecord>;
    fn get_submission(&self, submission_id: &str) -> Result<SubmissionRecord>;
}

/// Trait for the submission workflow (notify, then persist).
#[async_trait]
pub trait SubmissionServiceTrait: Send + Sync {
    async fn submit(
        &self,
        submission: RoiSubmission,
    ) -> std::result::Result<SubmissionRecord, SubmissionError>;
}
