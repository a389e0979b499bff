use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};

use crate::mail::{EmailMessage, MailTransportTrait};

use super::submissions_model::{RoiSubmission, SubmissionError, SubmissionRecord};
use super::submissions_report::{render_report, report_subject};
use super::submissions_traits::{SubmissionRepositoryTrait, SubmissionServiceTrait};

/// Emails the operator report, then stores the submission.
///
/// Holds no per-request state; concurrent calls only meet at the collaborators.
pub struct SubmissionService {
    mail_transport: Arc<dyn MailTransportTrait>,
    repository: Arc<dyn SubmissionRepositoryTrait>,
    report_recipient: String,
}

impl SubmissionService {
    pub fn new(
        mail_transport: Arc<dyn MailTransportTrait>,
        repository: Arc<dyn SubmissionRepositoryTrait>,
        report_recipient: impl Into<String>,
    ) -> Self {
        SubmissionService {
            mail_transport,
            repository,
            report_recipient: report_recipient.into(),
        }
    }

    /// Builds the operator email for a submission.
    fn compose_email(&self, submission: &RoiSubmission) -> EmailMessage {
        EmailMessage {
            to: self.report_recipient.clone(),
            subject: report_subject(&submission.contact_info.company),
            body: render_report(submission),
            reply_to: Some(submission.contact_info.email.clone()),
        }
    }

    /// Sends once. Transport errors are logged and reported as `false`.
    async fn deliver(&self, message: &EmailMessage) -> bool {
        match self.mail_transport.send(message).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to send ROI report email: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl SubmissionServiceTrait for SubmissionService {
    async fn submit(
        &self,
        submission: RoiSubmission,
    ) -> std::result::Result<SubmissionRecord, SubmissionError> {
        let submission = RoiSubmission {
            contact_info: submission.contact_info.normalized(),
            ..submission
        };
        submission.contact_info.validate()?;
        submission.calculation_input.validate()?;

        let message = self.compose_email(&submission);
        if !self.deliver(&message).await {
            return Err(SubmissionError::EmailNotSent);
        }
        debug!(
            "ROI report for '{}' sent to {}",
            submission.contact_info.company, message.to
        );

        let record = SubmissionRecord::new(submission);
        let record_id = record.id.clone();
        let stored = self.repository.insert_submission(record).await.map_err(|e| {
            error!(
                "ROI report email sent but submission {} was not persisted: {}",
                record_id, e
            );
            SubmissionError::PersistenceFailed(e.to_string())
        })?;

        info!("Stored ROI submission {}", stored.id);
        Ok(stored)
    }
}
