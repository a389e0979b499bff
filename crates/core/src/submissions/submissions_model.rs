//! Submission domain models.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::roi::{RoiInput, RoiOutput};

lazy_static! {
    /// Conservative `local@domain.tld` shape check.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("Invalid regex pattern");
}

/// Who asked for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Trims every field and turns a blank phone into `None`.
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }

    /// Required fields must be non-blank and the email well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("full_name".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(ValidationError::MissingField("company".to_string()));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email".to_string()));
        }
        if !EMAIL_REGEX.is_match(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// A caller-supplied submission.
///
/// The output is echoed back by the client and is not recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSubmission {
    pub calculation_input: RoiInput,
    pub calculation_output: RoiOutput,
    pub contact_info: ContactInfo,
}

/// A persisted submission. Write-once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub calculation_input: RoiInput,
    pub calculation_output: RoiOutput,
    pub contact_info: ContactInfo,
}

impl SubmissionRecord {
    /// Stamps a submission with a fresh id and the current UTC time.
    pub fn new(submission: RoiSubmission) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            calculation_input: submission.calculation_input,
            calculation_output: submission.calculation_output,
            contact_info: submission.contact_info,
        }
    }
}

/// Why a submission did not complete.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Validation(#[from] ValidationError),

    /// Nothing was persisted.
    #[error("Report email was not sent")]
    EmailNotSent,

    /// The email already went out.
    #[error("Submission could not be persisted: {0}")]
    PersistenceFailed(String),
}

impl SubmissionError {
    /// Stable machine-readable reason.
    pub fn reason_code(&self) -> &'static str {
        match self {
            SubmissionError::Validation(_) => "validation_failed",
            SubmissionError::EmailNotSent => "email_not_sent",
            SubmissionError::PersistenceFailed(_) => "persistence_failed",
        }
    }
}
