//! Database model for submissions.
//!
//! Each row carries the whole record as a JSON document. `company`,
//! `contact_email` and `created_at` are copied out of it for lookups.

use chrono::SecondsFormat;
use diesel::prelude::*;
use roi_core::submissions::SubmissionRecord;

use crate::errors::StorageError;

#[derive(Queryable, Insertable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::roi_submissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubmissionDB {
    pub id: String,
    pub company: String,
    pub contact_email: String,
    pub document: String,
    pub created_at: String,
}

impl TryFrom<&SubmissionRecord> for SubmissionDB {
    type Error = StorageError;

    fn try_from(record: &SubmissionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.clone(),
            company: record.contact_info.company.clone(),
            contact_email: record.contact_info.email.clone(),
            document: serde_json::to_string(record)?,
            created_at: record
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        })
    }
}

impl TryFrom<SubmissionDB> for SubmissionRecord {
    type Error = StorageError;

    fn try_from(row: SubmissionDB) -> Result<Self, Self::Error> {
        let record: SubmissionRecord = serde_json::from_str(&row.document)?;
        if record.id != row.id {
            return Err(StorageError::Core(roi_core::Error::Unexpected(format!(
                "Submission document id '{}' does not match row id '{}'",
                record.id, row.id
            ))));
        }
        Ok(record)
    }
}
