use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use roi_core::errors::{DatabaseError, Error, Result};
use roi_core::submissions::{SubmissionRecord, SubmissionRepositoryTrait};

use super::model::SubmissionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::roi_submissions;

pub struct SubmissionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SubmissionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SubmissionRepository { pool, writer }
    }
}

#[async_trait]
impl SubmissionRepositoryTrait for SubmissionRepository {
    async fn insert_submission(&self, record: SubmissionRecord) -> Result<SubmissionRecord> {
        let row = SubmissionDB::try_from(&record)?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SubmissionRecord> {
                diesel::insert_into(roi_submissions::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(record)
            })
            .await
    }

    fn get_submission(&self, submission_id: &str) -> Result<SubmissionRecord> {
        let mut conn = get_connection(&self.pool)?;
        let row = roi_submissions::table
            .find(submission_id)
            .select(SubmissionDB::as_select())
            .first::<SubmissionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Submission {} not found",
                    submission_id
                )))
            })?;
        Ok(SubmissionRecord::try_from(row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init, run_migrations, spawn_writer};
    use roi_core::roi::{calculate_roi, RoiInput};
    use roi_core::submissions::{ContactInfo, RoiSubmission};
    use tempfile::tempdir;

    async fn create_test_repository() -> (SubmissionRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");

        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone()).expect("Failed to spawn writer");

        (SubmissionRepository::new(pool, writer), temp_dir)
    }

    fn record(company: &str) -> SubmissionRecord {
        let input = RoiInput {
            average_ticket_value: Some(1000.0),
            current_conversion_rate: Some(10.0),
            expected_conversion_rate: Some(20.0),
            ..RoiInput::default()
        };
        SubmissionRecord::new(RoiSubmission {
            calculation_output: calculate_roi(&input),
            calculation_input: input,
            contact_info: ContactInfo {
                full_name: "Ana Pérez".to_string(),
                company: company.to_string(),
                email: "ana@acme.com".to_string(),
                phone: Some("1155550000".to_string()),
            },
        })
    }

    #[tokio::test]
    async fn test_insert_then_read_back() {
        let (repo, _temp_dir) = create_test_repository().await;
        let record = record("Acme SA");

        let inserted = repo.insert_submission(record.clone()).await.unwrap();
        assert_eq!(inserted, record);

        let stored = repo.get_submission(&record.id).unwrap();
        assert_eq!(stored, record);
        assert_eq!(
            stored.calculation_output.roi_percentage.to_bits(),
            record.calculation_output.roi_percentage.to_bits()
        );
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let (repo, _temp_dir) = create_test_repository().await;
        let record = record("Acme SA");

        repo.insert_submission(record.clone()).await.unwrap();
        let mut duplicate = record.clone();
        duplicate.contact_info.company = "Other SRL".to_string();
        let err = repo.insert_submission(duplicate).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
        // The first write is untouched.
        assert_eq!(
            repo.get_submission(&record.id).unwrap().contact_info.company,
            "Acme SA"
        );
    }

    #[tokio::test]
    async fn test_missing_submission_is_not_found() {
        let (repo, _temp_dir) = create_test_repository().await;
        let err = repo.get_submission("does-not-exist").unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_stored() {
        let (repo, _temp_dir) = create_test_repository().await;
        let repo = Arc::new(repo);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert_submission(record(&format!("Co {}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        for id in ids {
            assert_eq!(repo.get_submission(&id).unwrap().id, id);
        }
    }
}
