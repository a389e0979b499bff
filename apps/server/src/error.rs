use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roi_core::errors::ValidationError;
use roi_core::submissions::SubmissionError;
use serde::Serialize;
use thiserror::Error;

pub const CALCULATION_FAILED: &str = "Error en el cálculo";
pub const SUBMISSION_FAILED: &str = "Error procesando la solicitud";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Rejected { status, message } => (status, message),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Only validation failures reach the caller verbatim. The rest were logged
/// by the submission service and collapse to a generic message.
impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        let reason = err.reason_code();
        match err {
            SubmissionError::Validation(e) => ApiError::Validation(e),
            SubmissionError::EmailNotSent | SubmissionError::PersistenceFailed(_) => {
                tracing::warn!(reason, "Submission failed");
                ApiError::Internal(SUBMISSION_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_failure_hides_detail() {
        let err = ApiError::from(SubmissionError::PersistenceFailed(
            "disk I/O error".to_string(),
        ));
        assert_eq!(err.to_string(), SUBMISSION_FAILED);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_failure_is_bad_request() {
        let err = ApiError::from(SubmissionError::Validation(ValidationError::InvalidEmail(
            "nope".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
