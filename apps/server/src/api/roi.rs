use std::sync::Arc;

use crate::{
    api::AppJson,
    error::{ApiError, ApiResult, CALCULATION_FAILED},
    main_lib::AppState,
    models::{RoiInput, RoiSubmission, StatusResponse},
};
use axum::{extract::State, routing::post, Json, Router};
use roi_core::roi as core_roi;

pub const CALCULATION_OK: &str = "Cálculo realizado correctamente";
pub const SUBMISSION_OK: &str = "Información enviada correctamente";

/// Computes the estimate but only acknowledges it. Figures are revealed on submission.
#[utoipa::path(
    post,
    path = "/api/calculate-roi",
    request_body = RoiInput,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Out-of-range input"),
        (status = 500, description = "Calculation failed")
    )
)]
pub async fn calculate_roi(
    AppJson(payload): AppJson<RoiInput>,
) -> ApiResult<Json<StatusResponse>> {
    let input: core_roi::RoiInput = payload.into();
    input.validate()?;

    let output = core_roi::calculate_roi(&input);
    if !output.is_finite() {
        tracing::error!(?input, "ROI calculation produced a non-finite figure");
        return Err(ApiError::Internal(CALCULATION_FAILED.to_string()));
    }
    tracing::debug!(?output, "ROI calculated");

    Ok(Json(StatusResponse::success(CALCULATION_OK)))
}

/// Emails the operator report, then stores the submission.
#[utoipa::path(
    post,
    path = "/api/submit-roi",
    request_body = RoiSubmission,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, description = "Invalid contact or input"),
        (status = 500, description = "Email or persistence failed")
    )
)]
pub async fn submit_roi(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<RoiSubmission>,
) -> ApiResult<Json<StatusResponse>> {
    let record = state.submission_service.submit(payload.into()).await?;
    tracing::info!(submission_id = %record.id, "ROI submission processed");
    Ok(Json(StatusResponse::success(SUBMISSION_OK)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculate-roi", post(calculate_roi))
        .route("/submit-roi", post(submit_roi))
}
