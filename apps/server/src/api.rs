use std::sync::Arc;

use crate::{
    config::Config,
    error::ApiError,
    main_lib::AppState,
    models::{ContactInfo, MessageResponse, RoiInput, RoiOutput, RoiSubmission, StatusResponse},
};
use axum::{
    extract::FromRequest,
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod roi;

const SERVICE_NAME: &str = "Efficiency24 ROI Calculator API";

/// JSON body extractor whose rejections use the API error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[utoipa::path(get, path = "/api/", responses((status = 200, body = MessageResponse)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: SERVICE_NAME.to_string(),
    })
}

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(root, healthz, roi::calculate_roi, roi::submit_roi),
    components(schemas(
        RoiInput,
        RoiOutput,
        ContactInfo,
        RoiSubmission,
        StatusResponse,
        MessageResponse
    )),
    tags((name = "roi-calculator"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = if config.cors_allow.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(roi::router());

    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
