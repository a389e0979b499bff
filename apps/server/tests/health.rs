use axum::{body::Body, http::Request};
use roi_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works_with_real_state() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("db").join("test.db");
    let db_path = db_path.to_string_lossy().to_string();
    let config = Config::from_lookup(|key| match key {
        "ROI_DB_PATH" => Some(db_path.clone()),
        _ => None,
    })
    .unwrap();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(std::path::Path::new(&db_path).exists());
}
