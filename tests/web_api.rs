use aqi_tracker::{
    web::{frame, health, regions, AppState},
    CatalogKind, Dashboard,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn state() -> AppState {
    AppState::new(Dashboard::new(CatalogKind::StateCapitals))
}

#[tokio::test]
async fn health_reports_ok() {
    assert_eq!(health().await.0.status, "ok");
}

#[tokio::test]
async fn regions_lists_catalog() {
    let body = regions(State(state())).await.0;
    assert_eq!(body.catalog, CatalogKind::StateCapitals);
    assert_eq!(body.regions.len(), 28);
    assert!(body
        .regions
        .iter()
        .any(|entry| entry.region == "Goa" && entry.city == "Panaji"));
}

#[tokio::test]
async fn frame_for_known_region() {
    let body = frame(State(state()), Path("Bihar".to_string()))
        .await
        .expect("Bihar resolves")
        .0;
    assert_eq!(body.city, "Patna");
    assert_eq!(body.trend.len(), 24);
}

#[tokio::test]
async fn frame_for_unknown_region_is_404() {
    let err = frame(State(state()), Path("Atlantis".to_string()))
        .await
        .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
