mod assets;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{
    catalog::{CatalogKind, LocationEntry},
    dashboard::{Dashboard, DashboardFrame},
    error::TrackerError,
};

pub struct WebServerConfig {
    pub catalog: CatalogKind,
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}

#[derive(Serialize)]
pub struct RegionsResponse {
    pub catalog: CatalogKind,
    pub regions: Vec<LocationEntry>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error surfaced to the browser as a JSON body.
#[derive(Debug)]
pub struct ApiError(TrackerError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            TrackerError::UnknownRegion(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let error = match self.0 {
            TrackerError::UnknownRegion(_) => self.0.to_string(),
            _ => "An error occurred while computing the dashboard".to_string(),
        };
        ErrorBody { error }
    }
}

impl From<TrackerError> for ApiError {
    fn from(value: TrackerError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (self.status(), Json(self.body())).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/api/health", get(health))
        .route("/api/regions", get(regions))
        .route("/api/frame/:region", get(frame))
        .with_state(state)
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let WebServerConfig {
        catalog,
        host,
        port,
    } = config;

    let state = AppState::new(Dashboard::new(catalog));
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, %catalog, "AQI dashboard live at http://{addr} (Ctrl+C to stop)");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down web UI");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::STYLES_CSS,
    )
}

async fn script() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        assets::APP_JS,
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let catalog = state.dashboard.catalog();
    Json(RegionsResponse {
        catalog: catalog.kind(),
        regions: catalog.entries().to_vec(),
    })
}

pub async fn frame(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<DashboardFrame>, ApiError> {
    let frame = state.dashboard.frame(&region)?;
    tracing::info!(region = %frame.region, aqi = frame.reading.aqi, "served frame");
    Ok(Json(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_maps_to_not_found() {
        let err = ApiError::from(TrackerError::UnknownRegion("Atlantis".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.body().error.contains("Atlantis"));
    }

    #[test]
    fn internal_errors_hide_details() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ApiError::from(TrackerError::Snapshot(io));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.body().error.contains("disk"));
    }

    #[test]
    fn assets_are_embedded() {
        assert!(assets::INDEX_HTML.contains("app.js"));
        assert!(!assets::STYLES_CSS.is_empty());
        assert!(assets::APP_JS.contains("/api/frame/"));
    }
}
