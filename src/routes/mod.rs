// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::scheduler::SessionMetrics;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) metrics: SessionMetrics,
    pub(crate) config: AppConfig,
}

pub fn app(metrics: SessionMetrics, config: AppConfig) -> Router {
    let state = AppState { metrics, config };
    Router::new()
        .route("/", get(|| async { "Hello from the e-nose dashboard!" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/snapshot", get(http::snapshot_handler)) // GET /api/snapshot
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
