// GET handlers: version, api/snapshot

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::dashboard::DashboardState;
use crate::scheduler::{now_ms, session_rng};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/snapshot — a freshly mounted, unticked dashboard for first paint.
pub(super) async fn snapshot_handler(State(state): State<AppState>) -> impl IntoResponse {
    let now = now_ms();
    let mut rng = session_rng(state.config.simulation.seed);
    let dashboard = DashboardState::new(state.config.simulation_options(), now, &mut rng);
    axum::Json(dashboard.snapshot(now))
}
