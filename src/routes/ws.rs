// WebSocket handler: one isolated dashboard session per connection

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::broadcast;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::config::AppConfig;
use crate::dashboard::DashboardState;
use crate::models::{ClientCommand, DashboardSnapshot};
use crate::scheduler::{self, SchedulerHandle, SessionMetrics, now_ms, session_rng};

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Decrements the active session count on drop (connect = +1, drop = -1).
struct SessionGuard(Arc<AtomicUsize>);

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ServerMessage<'a> {
    Snapshot(&'a DashboardSnapshot),
    Export {
        format: &'static str,
        content: String,
    },
    Error {
        message: String,
    },
}

pub(super) async fn ws_dashboard(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let metrics = state.metrics.clone();
    let config = state.config.clone();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_dashboard(socket, metrics, config).await {
            tracing::info!("Dashboard stream error: {}", e);
        }
    })
}

async fn stream_dashboard(
    mut socket: WebSocket,
    metrics: SessionMetrics,
    config: AppConfig,
) -> anyhow::Result<()> {
    metrics.active_sessions.fetch_add(1, Ordering::Relaxed);
    let _guard = SessionGuard(metrics.active_sessions.clone());
    tracing::info!("Client connected to dashboard stream");

    let mut rng = session_rng(config.simulation.seed);
    let state = DashboardState::new(config.simulation_options(), now_ms(), &mut rng);
    let session = scheduler::start(state, rng, config.scheduler_config(), metrics);
    let mut rx = session.subscribe();

    let result = serve_session(&mut socket, &session, &mut rx).await;
    session.stop().await;
    tracing::info!("Client disconnected from dashboard stream");
    result
}

async fn serve_session(
    socket: &mut WebSocket,
    session: &SchedulerHandle,
    rx: &mut broadcast::Receiver<DashboardSnapshot>,
) -> anyhow::Result<()> {
    let initial = session.snapshot().await?;
    if !send_message(socket, &ServerMessage::Snapshot(&initial)).await? {
        return Ok(());
    }

    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(snapshot) => {
                        if !send_message(socket, &ServerMessage::Snapshot(&snapshot)).await? {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("WebSocket /ws/dashboard client lagged, skipped {} snapshots", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = handle_command(session, text.as_str()).await?
                            && !send_message(socket, &reply).await?
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Applies one client command. Returns the direct reply, if the command has one.
async fn handle_command(
    session: &SchedulerHandle,
    text: &str,
) -> anyhow::Result<Option<ServerMessage<'static>>> {
    let command = match text.parse::<ClientCommand>() {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, operation = "parse_command", "rejected client command");
            return Ok(Some(ServerMessage::Error {
                message: e.to_string(),
            }));
        }
    };
    match command {
        ClientCommand::SetGranularity { granularity } => {
            session.set_granularity(granularity).await?;
            Ok(None)
        }
        ClientCommand::SetAlertFilter { category } => {
            session.set_alert_filter(category).await?;
            Ok(None)
        }
        ClientCommand::ExportCsv => {
            let content = session.export_csv().await?;
            Ok(Some(ServerMessage::Export {
                format: "csv",
                content,
            }))
        }
    }
}

/// Sends one JSON text frame. Returns false when the client is gone or too slow.
async fn send_message(socket: &mut WebSocket, message: &ServerMessage<'_>) -> anyhow::Result<bool> {
    let json = serde_json::to_string(message)?;
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
    Ok(matches!(r, Ok(Ok(()))))
}
