// Rolling update scheduler: one task per dashboard session.
// The task owns the session state; the handle is the only way in (commands) and out
// (snapshots). Stopping or dropping the handle cancels both timers.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, Sleep, interval, interval_at};

use crate::dashboard::DashboardState;
use crate::error::CommandError;
use crate::export;
use crate::models::{CategoryFilter, DashboardSnapshot, Granularity};

/// Default tick period.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2000;
/// Default delay between a granularity request and the series regeneration.
pub const DEFAULT_GRANULARITY_DELAY_MS: u64 = 300;

const COMMAND_CHANNEL_CAPACITY: usize = 16;

/// Timing and publishing config for one session.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub tick_interval_ms: u64,
    pub granularity_delay_ms: u64,
    /// Buffered snapshots per session (slow consumers may lag).
    pub snapshot_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            granularity_delay_ms: DEFAULT_GRANULARITY_DELAY_MS,
            snapshot_capacity: 16,
        }
    }
}

/// Counters shared by all sessions, read by the stats logger.
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    pub active_sessions: Arc<AtomicUsize>,
    pub ticks_total: Arc<AtomicU64>,
    pub alerts_total: Arc<AtomicU64>,
}

#[derive(Debug)]
pub enum SchedulerCommand {
    SetGranularity(Granularity),
    SetAlertFilter(CategoryFilter),
    Snapshot(oneshot::Sender<DashboardSnapshot>),
    ExportCsv(oneshot::Sender<String>),
}

/// Running session. Drop (or `stop`) releases the timers.
pub struct SchedulerHandle {
    commands: mpsc::Sender<SchedulerCommand>,
    snapshots: broadcast::Sender<DashboardSnapshot>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<DashboardState>>,
}

impl SchedulerHandle {
    /// Receives one snapshot per tick and per applied command.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardSnapshot> {
        self.snapshots.subscribe()
    }

    pub async fn set_granularity(&self, granularity: Granularity) -> Result<(), CommandError> {
        self.send(SchedulerCommand::SetGranularity(granularity)).await
    }

    pub async fn set_alert_filter(&self, filter: CategoryFilter) -> Result<(), CommandError> {
        self.send(SchedulerCommand::SetAlertFilter(filter)).await
    }

    /// Current state, without waiting for the next tick.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(SchedulerCommand::Snapshot(tx)).await?;
        rx.await.map_err(|_| CommandError::SessionStopped)
    }

    /// CSV export of the state at the moment of the request.
    pub async fn export_csv(&self) -> Result<String, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.send(SchedulerCommand::ExportCsv(tx)).await?;
        rx.await.map_err(|_| CommandError::SessionStopped)
    }

    /// Cancels both timers and returns the final state.
    pub async fn stop(mut self) -> Option<DashboardState> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let join = self.join.take()?;
        match join.await {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(error = %e, operation = "stop_session", "session task failed");
                None
            }
        }
    }

    async fn send(&self, command: SchedulerCommand) -> Result<(), CommandError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| CommandError::SessionStopped)
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Spawns the session task. Ticks start one full period after the call.
///
/// `rng` should be the generator that built `state`, so ticks continue its stream
/// instead of replaying it.
pub fn start(
    state: DashboardState,
    rng: StdRng,
    config: SchedulerConfig,
    metrics: SessionMetrics,
) -> SchedulerHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (snapshot_tx, _) = broadcast::channel(config.snapshot_capacity.max(1));
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let join = tokio::spawn(run(
        state,
        rng,
        config,
        metrics,
        command_rx,
        snapshot_tx.clone(),
        shutdown_rx,
    ));

    SchedulerHandle {
        commands: command_tx,
        snapshots: snapshot_tx,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    }
}

#[tracing::instrument(
    name = "session",
    level = "debug",
    skip_all,
    fields(tick_interval_ms = config.tick_interval_ms)
)]
async fn run(
    mut state: DashboardState,
    mut rng: StdRng,
    config: SchedulerConfig,
    metrics: SessionMetrics,
    mut command_rx: mpsc::Receiver<SchedulerCommand>,
    snapshot_tx: broadcast::Sender<DashboardSnapshot>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> DashboardState {
    let period = Duration::from_millis(config.tick_interval_ms.max(1));
    let granularity_delay = Duration::from_millis(config.granularity_delay_ms);

    let mut tick = interval_at(Instant::now() + period, period);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut granularity_timer: Option<Pin<Box<Sleep>>> = None;

    tracing::debug!("Dashboard session started");

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                break;
            }
            _ = tick.tick() => {
                let now = now_ms();
                if let Some(alert) = state.tick(now, &mut rng) {
                    metrics.alerts_total.fetch_add(1, Ordering::Relaxed);
                    tracing::debug!(
                        category = %alert.category,
                        message = %alert.message,
                        "alert synthesized"
                    );
                }
                metrics.ticks_total.fetch_add(1, Ordering::Relaxed);
                publish(&snapshot_tx, state.snapshot(now));
            }
            _ = async {
                if let Some(timer) = granularity_timer.as_mut() {
                    timer.await;
                }
            }, if granularity_timer.is_some() => {
                granularity_timer = None;
                if let Some(g) = state.apply_granularity(&mut rng) {
                    tracing::debug!(granularity = %g, "granularity applied");
                }
                publish(&snapshot_tx, state.snapshot(now_ms()));
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                match command {
                    SchedulerCommand::SetGranularity(g) => {
                        if state.request_granularity(g) {
                            // A newer request restarts the delay.
                            granularity_timer = Some(Box::pin(tokio::time::sleep(granularity_delay)));
                            publish(&snapshot_tx, state.snapshot(now_ms()));
                        }
                    }
                    SchedulerCommand::SetAlertFilter(filter) => {
                        state.set_alert_filter(filter);
                        publish(&snapshot_tx, state.snapshot(now_ms()));
                    }
                    SchedulerCommand::Snapshot(reply) => {
                        let _ = reply.send(state.snapshot(now_ms()));
                    }
                    SchedulerCommand::ExportCsv(reply) => {
                        let csv = export::to_csv(&state.snapshot(now_ms()));
                        let _ = reply.send(csv);
                    }
                }
            }
        }
    }

    tracing::debug!(ticks = state.ticks(), "Dashboard session stopped");
    state
}

fn publish(tx: &broadcast::Sender<DashboardSnapshot>, snapshot: DashboardSnapshot) {
    if tx.send(snapshot).is_err() {
        tracing::trace!(
            operation = "publish_snapshot",
            "No subscribers for session snapshots"
        );
    }
}

/// Seeded RNG when `seed` is set, OS-seeded otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Logs active sessions and tick totals at INFO every `interval_secs`.
pub fn spawn_stats_logger(
    metrics: SessionMetrics,
    interval_secs: u64,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stats_log_tick = interval(Duration::from_secs(interval_secs.max(1)));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        dashboard_sessions = metrics.active_sessions.load(Ordering::Relaxed),
                        ticks_total = metrics.ticks_total.load(Ordering::Relaxed),
                        alerts_total = metrics.alerts_total.load(Ordering::Relaxed),
                        "app stats"
                    );
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Stats logger shutting down");
                    break;
                }
            }
        }
    })
}
