use serde::Deserialize;

use crate::dashboard::{DEFAULT_ALERT_PROBABILITY, SimulationOptions};
use crate::scheduler::{DEFAULT_GRANULARITY_DELAY_MS, DEFAULT_TICK_INTERVAL_MS, SchedulerConfig};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub publishing: PublishingConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Delay before a granularity switch regenerates the active series.
    #[serde(default = "default_granularity_delay_ms")]
    pub granularity_delay_ms: u64,
    /// Chance per tick of synthesizing an alert, in [0, 1].
    #[serde(default = "default_alert_probability")]
    pub alert_probability: f64,
    #[serde(default = "default_alert_feed_capacity")]
    pub alert_feed_capacity: usize,
    /// Fixed seed for reproducible demo sessions.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_granularity_delay_ms() -> u64 {
    DEFAULT_GRANULARITY_DELAY_MS
}

fn default_alert_probability() -> f64 {
    DEFAULT_ALERT_PROBABILITY
}

fn default_alert_feed_capacity() -> usize {
    crate::alert_feed::DEFAULT_CAPACITY
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            granularity_delay_ms: default_granularity_delay_ms(),
            alert_probability: default_alert_probability(),
            alert_feed_capacity: default_alert_feed_capacity(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// Max number of snapshots buffered per dashboard session (slow clients may lag).
    pub snapshot_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log app stats (dashboard sessions, ticks, alerts) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            alert_probability: self.simulation.alert_probability,
            alert_feed_capacity: self.simulation.alert_feed_capacity,
        }
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            tick_interval_ms: self.simulation.tick_interval_ms,
            granularity_delay_ms: self.simulation.granularity_delay_ms,
            snapshot_capacity: self.publishing.snapshot_capacity,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.simulation.tick_interval_ms > 0,
            "simulation.tick_interval_ms must be > 0, got {}",
            self.simulation.tick_interval_ms
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.simulation.alert_probability),
            "simulation.alert_probability must be within [0, 1], got {}",
            self.simulation.alert_probability
        );
        anyhow::ensure!(
            self.simulation.alert_feed_capacity > 0,
            "simulation.alert_feed_capacity must be > 0, got {}",
            self.simulation.alert_feed_capacity
        );
        anyhow::ensure!(
            self.publishing.snapshot_capacity > 0,
            "publishing.snapshot_capacity must be > 0, got {}",
            self.publishing.snapshot_capacity
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
