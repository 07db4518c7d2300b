// Shared test helpers

#![allow(dead_code)]

use enose_dashboard::models::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const NOW: i64 = 1_760_000_000_000;
pub const MINUTE_MS: i64 = 60_000;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn event(id: u64, category: AlertCategory, timestamp: i64) -> AlertEvent {
    AlertEvent {
        id,
        message: format!("event {id}"),
        category,
        severity: AlertSeverity::Warning,
        timestamp,
    }
}

pub fn reading(channel: SensorChannel, value: f64) -> SensorReading {
    SensorReading {
        id: channel.id().to_string(),
        name: channel.display_name().to_string(),
        channel,
        value,
        unit: channel.unit().to_string(),
        status: ReadingStatus::Normal,
        trend: 0.0,
    }
}
