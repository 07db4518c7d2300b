// Synthetic telemetry generator: bounded random samples and per-channel status.
// Pure functions over a caller-supplied RNG; no I/O and no state of its own.

use rand::Rng;

use crate::models::{
    Granularity, ReadingStatus, SensorChannel, SensorReading, SeriesSet, TimeSeries,
};

/// Exclusive upper bound for historical series samples.
pub const SAMPLE_MAX: u32 = 100;
/// Largest per-tick move of a live reading, in the reading's unit.
pub const MAX_STEP: f64 = 2.5;

const VOC_WARNING: f64 = 80.0;
const VOC_CRITICAL: f64 = 100.0;
const CO2_WARNING: f64 = 800.0;

/// `length` independent uniform samples in [0, 100).
pub fn initial_series<R: Rng + ?Sized>(length: usize, rng: &mut R) -> TimeSeries {
    TimeSeries::from_samples((0..length).map(|_| rng.random_range(0..SAMPLE_MAX)).collect())
}

/// One fresh uniform sample in [0, 100). Deliberately ignores `previous`: charts re-roll
/// each tick, unlike live readings which walk.
pub fn next_sample<R: Rng + ?Sized>(_previous: &TimeSeries, rng: &mut R) -> u32 {
    rng.random_range(0..SAMPLE_MAX)
}

/// Random-walk step for a live reading: `max(0, value + delta)` with delta in [-2.5, 2.5],
/// rounded to one decimal. The result never moves more than `MAX_STEP` from `reading.value`.
/// A non-finite value walks from the channel's start value instead.
pub fn next_reading_value<R: Rng + ?Sized>(reading: &SensorReading, rng: &mut R) -> f64 {
    let value = if reading.value.is_finite() {
        reading.value
    } else {
        reading.channel.initial_value()
    };
    let delta = rng.random_range(-MAX_STEP..=MAX_STEP);
    let stepped = round1(value + delta).clamp(value - MAX_STEP, value + MAX_STEP);
    stepped.max(0.0)
}

/// Per-channel threshold table. Only VOC and CO2 ever leave `Normal`.
pub fn status_for(channel: SensorChannel, value: f64) -> ReadingStatus {
    match channel {
        SensorChannel::Voc if value >= VOC_CRITICAL => ReadingStatus::Critical,
        SensorChannel::Voc if value >= VOC_WARNING => ReadingStatus::Warning,
        SensorChannel::Co2 if value >= CO2_WARNING => ReadingStatus::Warning,
        _ => ReadingStatus::Normal,
    }
}

pub fn initial_reading(channel: SensorChannel) -> SensorReading {
    let value = channel.initial_value();
    SensorReading {
        id: channel.id().to_string(),
        name: channel.display_name().to_string(),
        channel,
        value,
        unit: channel.unit().to_string(),
        status: status_for(channel, value),
        trend: channel.initial_trend(),
    }
}

/// The four monitored channels at their fixed start values.
pub fn initial_readings() -> Vec<SensorReading> {
    SensorChannel::ALL.into_iter().map(initial_reading).collect()
}

pub fn initial_series_set<R: Rng + ?Sized>(rng: &mut R) -> SeriesSet {
    SeriesSet {
        hours24: initial_series(Granularity::Hours24.series_len(), rng),
        days7: initial_series(Granularity::Days7.series_len(), rng),
        days30: initial_series(Granularity::Days30.series_len(), rng),
    }
}

/// Applies one random-walk step to `reading` and recomputes its status.
pub fn step_reading<R: Rng + ?Sized>(reading: &mut SensorReading, rng: &mut R) {
    reading.value = next_reading_value(reading, rng);
    reading.status = status_for(reading.channel, reading.value);
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(42.349), 42.3);
        assert_eq!(round1(42.35001), 42.4);
        assert_eq!(round1(-0.04), 0.0);
    }

    #[test]
    fn voc_thresholds_are_inclusive() {
        assert_eq!(status_for(SensorChannel::Voc, 79.9), ReadingStatus::Normal);
        assert_eq!(status_for(SensorChannel::Voc, 80.0), ReadingStatus::Warning);
        assert_eq!(status_for(SensorChannel::Voc, 99.9), ReadingStatus::Warning);
        assert_eq!(status_for(SensorChannel::Voc, 100.0), ReadingStatus::Critical);
    }

    #[test]
    fn co2_has_single_warning_threshold() {
        assert_eq!(status_for(SensorChannel::Co2, 799.9), ReadingStatus::Normal);
        assert_eq!(status_for(SensorChannel::Co2, 800.0), ReadingStatus::Warning);
        assert_eq!(status_for(SensorChannel::Co2, 5000.0), ReadingStatus::Warning);
    }

    #[test]
    fn temperature_and_humidity_stay_normal() {
        for v in [-40.0, 0.0, 85.0, 1000.0] {
            assert_eq!(status_for(SensorChannel::Temperature, v), ReadingStatus::Normal);
            assert_eq!(status_for(SensorChannel::Humidity, v), ReadingStatus::Normal);
        }
    }
}
