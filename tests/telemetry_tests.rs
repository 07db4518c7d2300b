// Synthetic telemetry generator: bounds, random walk, per-channel status

mod common;

use common::{reading, rng};
use enose_dashboard::models::{Granularity, ReadingStatus, SensorChannel};
use enose_dashboard::telemetry::{self, MAX_STEP, SAMPLE_MAX};

const EPS: f64 = 1e-9;

#[test]
fn initial_series_has_granularity_length_and_bounded_samples() {
    let mut rng = rng(1);
    for _ in 0..50 {
        for g in Granularity::ALL {
            let series = telemetry::initial_series(g.series_len(), &mut rng);
            assert_eq!(series.len(), g.series_len());
            assert!(series.iter().all(|&s| s < SAMPLE_MAX));
        }
    }
}

#[test]
fn next_sample_is_bounded() {
    let mut rng = rng(2);
    let series = telemetry::initial_series(24, &mut rng);
    for _ in 0..1000 {
        assert!(telemetry::next_sample(&series, &mut rng) < SAMPLE_MAX);
    }
}

#[test]
fn next_reading_value_stays_within_step_and_non_negative() {
    let mut rng = rng(3);
    for start in [0.0, 0.3, 1.0, 2.4, 22.5, 42.0, 412.0, 57.123] {
        let r = reading(SensorChannel::Voc, start);
        for _ in 0..500 {
            let v = telemetry::next_reading_value(&r, &mut rng);
            assert!(v >= 0.0, "negative value {v} from {start}");
            assert!((v - start).abs() <= MAX_STEP + EPS, "step too large: {start} -> {v}");
        }
    }
}

#[test]
fn next_reading_value_is_rounded_to_one_decimal() {
    let mut rng = rng(4);
    let r = reading(SensorChannel::Temperature, 22.5);
    for _ in 0..200 {
        let v = telemetry::next_reading_value(&r, &mut rng);
        assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-6, "not one decimal: {v}");
    }
}

#[test]
fn voc_random_walk_status_is_a_function_of_value() {
    let mut rng = rng(5);
    let mut r = reading(SensorChannel::Voc, 42.0);
    for _ in 0..1000 {
        let before = r.value;
        telemetry::step_reading(&mut r, &mut rng);
        assert!(r.value >= 0.0);
        assert!((r.value - before).abs() <= MAX_STEP + EPS);
        let expected = if r.value >= 100.0 {
            ReadingStatus::Critical
        } else if r.value >= 80.0 {
            ReadingStatus::Warning
        } else {
            ReadingStatus::Normal
        };
        assert_eq!(r.status, expected, "value {}", r.value);
    }
}

#[test]
fn walk_from_near_zero_never_goes_negative() {
    let mut rng = rng(6);
    let mut r = reading(SensorChannel::Humidity, 0.5);
    for _ in 0..2000 {
        telemetry::step_reading(&mut r, &mut rng);
        assert!(r.value >= 0.0);
        assert_eq!(r.status, ReadingStatus::Normal);
    }
}

#[test]
fn non_finite_reading_restarts_from_channel_start_value() {
    let mut rng = rng(9);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut r = reading(SensorChannel::Co2, bad);
        telemetry::step_reading(&mut r, &mut rng);
        assert!(r.value.is_finite(), "from {bad}: {}", r.value);
        assert!((r.value - SensorChannel::Co2.initial_value()).abs() <= MAX_STEP + 1e-9);
        assert_eq!(r.status, ReadingStatus::Normal);
    }
}

#[test]
fn initial_readings_cover_all_channels_with_fixed_values() {
    let readings = telemetry::initial_readings();
    assert_eq!(readings.len(), 4);
    let voc = &readings[0];
    assert_eq!(voc.channel, SensorChannel::Voc);
    assert_eq!(voc.id, "voc");
    assert_eq!(voc.unit, "ppb");
    assert_eq!(voc.value, 42.0);
    assert_eq!(voc.status, ReadingStatus::Normal);
    let co2 = readings
        .iter()
        .find(|r| r.channel == SensorChannel::Co2)
        .expect("co2 channel");
    assert_eq!(co2.unit, "ppm");
    assert_eq!(co2.status, ReadingStatus::Normal);
}

#[test]
fn seeded_generators_are_reproducible() {
    let a = telemetry::initial_series_set(&mut rng(9));
    let b = telemetry::initial_series_set(&mut rng(9));
    assert_eq!(a, b);
}
