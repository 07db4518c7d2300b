// Model serialization tests (JSON wire forms, closed enums, commands)

mod common;

use common::{NOW, event, rng};
use enose_dashboard::dashboard::{DashboardState, SimulationOptions};
use enose_dashboard::models::*;

#[test]
fn test_sensor_reading_serialization_camel_case() {
    let r = enose_dashboard::telemetry::initial_reading(SensorChannel::Voc);
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"status\":\"normal\""));
    assert!(json.contains("\"channel\":\"voc\""));
    let back: SensorReading = serde_json::from_str(&json).unwrap();
    assert_eq!(back.value, r.value);
}

#[test]
fn test_granularity_wire_form() {
    assert_eq!(serde_json::to_string(&Granularity::Hours24).unwrap(), "\"24h\"");
    assert_eq!(serde_json::to_string(&Granularity::Days30).unwrap(), "\"30d\"");
    assert_eq!("7d".parse::<Granularity>(), Ok(Granularity::Days7));
    assert!("1y".parse::<Granularity>().is_err());
}

#[test]
fn test_series_set_serializes_by_granularity() {
    let set = SeriesSet {
        hours24: TimeSeries::from_samples(vec![1, 2]),
        days7: TimeSeries::from_samples(vec![3]),
        days30: TimeSeries::from_samples(vec![]),
    };
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["24h"], serde_json::json!([1, 2]));
    assert_eq!(json["7d"], serde_json::json!([3]));
    assert_eq!(json["30d"], serde_json::json!([]));
}

#[test]
fn test_time_series_slide_keeps_length() {
    let mut s = TimeSeries::from_samples(vec![1, 2, 3]);
    s.slide(9);
    assert_eq!(s.to_vec(), vec![2, 3, 9]);
    assert_eq!(s.latest(), Some(9));
    let mut empty = TimeSeries::from_samples(vec![]);
    empty.slide(1);
    assert!(empty.is_empty());
}

#[test]
fn test_alert_event_serialization() {
    let e = event(7, AlertCategory::AirQuality, NOW);
    let json = serde_json::to_string(&e).unwrap();
    assert!(json.contains("\"category\":\"Air Quality\""));
    assert!(json.contains("\"severity\":\"warning\""));
    let back: AlertEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}

#[test]
fn test_alert_category_parses_display_names() {
    for c in AlertCategory::ALL {
        assert_eq!(c.display_name().parse::<AlertCategory>(), Ok(c));
    }
    assert!("Pollen".parse::<AlertCategory>().is_err());
}

#[test]
fn test_category_filter_sentinel() {
    assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!(" ALL ".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!(
        "co2".parse::<CategoryFilter>(),
        Ok(CategoryFilter::Only(AlertCategory::Co2))
    );
    assert_eq!(
        "CO2".parse::<CategoryFilter>(),
        Ok(CategoryFilter::Only(AlertCategory::Co2))
    );
    assert_eq!(
        serde_json::to_string(&CategoryFilter::Only(AlertCategory::Voc)).unwrap(),
        "\"VOC\""
    );
    assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"All\"");
}

#[test]
fn test_recency_groups_keys() {
    let json = serde_json::to_value(RecencyGroups::default()).unwrap();
    for key in ["Just now", "Last hour", "Earlier today", "Older"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_client_commands_parse() {
    assert_eq!(
        r#"{"type":"setGranularity","granularity":"30d"}"#.parse::<ClientCommand>().unwrap(),
        ClientCommand::SetGranularity {
            granularity: Granularity::Days30
        }
    );
    assert_eq!(
        r#"{"type":"setAlertFilter","category":"All"}"#.parse::<ClientCommand>().unwrap(),
        ClientCommand::SetAlertFilter {
            category: CategoryFilter::All
        }
    );
    assert_eq!(
        r#"{"type":"exportCsv"}"#.parse::<ClientCommand>().unwrap(),
        ClientCommand::ExportCsv
    );
}

#[test]
fn test_client_command_rejects_unknown_values() {
    let err = r#"{"type":"setGranularity","granularity":"1y"}"#
        .parse::<ClientCommand>()
        .unwrap_err();
    assert!(err.to_string().contains("invalid command"));
    assert!(r#"{"type":"reboot"}"#.parse::<ClientCommand>().is_err());
    assert!("not json".parse::<ClientCommand>().is_err());
}

#[test]
fn test_dashboard_snapshot_json_roundtrip() {
    let state = DashboardState::new(SimulationOptions::default(), NOW, &mut rng(31));
    let snapshot = state.snapshot(NOW);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"alertGroups\""));
    assert!(json.contains("\"dayVsWeek\""));
    assert!(json.contains("\"granularity\":\"24h\""));
    let back: DashboardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.timestamp, NOW);
    assert_eq!(back.series, snapshot.series);
    assert_eq!(back.alerts, snapshot.alerts);
}
