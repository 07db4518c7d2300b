// Alert feed models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of alert categories. Serializes to its display name (e.g. "Air Quality").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCategory {
    #[serde(rename = "Air Quality")]
    AirQuality,
    #[serde(rename = "VOC")]
    Voc,
    #[serde(rename = "CO2")]
    Co2,
    Temperature,
    Humidity,
    System,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 6] = [
        AlertCategory::AirQuality,
        AlertCategory::Voc,
        AlertCategory::Co2,
        AlertCategory::Temperature,
        AlertCategory::Humidity,
        AlertCategory::System,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AlertCategory::AirQuality => "Air Quality",
            AlertCategory::Voc => "VOC",
            AlertCategory::Co2 => "CO2",
            AlertCategory::Temperature => "Temperature",
            AlertCategory::Humidity => "Humidity",
            AlertCategory::System => "System",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AlertCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AlertCategory::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown alert category: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub id: u64,
    pub message: String,
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Category filter for the alert list. "All" is the identity filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AlertCategory),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("All") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Events partitioned by elapsed time since "now".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecencyGroups {
    #[serde(rename = "Just now")]
    pub just_now: Vec<AlertEvent>,
    #[serde(rename = "Last hour")]
    pub last_hour: Vec<AlertEvent>,
    #[serde(rename = "Earlier today")]
    pub earlier_today: Vec<AlertEvent>,
    #[serde(rename = "Older")]
    pub older: Vec<AlertEvent>,
}

impl RecencyGroups {
    pub fn total_len(&self) -> usize {
        self.just_now.len() + self.last_hour.len() + self.earlier_today.len() + self.older.len()
    }
}
