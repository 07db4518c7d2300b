// Read-only render snapshot handed to consumers once per tick

use serde::{Deserialize, Serialize};

use super::{
    AlertEvent, CategoryFilter, ComparisonStats, Granularity, RecencyGroups, SensorReading,
    SeriesSet,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub timestamp: i64,
    pub granularity: Granularity,
    /// True while a granularity switch is pending (drives the chart transition).
    pub transitioning: bool,
    pub readings: Vec<SensorReading>,
    pub series: SeriesSet,
    pub alerts: Vec<AlertEvent>,
    pub alert_filter: CategoryFilter,
    /// Feed filtered by `alert_filter`, bucketed by recency.
    pub alert_groups: RecencyGroups,
    pub stats: ComparisonStats,
}
