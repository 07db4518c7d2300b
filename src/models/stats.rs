// Derived comparison statistics (computed on demand, never stored)

use serde::{Deserialize, Serialize};

/// Trend direction for a lower-is-better metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Improving,
    Worsening,
    Stable,
}

/// Average of the current window and its percent change against the prior window.
/// `None` where the input could not support the value (empty series, zero baseline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub average: Option<f64>,
    pub trend_vs_prior: Option<f64>,
    pub label: Option<TrendLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub average_24h: Option<f64>,
    pub average_7d: Option<f64>,
    pub average_30d: Option<f64>,
    /// 24h window against the 7d baseline.
    pub day_vs_week: DerivedStats,
    /// 7d window against the 30d baseline.
    pub week_vs_month: DerivedStats,
}
