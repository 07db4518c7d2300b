// Historical series models: granularity and fixed-length sliding windows

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selected history window. Wire form is "24h", "7d" or "30d".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "30d")]
    Days30,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Hours24, Granularity::Days7, Granularity::Days30];

    /// Number of samples in a series of this granularity.
    pub fn series_len(self) -> usize {
        match self {
            Granularity::Hours24 => 24,
            Granularity::Days7 => 7,
            Granularity::Days30 => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Hours24 => "24h",
            Granularity::Days7 => "7d",
            Granularity::Days30 => "30d",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(Granularity::Hours24),
            "7d" => Ok(Granularity::Days7),
            "30d" => Ok(Granularity::Days30),
            other => Err(format!("unknown granularity: {other}")),
        }
    }
}

/// Fixed-length window of samples in [0, 100). Length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries(VecDeque<u32>);

impl TimeSeries {
    pub fn from_samples(samples: Vec<u32>) -> Self {
        TimeSeries(samples.into())
    }

    /// Oldest to newest.
    pub fn iter(&self) -> vec_deque::Iter<'_, u32> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<u32> {
        self.0.back().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops the oldest sample and appends `sample`. No-op on an empty series.
    pub fn slide(&mut self, sample: u32) {
        if self.0.is_empty() {
            return;
        }
        self.0.pop_front();
        self.0.push_back(sample);
    }
}

/// The three independent windows that coexist for the lifetime of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSet {
    #[serde(rename = "24h")]
    pub hours24: TimeSeries,
    #[serde(rename = "7d")]
    pub days7: TimeSeries,
    #[serde(rename = "30d")]
    pub days30: TimeSeries,
}

impl SeriesSet {
    pub fn get(&self, granularity: Granularity) -> &TimeSeries {
        match granularity {
            Granularity::Hours24 => &self.hours24,
            Granularity::Days7 => &self.days7,
            Granularity::Days30 => &self.days30,
        }
    }

    pub fn get_mut(&mut self, granularity: Granularity) -> &mut TimeSeries {
        match granularity {
            Granularity::Hours24 => &mut self.hours24,
            Granularity::Days7 => &mut self.days7,
            Granularity::Days30 => &mut self.days30,
        }
    }
}
