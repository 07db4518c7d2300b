// Domain models: readings, series, alerts, derived stats, render snapshot, client commands

mod alert;
mod command;
mod reading;
mod series;
mod snapshot;
mod stats;

pub use alert::{AlertCategory, AlertEvent, AlertSeverity, CategoryFilter, RecencyGroups};
pub use command::ClientCommand;
pub use reading::{ReadingStatus, SensorChannel, SensorReading};
pub use series::{Granularity, SeriesSet, TimeSeries};
pub use snapshot::DashboardSnapshot;
pub use stats::{ComparisonStats, DerivedStats, TrendLabel};
