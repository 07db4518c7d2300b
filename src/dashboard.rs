// Per-view dashboard state and the ordered mutation applied on every tick.
// Owned exclusively by one session; nothing here is shared or persisted.

use rand::Rng;

use crate::alert_feed::{self, AlertFeed};
use crate::models::{
    AlertCategory, AlertEvent, CategoryFilter, DashboardSnapshot, Granularity, SensorReading,
    SeriesSet,
};
use crate::{stats, telemetry};

/// Default chance of synthesizing an alert on a tick.
pub const DEFAULT_ALERT_PROBABILITY: f64 = 0.1;

/// Tunables for one dashboard session.
#[derive(Debug, Clone, Copy)]
pub struct SimulationOptions {
    pub alert_probability: f64,
    pub alert_feed_capacity: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            alert_probability: DEFAULT_ALERT_PROBABILITY,
            alert_feed_capacity: alert_feed::DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    readings: Vec<SensorReading>,
    series: SeriesSet,
    feed: AlertFeed,
    granularity: Granularity,
    pending_granularity: Option<Granularity>,
    alert_filter: CategoryFilter,
    alert_probability: f64,
    ticks: u64,
}

impl DashboardState {
    /// Fresh state at mount time: fixed readings, random series, seeded alert history.
    pub fn new<R: Rng + ?Sized>(options: SimulationOptions, now: i64, rng: &mut R) -> Self {
        Self {
            readings: telemetry::initial_readings(),
            series: telemetry::initial_series_set(rng),
            feed: AlertFeed::seeded(options.alert_feed_capacity, now),
            granularity: Granularity::Hours24,
            pending_granularity: None,
            alert_filter: CategoryFilter::All,
            alert_probability: if options.alert_probability.is_nan() {
                DEFAULT_ALERT_PROBABILITY
            } else {
                options.alert_probability.clamp(0.0, 1.0)
            },
            ticks: 0,
        }
    }

    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    pub fn feed(&self) -> &AlertFeed {
        &self.feed
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn pending_granularity(&self) -> Option<Granularity> {
        self.pending_granularity
    }

    pub fn alert_filter(&self) -> CategoryFilter {
        self.alert_filter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One tick, in order: walk every reading; slide all three series when the active
    /// granularity is 24h; maybe synthesize an alert. Returns the new alert, if any.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: i64, rng: &mut R) -> Option<AlertEvent> {
        self.ticks += 1;

        for reading in &mut self.readings {
            telemetry::step_reading(reading, rng);
        }

        if self.granularity == Granularity::Hours24 {
            for g in Granularity::ALL {
                let series = self.series.get_mut(g);
                let sample = telemetry::next_sample(series, rng);
                series.slide(sample);
            }
        }

        if rng.random_bool(self.alert_probability) {
            return self
                .feed
                .push_synthesized(&AlertCategory::ALL, now, rng)
                .cloned();
        }
        None
    }

    /// Records a granularity switch to apply after the transition delay.
    /// Returns false when `requested` is already active and nothing is pending.
    pub fn request_granularity(&mut self, requested: Granularity) -> bool {
        if requested == self.granularity && self.pending_granularity.is_none() {
            return false;
        }
        self.pending_granularity = Some(requested);
        true
    }

    /// Applies the pending switch and regenerates the newly active series.
    pub fn apply_granularity<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Granularity> {
        let next = self.pending_granularity.take()?;
        self.granularity = next;
        *self.series.get_mut(next) = telemetry::initial_series(next.series_len(), rng);
        Some(next)
    }

    pub fn set_alert_filter(&mut self, filter: CategoryFilter) {
        self.alert_filter = filter;
    }

    /// Read-only copy of everything the presentation layer renders.
    pub fn snapshot(&self, now: i64) -> DashboardSnapshot {
        let filtered = alert_feed::filter_by_category(self.feed.events(), self.alert_filter);
        DashboardSnapshot {
            timestamp: now,
            granularity: self.granularity,
            transitioning: self.pending_granularity.is_some(),
            readings: self.readings.clone(),
            series: self.series.clone(),
            alerts: self.feed.events().to_vec(),
            alert_filter: self.alert_filter,
            alert_groups: alert_feed::group_by_recency(&filtered, now),
            stats: stats::comparison(&self.series),
        }
    }
}
