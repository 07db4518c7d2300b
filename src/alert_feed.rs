// Alert feed: capped, newest-first event log plus pure grouping/filtering helpers.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::{AlertCategory, AlertEvent, AlertSeverity, CategoryFilter, RecencyGroups};

/// Default number of events kept in the feed.
pub const DEFAULT_CAPACITY: usize = 10;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const JUST_NOW_MS: i64 = 5 * MS_PER_MINUTE;
/// Whole elapsed hours still reported as "Last hour" (so 90 minutes ago is the last hour).
const LAST_HOUR_WHOLE_HOURS: i64 = 1;
const EARLIER_TODAY_HOURS: i64 = 12;

const TEMPLATES: [&str; 4] = [
    "{} levels above normal range",
    "Unusual {} pattern detected",
    "{} sensor reading spike",
    "{} threshold warning triggered",
];

/// Newest-first event log holding at most `capacity` events.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    events: Vec<AlertEvent>,
    capacity: usize,
    next_id: u64,
}

impl AlertFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Feed pre-filled with fixed historical events relative to `now` (ms).
    pub fn seeded(capacity: usize, now: i64) -> Self {
        let mut feed = Self::new(capacity);
        let seeds = [
            (
                "VOC levels returned to normal",
                AlertCategory::Voc,
                AlertSeverity::Success,
                now - 2 * MS_PER_MINUTE,
            ),
            (
                "Humidity above recommended range",
                AlertCategory::Humidity,
                AlertSeverity::Warning,
                now - 25 * MS_PER_MINUTE,
            ),
            (
                "Sensor calibration completed",
                AlertCategory::System,
                AlertSeverity::Success,
                now - 3 * MS_PER_HOUR,
            ),
            (
                "CO2 spike detected in Zone B",
                AlertCategory::Co2,
                AlertSeverity::Warning,
                now - 2 * 24 * MS_PER_HOUR,
            ),
        ];
        // Oldest first so the newest ends up at index 0.
        for (message, category, severity, timestamp) in seeds.into_iter().rev() {
            let id = feed.allocate_id();
            feed.append(AlertEvent {
                id,
                message: message.to_string(),
                category,
                severity,
                timestamp,
            });
        }
        feed
    }

    pub fn events(&self) -> &[AlertEvent] {
        &self.events
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Next unique event id for this feed.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Prepends `event` and evicts the oldest entries beyond capacity.
    pub fn append(&mut self, event: AlertEvent) -> &[AlertEvent] {
        self.events.insert(0, event);
        self.events.truncate(self.capacity);
        &self.events
    }

    /// Synthesizes one warning for a random category and appends it.
    pub fn push_synthesized<R: Rng + ?Sized>(
        &mut self,
        categories: &[AlertCategory],
        now: i64,
        rng: &mut R,
    ) -> Option<&AlertEvent> {
        let id = self.allocate_id();
        let event = synthesize(categories, id, now, rng)?;
        self.append(event);
        self.events.first()
    }
}

impl Default for AlertFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// One synthesized warning: uniform category, one of four fixed templates, timestamped `now`.
/// `None` when `categories` is empty.
pub fn synthesize<R: Rng + ?Sized>(
    categories: &[AlertCategory],
    id: u64,
    now: i64,
    rng: &mut R,
) -> Option<AlertEvent> {
    let category = *categories.choose(rng)?;
    let template = TEMPLATES[rng.random_range(0..TEMPLATES.len())];
    Some(AlertEvent {
        id,
        message: template.replacen("{}", category.display_name(), 1),
        category,
        severity: AlertSeverity::Warning,
        timestamp: now,
    })
}

/// Buckets events by age: under 5 minutes, at most one whole hour, under 12 hours, older.
/// Hours are truncated. Future timestamps count as "Just now". Order inside each bucket
/// follows the input order.
pub fn group_by_recency(events: &[AlertEvent], now: i64) -> RecencyGroups {
    let mut groups = RecencyGroups::default();
    for event in events {
        let elapsed = now.saturating_sub(event.timestamp).max(0);
        let hours = elapsed / MS_PER_HOUR;
        let bucket = if elapsed < JUST_NOW_MS {
            &mut groups.just_now
        } else if hours <= LAST_HOUR_WHOLE_HOURS {
            &mut groups.last_hour
        } else if hours < EARLIER_TODAY_HOURS {
            &mut groups.earlier_today
        } else {
            &mut groups.older
        };
        bucket.push(event.clone());
    }
    groups
}

pub fn filter_by_category(events: &[AlertEvent], filter: CategoryFilter) -> Vec<AlertEvent> {
    match filter {
        CategoryFilter::All => events.to_vec(),
        CategoryFilter::Only(category) => events
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect(),
    }
}
