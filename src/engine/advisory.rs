//! Deferred advisories.
//!
//! Adding an item with catalog alternatives schedules a notice ("Added milk. You might
//! also like almond milk!") to surface after a fixed delay. Scheduling is fire-and-forget:
//! there is no cancellation, and a notice still fires if the item was removed meanwhile.
//! The queue holds no clock of its own; callers pass `now` so tests control time.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Default delay before an advisory fires
pub const DEFAULT_ADVISORY_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub item_name: String,
    pub alternative: String,
}

impl Advisory {
    pub fn new(item_name: impl Into<String>, alternative: impl Into<String>) -> Self {
        Self { item_name: item_name.into(), alternative: alternative.into() }
    }

    /// Feedback text shown when the advisory fires
    pub fn message(&self) -> String {
        format!("Added {}. You might also like {}!", self.item_name, self.alternative)
    }
}

#[derive(Debug, Clone)]
struct ScheduledAdvisory {
    due_at: Instant,
    advisory: Advisory,
}

#[derive(Debug, Clone)]
pub struct AdvisoryQueue {
    delay: Duration,
    pending: Vec<ScheduledAdvisory>,
}

impl AdvisoryQueue {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Vec::new() }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule an advisory to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, advisory: Advisory) {
        tracing::debug!(item = %advisory.item_name, alternative = %advisory.alternative, "scheduled advisory");
        self.pending.push(ScheduledAdvisory { due_at: now + self.delay, advisory });
    }

    /// Take every advisory due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<Advisory> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|scheduled| scheduled.due_at <= now);
        self.pending = pending;
        due.sort_by_key(|scheduled| scheduled.due_at);
        due.into_iter().map(|scheduled| scheduled.advisory).collect()
    }

    /// When the next advisory becomes due
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|scheduled| scheduled.due_at).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for AdvisoryQueue {
    fn default() -> Self {
        Self::new(DEFAULT_ADVISORY_DELAY)
    }
}
