//! Local countdown over host-reported batches.
//!
//! DESIGN
//! ======
//! Every batch keeps the host report untouched next to a client echo of its
//! countdown. The echo ticks once per second for display smoothness and is
//! never authoritative: [`BatchBoard::reconcile`] replaces every entry with
//! the next poll result wholesale.
//!
//! Reconciliation rule: when a tick drives an echo to zero the batch is
//! marked complete locally and the tick reports it, so the caller re-polls
//! the host immediately instead of waiting for the 30-second refresh.

#[cfg(test)]
#[path = "batches_test.rs"]
mod batches_test;

use std::time::Duration;

use crate::format;
use crate::model::Batch;

/// Period of the local countdown.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);
/// Period of the unconditional batch re-poll.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// A host batch plus its non-authoritative local countdown.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedBatch {
    /// Batch exactly as the last poll reported it.
    pub reported: Batch,
    /// Locally decremented remaining seconds.
    pub echo_time_left: u32,
    /// Locally derived completion flag.
    pub echo_completed: bool,
}

impl TrackedBatch {
    fn from_report(reported: Batch) -> Self {
        Self { echo_time_left: reported.time_left, echo_completed: reported.completed, reported }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.reported.id
    }

    /// Progress bar fill derived from the echo countdown.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        format::progress_percent(self.echo_time_left, self.reported.amount)
    }

    /// Returns `true` if this tick completed the batch.
    fn tick(&mut self) -> bool {
        if self.echo_completed {
            return false;
        }
        self.echo_time_left = self.echo_time_left.saturating_sub(1);
        self.echo_completed = self.echo_time_left == 0;
        self.echo_completed
    }
}

/// Result of one countdown tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Batches that reached zero during this tick.
    pub completed: Vec<u32>,
}

impl TickOutcome {
    /// Whether the host should be re-polled right away.
    #[must_use]
    pub fn needs_repoll(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Ordered list of batches as last polled, with local echoes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchBoard {
    items: Vec<TrackedBatch>,
}

impl BatchBoard {
    /// Replace every entry with the authoritative poll result, keeping host order.
    pub fn reconcile(&mut self, batches: Vec<Batch>) {
        self.items = batches.into_iter().map(TrackedBatch::from_report).collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Advance every incomplete echo by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let completed = self
            .items
            .iter_mut()
            .filter_map(|batch| batch.tick().then(|| batch.id()))
            .collect();
        TickOutcome { completed }
    }

    #[must_use]
    pub fn items(&self) -> &[TrackedBatch] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&TrackedBatch> {
        self.items.iter().find(|batch| batch.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_incomplete(&self) -> bool {
        self.items.iter().any(|batch| !batch.echo_completed)
    }
}
