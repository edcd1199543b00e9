//! In-memory stand-in for the game host.
//!
//! DESIGN
//! ======
//! Seeded from the same mock data the overlay falls back to, then mutated by
//! the callbacks: starting a batch consumes items and schedules a finish
//! time, collecting removes it, and robbery checks follow the station's
//! robbery settings. Remaining time is computed from wall-clock deadlines on
//! every read so polls see a live countdown.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::time::{Duration, Instant};

use station::model::{BatchRequest, RobResponse, StartBatchRequest};
use station::{Batch, RecyclingData, mock};
use tokio::sync::RwLock;

/// Errors a callback can report back as an HTTP status.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StationError {
    #[error("unknown item {0}")]
    UnknownItem(String),
    #[error("unknown batch {0}")]
    UnknownBatch(u32),
    #[error("not enough {item}: have {have}, need {need}")]
    NotEnough { item: String, have: u32, need: u32 },
    #[error("station is at capacity")]
    AtCapacity,
    #[error("batch {0} cannot be collected")]
    NotCollectable(u32),
}

struct RunningBatch {
    batch: Batch,
    ends_at: Instant,
}

impl RunningBatch {
    fn report(&self, now: Instant) -> Batch {
        let remaining = self.ends_at.saturating_duration_since(now);
        let time_left = u32::try_from(remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)).unwrap_or(u32::MAX);
        Batch { time_left, completed: self.batch.completed || time_left == 0, ..self.batch.clone() }
    }
}

/// Mutable mock station.
pub struct MockStation {
    data: RecyclingData,
    batches: Vec<RunningBatch>,
    next_id: u32,
}

impl MockStation {
    #[must_use]
    pub fn new(location_id: u32) -> Self {
        let now = Instant::now();
        let batches: Vec<RunningBatch> = mock::batches()
            .into_iter()
            .map(|batch| RunningBatch { ends_at: now + Duration::from_secs(u64::from(batch.time_left)), batch })
            .collect();
        let next_id = batches.iter().map(|b| b.batch.id).max().unwrap_or(0) + 1;
        Self { data: mock::snapshot(location_id), batches, next_id }
    }

    /// Snapshot as reported to the station with `location_id`.
    #[must_use]
    pub fn snapshot(&self, location_id: u32) -> RecyclingData {
        RecyclingData { location_id, active_batches: self.owned_batches(), ..self.data.clone() }
    }

    #[must_use]
    pub fn batches(&self, now: Instant) -> Vec<Batch> {
        self.batches.iter().map(|running| running.report(now)).collect()
    }

    /// Start a batch for the local player.
    ///
    /// # Errors
    ///
    /// Fails when the item is unknown, the player holds too few units, or the
    /// station is at capacity.
    pub fn start(&mut self, request: &StartBatchRequest, now: Instant) -> Result<u32, StationError> {
        let item = self
            .data
            .recyclable_items
            .get(&request.item_type)
            .ok_or_else(|| StationError::UnknownItem(request.item_type.clone()))?;
        if self.owned_batches() >= self.data.max_batches {
            return Err(StationError::AtCapacity);
        }
        let have = self.data.available(&request.item_type);
        if request.amount == 0 || have < request.amount {
            return Err(StationError::NotEnough { item: request.item_type.clone(), have, need: request.amount });
        }

        let duration = Duration::from_millis(u64::from(item.processing_time) * u64::from(request.amount));
        let batch = Batch {
            id: self.next_id,
            amount: request.amount,
            item: request.item_type.clone(),
            item_type: item.category,
            completed: false,
            time_left: 0,
            is_owner: true,
            target_material: request.target_material.clone(),
        };
        self.next_id += 1;
        self.data.item_counts.insert(request.item_type.clone(), have - request.amount);
        self.batches.push(RunningBatch { batch, ends_at: now + duration });
        Ok(self.next_id - 1)
    }

    /// Collect one of the player's finished batches.
    ///
    /// # Errors
    ///
    /// Fails when the batch does not exist, belongs to someone else, or is
    /// still processing.
    pub fn collect(&mut self, request: BatchRequest, now: Instant) -> Result<Batch, StationError> {
        let index = self
            .batches
            .iter()
            .position(|running| running.batch.id == request.batch_id)
            .ok_or(StationError::UnknownBatch(request.batch_id))?;
        let report = self.batches[index].report(now);
        if !report.is_owner || !report.completed {
            return Err(StationError::NotCollectable(request.batch_id));
        }
        self.batches.remove(index);
        Ok(report)
    }

    /// Answer `canRobBatch` / `attemptRobBatch`.
    #[must_use]
    pub fn rob(&self, request: BatchRequest, now: Instant) -> RobResponse {
        let config = &self.data.robbery_config;
        let target = self.batches.iter().find(|running| running.batch.id == request.batch_id);
        let verdict = match target.map(|running| running.report(now)) {
            _ if !config.enabled => Err("robbery is disabled at this station"),
            None => Err("batch not found"),
            Some(batch) if batch.is_owner => Err("you cannot rob your own batch"),
            Some(batch) if batch.completed => Err("batch already finished"),
            Some(_) if self.data.available(&config.hack_item) == 0 => Err("missing hack item"),
            Some(_) => Ok(()),
        };
        match verdict {
            Ok(()) => RobResponse { success: true, message: None },
            Err(reason) => RobResponse { success: false, message: Some(reason.to_owned()) },
        }
    }

    fn owned_batches(&self) -> u32 {
        u32::try_from(self.batches.iter().filter(|running| running.batch.is_owner).count()).unwrap_or(u32::MAX)
    }

    #[cfg(test)]
    pub(crate) fn data_mut(&mut self) -> &mut RecyclingData {
        &mut self.data
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct DevState {
    pub station: Arc<RwLock<MockStation>>,
    pub default_location: u32,
}

impl DevState {
    #[must_use]
    pub fn new(location_id: u32) -> Self {
        Self { station: Arc::new(RwLock::new(MockStation::new(location_id))), default_location: location_id }
    }
}
