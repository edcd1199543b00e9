//! Guard for the two-step robbery attempt.
//!
//! `canRobBatch` must succeed before `attemptRobBatch` is sent, and only one
//! attempt may be in flight per overlay instance. Any rejection or transport
//! failure silently abandons the attempt.

#[cfg(test)]
#[path = "robbery_test.rs"]
mod robbery_test;

use crate::HostError;
use crate::batches::TrackedBatch;
use crate::model::{RecyclingData, RobResponse};

/// Which host call the pending attempt is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobberyStage {
    Checking,
    Attempting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobberyAttempt {
    pub batch_id: u32,
    pub stage: RobberyStage,
}

/// What the caller should do after a host response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobberyStep {
    /// Capability check passed; send `attemptRobBatch`.
    Attempt,
    /// The robbery went through; re-poll batches.
    Succeeded,
    /// Rejected or failed; the guard is released.
    Abandoned,
    /// Response did not belong to the pending attempt.
    Ignored,
}

/// Single-slot in-flight guard (`isRobbing`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RobberyGuard {
    pending: Option<RobberyAttempt>,
}

impl RobberyGuard {
    #[must_use]
    pub fn is_robbing(&self) -> bool {
        self.pending.is_some()
    }

    /// Batch the pending attempt targets, if any.
    #[must_use]
    pub fn robbing_batch(&self) -> Option<u32> {
        self.pending.map(|attempt| attempt.batch_id)
    }

    /// Claim the guard for `batch_id`. Returns `false` while another attempt is pending.
    pub fn begin(&mut self, batch_id: u32) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(RobberyAttempt { batch_id, stage: RobberyStage::Checking });
        true
    }

    /// Handle the `canRobBatch` response.
    pub fn check_resolved(&mut self, batch_id: u32, result: &Result<RobResponse, HostError>) -> RobberyStep {
        if self.pending != Some(RobberyAttempt { batch_id, stage: RobberyStage::Checking }) {
            return RobberyStep::Ignored;
        }
        match result {
            Ok(response) if response.success => {
                self.pending = Some(RobberyAttempt { batch_id, stage: RobberyStage::Attempting });
                RobberyStep::Attempt
            }
            Ok(_) | Err(_) => {
                self.pending = None;
                RobberyStep::Abandoned
            }
        }
    }

    /// Handle the `attemptRobBatch` response.
    pub fn attempt_resolved(&mut self, batch_id: u32, result: &Result<RobResponse, HostError>) -> RobberyStep {
        if self.pending != Some(RobberyAttempt { batch_id, stage: RobberyStage::Attempting }) {
            return RobberyStep::Ignored;
        }
        self.pending = None;
        match result {
            Ok(response) if response.success => RobberyStep::Succeeded,
            Ok(_) | Err(_) => RobberyStep::Abandoned,
        }
    }
}

/// Whether the rob button should be offered for `batch`.
///
/// Robbery must be enabled, the batch must belong to someone else and still
/// be processing, and the player needs at least one hack item.
#[must_use]
pub fn eligible(data: &RecyclingData, batch: &TrackedBatch) -> bool {
    let config = &data.robbery_config;
    config.enabled && !batch.reported.is_owner && !batch.echo_completed && data.available(&config.hack_item) > 0
}
