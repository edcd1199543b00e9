//! Selection/confirmation flow for starting a batch.
//!
//! DESIGN
//! ======
//! A small finite state machine driven by [`FlowEvent`]s:
//!
//! ```text
//! Browsing --item--> AmountSelect --confirm--> Confirming --submit--> Submitted
//!    ^                    |  ^                     |                    |
//!    +------back----------+  +------cancel---------+                    |
//!    +<-------------------------- success ----------------------------- +
//!                                 Confirming <------ failure ---------- +
//! ```
//!
//! The catalog snapshot is passed in on every transition rather than stored,
//! so a re-fetched snapshot is always what the flow validates against.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::model::{RecyclingData, StartBatchRequest};
use crate::pricing;

/// Where the player is in the start-batch flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    /// Picking an item from the catalog.
    #[default]
    Browsing,
    /// Item chosen; adjusting quantity and target material.
    AmountSelect,
    /// Reviewing the summary before submitting.
    Confirming,
    /// `startBatchProcessing` is in flight.
    Submitted,
}

/// Inputs to the selection flow.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
    ItemSelected(String),
    SelectionCleared,
    TargetMaterialSelected(String),
    AmountChanged(i64),
    ConfirmRequested,
    ConfirmCancelled,
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed,
}

/// Ephemeral form state for starting a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionFlow {
    pub phase: FlowPhase,
    pub selected_item: Option<String>,
    pub selected_target_material: Option<String>,
    pub selected_amount: u32,
    pub processing_fee: f64,
}

impl Default for SelectionFlow {
    fn default() -> Self {
        Self {
            phase: FlowPhase::Browsing,
            selected_item: None,
            selected_target_material: None,
            selected_amount: 1,
            processing_fee: 0.0,
        }
    }
}

impl SelectionFlow {
    /// Drop every selection and return to browsing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the confirmation summary is on screen.
    #[must_use]
    pub fn show_confirmation(&self) -> bool {
        matches!(self.phase, FlowPhase::Confirming | FlowPhase::Submitted)
    }

    /// Whether the confirm button is enabled for the current selection.
    ///
    /// Choice items need a target material; fixed items never do.
    #[must_use]
    pub fn can_confirm(&self, data: &RecyclingData) -> bool {
        if self.phase != FlowPhase::AmountSelect || data.at_capacity() {
            return false;
        }
        let Some(item) = self.selected_item.as_deref().and_then(|key| data.recyclable_items.get(key)) else {
            return false;
        };
        !item.needs_target_material() || self.selected_target_material.is_some()
    }

    /// Estimated processing minutes for the current selection.
    #[must_use]
    pub fn estimated_minutes(&self, data: &RecyclingData) -> u64 {
        let processing_time = self
            .selected_item
            .as_deref()
            .and_then(|key| data.recyclable_items.get(key))
            .map_or(0, |item| item.processing_time);
        pricing::estimated_minutes(processing_time, self.selected_amount)
    }

    /// Units of the selected item the player holds.
    #[must_use]
    pub fn available(&self, data: &RecyclingData) -> u32 {
        self.selected_item.as_deref().map_or(0, |key| data.available(key))
    }

    /// Advance the flow. Returns the request to send when the event submits.
    pub fn apply(&mut self, event: FlowEvent, data: &RecyclingData) -> Option<StartBatchRequest> {
        match event {
            FlowEvent::ItemSelected(key) => {
                self.select_item(key, data);
                None
            }
            FlowEvent::SelectionCleared => {
                if self.phase == FlowPhase::AmountSelect {
                    self.reset();
                }
                None
            }
            FlowEvent::TargetMaterialSelected(material) => {
                if self.phase == FlowPhase::AmountSelect && data.materials.contains_key(&material) {
                    let needs_material = self
                        .selected_item
                        .as_deref()
                        .and_then(|key| data.recyclable_items.get(key))
                        .is_some_and(|item| item.needs_target_material());
                    if needs_material {
                        self.selected_target_material = Some(material);
                    }
                }
                None
            }
            FlowEvent::AmountChanged(requested) => {
                if self.phase == FlowPhase::AmountSelect {
                    self.selected_amount = pricing::clamp_amount(requested, self.available(data));
                    self.processing_fee = pricing::processing_fee(self.selected_amount);
                }
                None
            }
            FlowEvent::ConfirmRequested => {
                if self.can_confirm(data) {
                    self.phase = FlowPhase::Confirming;
                }
                None
            }
            FlowEvent::ConfirmCancelled => {
                if self.phase == FlowPhase::Confirming {
                    self.phase = FlowPhase::AmountSelect;
                }
                None
            }
            FlowEvent::SubmitRequested => self.submit(data),
            FlowEvent::SubmitSucceeded => {
                if self.phase == FlowPhase::Submitted {
                    self.reset();
                }
                None
            }
            FlowEvent::SubmitFailed => {
                if self.phase == FlowPhase::Submitted {
                    self.phase = FlowPhase::Confirming;
                }
                None
            }
        }
    }

    fn select_item(&mut self, key: String, data: &RecyclingData) {
        if !matches!(self.phase, FlowPhase::Browsing | FlowPhase::AmountSelect) || data.at_capacity() {
            return;
        }
        if !data.recyclable_items.contains_key(&key) || data.available(&key) == 0 {
            return;
        }
        self.phase = FlowPhase::AmountSelect;
        self.selected_item = Some(key);
        self.selected_target_material = None;
        self.selected_amount = 1;
        self.processing_fee = pricing::processing_fee(1);
    }

    fn submit(&mut self, data: &RecyclingData) -> Option<StartBatchRequest> {
        if self.phase != FlowPhase::Confirming {
            return None;
        }
        let key = self.selected_item.clone()?;
        let item = data.recyclable_items.get(&key)?;
        let target_material = if item.needs_target_material() {
            Some(self.selected_target_material.clone()?)
        } else {
            None
        };
        self.phase = FlowPhase::Submitted;
        Some(StartBatchRequest {
            amount: self.selected_amount,
            item_type: key,
            target_material,
            processing_fee: self.processing_fee,
            location_id: data.location_id,
        })
    }
}
