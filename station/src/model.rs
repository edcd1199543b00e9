//! Wire types exchanged with the game host.
//!
//! DESIGN
//! ======
//! Field names mirror the host payloads exactly (a mix of camelCase and
//! snake_case) so serde round-trips stay lossless. Catalog maps are
//! `BTreeMap`s so the overlay renders them in a stable order.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wire;

/// A material the station can produce from generic recyclables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub label: String,
    /// Font Awesome icon class, e.g. `"fas fa-layer-group"`.
    pub icon: String,
    /// Per-unit processing time in milliseconds.
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub processing_time: u32,
}

/// How a recyclable item is converted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// The player picks which material the batch produces.
    Choice,
    /// The item always yields its fixed output list.
    #[default]
    Fixed,
}

/// One entry of a fixed item's output list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    pub item: String,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub amount: u32,
}

/// A catalog entry the player can feed into the station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclableItem {
    pub label: String,
    #[serde(rename = "type")]
    pub category: ItemCategory,
    /// Per-unit processing time in milliseconds.
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub processing_time: u32,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<OutputEntry>>,
}

impl RecyclableItem {
    /// Whether confirming this item requires a target material.
    #[must_use]
    pub fn needs_target_material(&self) -> bool {
        self.category == ItemCategory::Choice
    }
}

/// A processing batch as reported by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub id: u32,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub amount: u32,
    /// Recyclable item key the batch was started with.
    pub item: String,
    pub item_type: ItemCategory,
    pub completed: bool,
    /// Remaining seconds as of the poll.
    #[serde(rename = "timeLeft", deserialize_with = "wire::seconds_from_number")]
    pub time_left: u32,
    #[serde(rename = "isOwner")]
    pub is_owner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_material: Option<String>,
}

/// Robbery mini-game settings. Read-only on the overlay side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobberyConfig {
    pub enabled: bool,
    pub min_processed_percent: f64,
    /// Duration of the hacking mini-game in milliseconds.
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub hacking_time: u32,
    /// Inventory item a player must hold to attempt a robbery.
    pub hack_item: String,
    pub success_chance: f64,
    /// Cooldown between attempts in milliseconds.
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub cooldown: u32,
    pub reward_percent: f64,
}

impl Default for RobberyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_processed_percent: 0.0,
            hacking_time: 0,
            hack_item: String::new(),
            success_chance: 0.0,
            cooldown: 0,
            reward_percent: 0.0,
        }
    }
}

/// Full station snapshot fetched when the overlay opens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingData {
    #[serde(deserialize_with = "wire::lua_map")]
    pub materials: BTreeMap<String, Material>,
    #[serde(deserialize_with = "wire::lua_map")]
    pub recyclable_items: BTreeMap<String, RecyclableItem>,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub active_batches: u32,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub max_batches: u32,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub material_count: u32,
    #[serde(deserialize_with = "wire::lua_map")]
    pub item_counts: BTreeMap<String, u32>,
    #[serde(deserialize_with = "wire::u32_from_number")]
    pub location_id: u32,
    #[serde(default)]
    pub robbery_config: RobberyConfig,
}

impl RecyclingData {
    /// How many units of `item` the player currently holds.
    #[must_use]
    pub fn available(&self, item: &str) -> u32 {
        self.item_counts.get(item).copied().unwrap_or(0)
    }

    /// True once the player has as many active batches as the station allows.
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.active_batches >= self.max_batches
    }

    /// Display label for a batch, preferring the chosen material for choice items.
    #[must_use]
    pub fn batch_label(&self, batch: &Batch) -> String {
        if batch.item_type == ItemCategory::Choice {
            if let Some(material) = batch.target_material.as_deref().and_then(|m| self.materials.get(m)) {
                return format!("Recyclable → {}", material.label);
            }
        }
        self.recyclable_items
            .get(&batch.item)
            .map_or_else(|| batch.item.clone(), |item| item.label.clone())
    }
}

/// Body for `startBatchProcessing`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBatchRequest {
    pub amount: u32,
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_material: Option<String>,
    pub processing_fee: f64,
    pub location_id: u32,
}

/// Body for the per-batch calls (`collectBatch`, `canRobBatch`, `attemptRobBatch`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub batch_id: u32,
    pub location_id: u32,
}

/// Body for `getRecyclingData` and `getBatches`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub location_id: u32,
}

/// Response of `canRobBatch` and `attemptRobBatch`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
