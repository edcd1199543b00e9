//! Hard-coded station data used when the host cannot be reached.
//!
//! Lets the overlay render something meaningful in a plain browser during
//! development; `devhost` serves the same data over HTTP.

use std::collections::BTreeMap;

use crate::model::{Batch, ItemCategory, Material, OutputEntry, RecyclableItem, RecyclingData, RobberyConfig};

fn material(label: &str, icon: &str, processing_time: u32) -> Material {
    Material { label: label.to_owned(), icon: icon.to_owned(), processing_time }
}

fn output(item: &str, amount: u32) -> OutputEntry {
    OutputEntry { item: item.to_owned(), amount }
}

/// Snapshot for the given station.
#[must_use]
pub fn snapshot(location_id: u32) -> RecyclingData {
    let materials = BTreeMap::from([
        ("plastic".to_owned(), material("Plastic", "fas fa-prescription-bottle", 2000)),
        ("steel".to_owned(), material("Steel", "fas fa-layer-group", 3000)),
    ]);

    let recyclable_items = BTreeMap::from([
        (
            "recyclable_materials".to_owned(),
            RecyclableItem {
                label: "Recyclable Materials".to_owned(),
                category: ItemCategory::Choice,
                processing_time: 2000,
                icon: "fas fa-recycle".to_owned(),
                output: None,
            },
        ),
        (
            "lockpick".to_owned(),
            RecyclableItem {
                label: "Lockpick".to_owned(),
                category: ItemCategory::Fixed,
                processing_time: 3000,
                icon: "fas fa-unlock".to_owned(),
                output: Some(vec![output("metalscrap", 2), output("steel", 1), output("plastic", 1)]),
            },
        ),
    ]);

    let item_counts = BTreeMap::from([
        ("recyclable_materials".to_owned(), 150),
        ("lockpick".to_owned(), 5),
        ("phone".to_owned(), 2),
        ("radio".to_owned(), 0),
    ]);

    RecyclingData {
        materials,
        recyclable_items,
        active_batches: 1,
        max_batches: 3,
        material_count: 150,
        item_counts,
        location_id,
        robbery_config: RobberyConfig {
            enabled: false,
            min_processed_percent: 50.0,
            hacking_time: 10_000,
            hack_item: "lockpick".to_owned(),
            success_chance: 50.0,
            cooldown: 300_000,
            reward_percent: 50.0,
        },
    }
}

/// One running batch owned by the player and one finished batch owned by someone else.
#[must_use]
pub fn batches() -> Vec<Batch> {
    vec![
        Batch {
            id: 1,
            amount: 50,
            item: "recyclable_materials".to_owned(),
            item_type: ItemCategory::Choice,
            completed: false,
            time_left: 180,
            is_owner: true,
            target_material: Some("plastic".to_owned()),
        },
        Batch {
            id: 2,
            amount: 25,
            item: "lockpick".to_owned(),
            item_type: ItemCategory::Fixed,
            completed: true,
            time_left: 0,
            is_owner: false,
            target_material: None,
        },
    ]
}
