use super::*;
use serde_json::json;

// =============================================================
// Snapshot decoding
// =============================================================

fn snapshot_json() -> serde_json::Value {
    json!({
        "materials": {
            "plastic": { "label": "Plastic", "icon": "fas fa-prescription-bottle", "processingTime": 2000 },
            "steel": { "label": "Steel", "icon": "fas fa-layer-group", "processingTime": 3000.0 }
        },
        "recyclableItems": {
            "recyclable_materials": {
                "label": "Recyclable Materials", "type": "choice", "processingTime": 2000, "icon": "fas fa-recycle"
            },
            "lockpick": {
                "label": "Lockpick", "type": "fixed", "processingTime": 3000, "icon": "fas fa-unlock",
                "output": [{ "item": "metalscrap", "amount": 2 }]
            }
        },
        "activeBatches": 1,
        "maxBatches": 3,
        "materialCount": 150,
        "itemCounts": { "recyclable_materials": 150, "lockpick": 5 },
        "locationId": 2,
        "robberyConfig": {
            "enabled": true,
            "minProcessedPercent": 50,
            "hackingTime": 10000,
            "hackItem": "lockpick",
            "successChance": 50,
            "cooldown": 300000,
            "rewardPercent": 50
        }
    })
}

#[test]
fn snapshot_decodes_host_payload() {
    let data: RecyclingData = serde_json::from_value(snapshot_json()).unwrap();
    assert_eq!(data.location_id, 2);
    assert_eq!(data.materials["steel"].processing_time, 3000);
    assert_eq!(data.recyclable_items["recyclable_materials"].category, ItemCategory::Choice);
    assert_eq!(data.recyclable_items["lockpick"].output.as_ref().map(Vec::len), Some(1));
    assert_eq!(data.available("lockpick"), 5);
    assert!(data.robbery_config.enabled);
    assert_eq!(data.robbery_config.hack_item, "lockpick");
}

#[test]
fn snapshot_accepts_empty_lua_tables() {
    let mut raw = snapshot_json();
    raw["itemCounts"] = json!([]);
    raw["materials"] = json!([]);
    let data: RecyclingData = serde_json::from_value(raw).unwrap();
    assert!(data.item_counts.is_empty());
    assert!(data.materials.is_empty());
    assert_eq!(data.available("lockpick"), 0);
}

#[test]
fn snapshot_without_robbery_config_defaults_disabled() {
    let mut raw = snapshot_json();
    raw.as_object_mut().unwrap().remove("robberyConfig");
    let data: RecyclingData = serde_json::from_value(raw).unwrap();
    assert!(!data.robbery_config.enabled);
}

#[test]
fn at_capacity_compares_active_with_max() {
    let mut data: RecyclingData = serde_json::from_value(snapshot_json()).unwrap();
    assert!(!data.at_capacity());
    data.active_batches = 3;
    assert!(data.at_capacity());
}

// =============================================================
// Batches
// =============================================================

#[test]
fn batch_decodes_mixed_case_fields() {
    let batch: Batch = serde_json::from_value(json!({
        "id": 7,
        "amount": 50,
        "item": "recyclable_materials",
        "item_type": "choice",
        "completed": false,
        "timeLeft": 179.4,
        "isOwner": true,
        "target_material": "plastic"
    }))
    .unwrap();
    assert_eq!(batch.id, 7);
    assert_eq!(batch.time_left, 180);
    assert!(batch.is_owner);
    assert_eq!(batch.target_material.as_deref(), Some("plastic"));
}

#[test]
fn batch_label_prefers_target_material_for_choice_items() {
    let data: RecyclingData = serde_json::from_value(snapshot_json()).unwrap();
    let mut batch = Batch {
        id: 1,
        amount: 10,
        item: "recyclable_materials".to_owned(),
        item_type: ItemCategory::Choice,
        completed: false,
        time_left: 10,
        is_owner: true,
        target_material: Some("steel".to_owned()),
    };
    assert_eq!(data.batch_label(&batch), "Recyclable → Steel");

    batch.target_material = None;
    assert_eq!(data.batch_label(&batch), "Recyclable Materials");

    batch.item = "mystery".to_owned();
    assert_eq!(data.batch_label(&batch), "mystery");
}

// =============================================================
// Requests
// =============================================================

#[test]
fn start_request_omits_missing_target_material() {
    let req = StartBatchRequest {
        amount: 3,
        item_type: "lockpick".to_owned(),
        target_material: None,
        processing_fee: 5.6,
        location_id: 1,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "amount": 3, "itemType": "lockpick", "processingFee": 5.6, "locationId": 1 })
    );
}

#[test]
fn batch_request_uses_camel_case() {
    let req = BatchRequest { batch_id: 4, location_id: 2 };
    assert_eq!(serde_json::to_value(req).unwrap(), json!({ "batchId": 4, "locationId": 2 }));
}

#[test]
fn rob_response_defaults_to_failure() {
    let resp: RobResponse = serde_json::from_value(json!({})).unwrap();
    assert!(!resp.success);
}
