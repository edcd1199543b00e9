use super::*;

fn state() -> DevState {
    DevState::new(1)
}

async fn call(state: &DevState, name: &str, body: &str) -> Result<Value, StatusCode> {
    let Json(value) =
        nui_callback(State(state.clone()), Path(name.to_owned()), Bytes::from(body.to_owned())).await?;
    Ok(value)
}

// =============================================================================
// Callback names
// =============================================================================

#[test]
fn callback_names_parse() {
    assert_eq!("getRecyclingData".parse::<Callback>(), Ok(Callback::GetRecyclingData));
    assert_eq!("hideFrame".parse::<Callback>(), Ok(Callback::HideFrame));
    assert_eq!("GetBatches".parse::<Callback>(), Err(()));
}

#[test]
fn body_value_treats_blank_as_null() {
    assert_eq!(body_value(b""), Ok(Value::Null));
    assert_eq!(body_value(b"  \n"), Ok(Value::Null));
    assert_eq!(body_value(b"{oops"), Err(StatusCode::BAD_REQUEST));
}

#[test]
fn station_errors_map_to_statuses() {
    assert_eq!(station_error_to_status(&StationError::UnknownBatch(4)), StatusCode::NOT_FOUND);
    assert_eq!(station_error_to_status(&StationError::AtCapacity), StatusCode::CONFLICT);
}

// =============================================================================
// Handler
// =============================================================================

#[tokio::test]
async fn unknown_callback_is_not_found() {
    assert_eq!(call(&state(), "spawnVehicle", "{}").await, Err(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn snapshot_echoes_requested_location() {
    let value = call(&state(), "getRecyclingData", r#"{"locationId":4}"#).await.unwrap();
    assert_eq!(value["locationId"], 4);
    assert_eq!(value["maxBatches"], 3);
}

#[tokio::test]
async fn snapshot_without_body_uses_default_location() {
    let value = call(&DevState::new(2), "getRecyclingData", "").await.unwrap();
    assert_eq!(value["locationId"], 2);
}

#[tokio::test]
async fn started_batch_appears_in_poll() {
    let state = state();
    let body = r#"{"amount":2,"itemType":"lockpick","processingFee":5.4,"locationId":1}"#;
    let ack = call(&state, "startBatchProcessing", body).await.unwrap();
    assert_eq!(ack["success"], true);

    let batches = call(&state, "getBatches", r#"{"locationId":1}"#).await.unwrap();
    let list = batches.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[2]["item"], "lockpick");
    assert_eq!(list[2]["isOwner"], true);
}

#[tokio::test]
async fn malformed_start_is_bad_request() {
    let err = call(&state(), "startBatchProcessing", r#"{"amount":"lots"}"#).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn collecting_running_batch_conflicts() {
    let err = call(&state(), "collectBatch", r#"{"batchId":1,"locationId":1}"#).await.unwrap_err();
    assert_eq!(err, StatusCode::CONFLICT);
}

#[tokio::test]
async fn robbery_disabled_answers_unsuccessfully() {
    let value = call(&state(), "canRobBatch", r#"{"batchId":2,"locationId":1}"#).await.unwrap();
    assert_eq!(value["success"], false);
}

#[tokio::test]
async fn hide_frame_acks() {
    assert_eq!(call(&state(), "hideFrame", "").await, Ok(json!({})));
}
