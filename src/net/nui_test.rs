use super::*;
use crate::util::env::HostEnv;
use futures::executor::block_on;
use station::FallbackPolicy;
use station::model::{BatchRequest, StartBatchRequest};

fn config() -> NuiConfig {
    NuiConfig::new(HostEnv::Game, "recycler", "", FallbackPolicy::MockData)
}

// =============================================================================
// status_error
// =============================================================================

#[test]
fn success_statuses_are_not_errors() {
    assert_eq!(status_error(200), None);
    assert_eq!(status_error(204), None);
}

#[test]
fn other_statuses_map_to_status_error() {
    assert_eq!(status_error(404), Some(HostError::Status(404)));
    assert_eq!(status_error(500), Some(HostError::Status(500)));
    assert_eq!(status_error(302), Some(HostError::Status(302)));
}

// =============================================================================
// decode
// =============================================================================

#[test]
fn empty_body_decodes_as_null_ack() {
    let value: serde_json::Value = decode("").unwrap();
    assert!(value.is_null());
}

#[test]
fn rob_response_decodes() {
    let resp: RobResponse = decode(r#"{"success":true}"#).unwrap();
    assert!(resp.success);
}

#[test]
fn mismatched_body_is_decode_error() {
    let err = decode::<Vec<Batch>>(r#"{"ok":true}"#).unwrap_err();
    assert!(matches!(err, HostError::Decode(_)));
}

#[test]
fn batch_list_decodes_from_host_shape() {
    let batches: Vec<Batch> = decode(
        r#"[{"id":7,"amount":10,"item":"lockpick","item_type":"fixed","completed":false,"timeLeft":12.4,"isOwner":true}]"#,
    )
    .unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].time_left, 13);
}

// =============================================================================
// execute (native builds have no bridge)
// =============================================================================

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_snapshot_without_bridge_reports_unavailable() {
    let event = block_on(execute(&config(), Command::FetchSnapshot { location_id: 3 }));
    assert_eq!(event, Event::SnapshotLoaded(Err(HostError::Unavailable)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn robbery_results_carry_the_batch_id() {
    let request = BatchRequest { batch_id: 9, location_id: 1 };
    let event = block_on(execute(&config(), Command::CheckRobbery(request)));
    assert_eq!(event, Event::RobCheckFinished { batch_id: 9, result: Err(HostError::Unavailable) });
    let event = block_on(execute(&config(), Command::AttemptRobbery(request)));
    assert_eq!(event, Event::RobAttemptFinished { batch_id: 9, result: Err(HostError::Unavailable) });
}

#[cfg(not(feature = "csr"))]
#[test]
fn acks_map_to_their_finished_events() {
    let start = StartBatchRequest {
        amount: 2,
        item_type: "lockpick".to_owned(),
        target_material: None,
        processing_fee: 5.4,
        location_id: 1,
    };
    assert_eq!(
        block_on(execute(&config(), Command::StartBatch(start))),
        Event::SubmitFinished(Err(HostError::Unavailable))
    );
    assert_eq!(
        block_on(execute(&config(), Command::HideFrame)),
        Event::HideFrameFinished(Err(HostError::Unavailable))
    );
}
