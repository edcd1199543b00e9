use super::*;
use serde_json::json;

#[test]
fn show_ui_reads_location_id() {
    assert_eq!(
        HostEvent::parse(r#"{"action":"showUi","data":{"locationId":3}}"#),
        Some(HostEvent::ShowUi { location_id: 3 })
    );
}

#[test]
fn show_ui_accepts_float_location_from_lua() {
    assert_eq!(
        HostEvent::parse(r#"{"action":"showUi","data":{"locationId":2.0}}"#),
        Some(HostEvent::ShowUi { location_id: 2 })
    );
}

#[test]
fn show_ui_defaults_location() {
    for raw in [
        r#"{"action":"showUi","data":true}"#,
        r#"{"action":"showUi"}"#,
        r#"{"action":"showUi","data":{}}"#,
        r#"{"action":"showUi","data":{"locationId":0}}"#,
        r#"{"action":"showUi","data":{"locationId":"north"}}"#,
    ] {
        assert_eq!(HostEvent::parse(raw), Some(HostEvent::ShowUi { location_id: DEFAULT_LOCATION_ID }), "{raw}");
    }
}

#[test]
fn hide_ui_ignores_payload() {
    assert_eq!(HostEvent::parse(r#"{"action":"hideUi","data":null}"#), Some(HostEvent::HideUi));
}

#[test]
fn unknown_actions_and_garbage_are_ignored() {
    assert_eq!(HostEvent::parse(r#"{"action":"setTheme","data":{}}"#), None);
    assert_eq!(HostEvent::parse("not json"), None);
    assert_eq!(HostEvent::parse(r#"{"data":{}}"#), None);
}

#[test]
fn from_parts_matches_parse() {
    assert_eq!(
        HostEvent::from_parts("showUi", &json!({ "locationId": 5 })),
        Some(HostEvent::ShowUi { location_id: 5 })
    );
    assert_eq!(HostEvent::from_parts("hideUi", &json!(null)), Some(HostEvent::HideUi));
}
