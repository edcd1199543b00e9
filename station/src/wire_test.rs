use super::*;

#[derive(Debug, Deserialize)]
struct Probe {
    #[serde(deserialize_with = "u32_from_number")]
    count: u32,
    #[serde(deserialize_with = "seconds_from_number")]
    seconds: u32,
    #[serde(deserialize_with = "lua_map")]
    map: BTreeMap<String, u32>,
}

fn probe(json: &str) -> Result<Probe, serde_json::Error> {
    serde_json::from_str(json)
}

#[test]
fn integer_fields_accept_whole_floats() {
    let p = probe(r#"{"count": 3.0, "seconds": 1, "map": {}}"#).unwrap();
    assert_eq!(p.count, 3);
}

#[test]
fn integer_fields_reject_fractions_and_negatives() {
    assert!(probe(r#"{"count": 2.5, "seconds": 1, "map": {}}"#).is_err());
    assert!(probe(r#"{"count": -1, "seconds": 1, "map": {}}"#).is_err());
    assert!(probe(r#"{"count": "4", "seconds": 1, "map": {}}"#).is_err());
}

#[test]
fn seconds_round_up_and_clamp_at_zero() {
    assert_eq!(probe(r#"{"count": 0, "seconds": 4.2, "map": {}}"#).unwrap().seconds, 5);
    assert_eq!(probe(r#"{"count": 0, "seconds": -7, "map": {}}"#).unwrap().seconds, 0);
    assert_eq!(probe(r#"{"count": 0, "seconds": 180, "map": {}}"#).unwrap().seconds, 180);
}

#[test]
fn empty_lua_table_decodes_as_empty_map() {
    let p = probe(r#"{"count": 0, "seconds": 0, "map": []}"#).unwrap();
    assert!(p.map.is_empty());
}

#[test]
fn object_map_decodes_in_key_order() {
    let p = probe(r#"{"count": 0, "seconds": 0, "map": {"steel": 2, "plastic": 1}}"#).unwrap();
    let keys: Vec<_> = p.map.keys().cloned().collect();
    assert_eq!(keys, vec!["plastic".to_owned(), "steel".to_owned()]);
}

#[test]
fn non_empty_array_is_not_a_map() {
    assert!(probe(r#"{"count": 0, "seconds": 0, "map": [1, 2]}"#).is_err());
}
