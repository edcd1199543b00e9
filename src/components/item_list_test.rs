use super::*;
use station::mock;

#[test]
fn rows_follow_catalog_key_order() {
    let keys: Vec<String> = rows(&mock::snapshot(1)).into_iter().map(|row| row.key).collect();
    assert_eq!(keys, vec!["lockpick".to_owned(), "recyclable_materials".to_owned()]);
}

#[test]
fn choice_item_has_no_fixed_output_marker() {
    let rows = rows(&mock::snapshot(1));
    let choice = rows.iter().find(|row| row.key == "recyclable_materials").unwrap();
    assert!(!choice.fixed_output);
    assert_eq!(choice.process_time, "2s");
    let fixed = rows.iter().find(|row| row.key == "lockpick").unwrap();
    assert!(fixed.fixed_output);
    assert_eq!(fixed.process_time, "3s");
}

#[test]
fn availability_label_reflects_count() {
    let mut row = ItemRow {
        key: "lockpick".to_owned(),
        label: "Lockpick".to_owned(),
        icon: String::new(),
        available: 5,
        process_time: "3s".to_owned(),
        fixed_output: true,
    };
    assert!(row.selectable());
    assert_eq!(row.availability(), "Available: 5");
    row.available = 0;
    assert!(!row.selectable());
    assert_eq!(row.availability(), "Not available");
}
