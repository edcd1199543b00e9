use super::*;
use station::flow::FlowEvent;
use station::mock;

#[test]
fn fixed_item_summary_has_no_material_line() {
    let data = mock::snapshot(1);
    let mut flow = SelectionFlow::default();
    flow.apply(FlowEvent::ItemSelected("lockpick".to_owned()), &data);
    flow.apply(FlowEvent::AmountChanged(5), &data);

    let lines = summary(&flow, &data);
    let labels: Vec<&str> = lines.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["Amount:", "Item:", "Processing Fee:", "Estimated Time:"]);
    assert_eq!(lines[0].1, "5 units");
    assert_eq!(lines[1].1, "Lockpick");
    assert_eq!(lines[2].1, "£6.00");
    assert_eq!(lines[3].1, "~1 minutes");
}

#[test]
fn choice_item_summary_names_target_material() {
    let data = mock::snapshot(1);
    let mut flow = SelectionFlow::default();
    flow.apply(FlowEvent::ItemSelected("recyclable_materials".to_owned()), &data);
    flow.apply(FlowEvent::TargetMaterialSelected("steel".to_owned()), &data);

    let lines = summary(&flow, &data);
    assert!(lines.contains(&("Target Material:", "Steel".to_owned())));
}
