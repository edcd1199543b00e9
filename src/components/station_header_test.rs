use super::*;
use station::FallbackPolicy;
use station::mock;

#[test]
fn no_badge_before_snapshot() {
    let overlay = Overlay::new(FallbackPolicy::MockData);
    assert_eq!(station_badge(&overlay), None);
    assert_eq!(source_badge(&overlay), None);
}

#[test]
fn badge_names_loaded_station() {
    let mut overlay = Overlay::new(FallbackPolicy::MockData);
    overlay.snapshot = Some(mock::snapshot(4));
    assert_eq!(station_badge(&overlay).as_deref(), Some("Station #4"));
    assert_eq!(source_badge(&overlay), None);
}

#[test]
fn mock_source_is_flagged() {
    let mut overlay = Overlay::new(FallbackPolicy::MockData);
    overlay.snapshot = Some(mock::snapshot(1));
    overlay.source = DataSource::Mock;
    assert_eq!(source_badge(&overlay), Some("Offline data"));
}
