use super::*;

fn enabled() -> RobberyConfig {
    RobberyConfig {
        enabled: true,
        hack_item: "lockpick".to_owned(),
        reward_percent: 50.0,
        min_processed_percent: 25.0,
        hacking_time: 10_000,
        ..RobberyConfig::default()
    }
}

#[test]
fn disabled_robbery_has_no_notice() {
    assert_eq!(notice_lines(&RobberyConfig::default()), None);
}

#[test]
fn enabled_robbery_lists_every_rule() {
    let lines = notice_lines(&enabled()).unwrap();
    assert_eq!(lines[0], "Required: lockpick");
    assert_eq!(lines[1], "Reward: 50% of materials");
    assert_eq!(lines[2], "Batch must be at least 25% processed");
    assert_eq!(lines[3], "Hacking time: 10s");
}

#[test]
fn hacking_time_rounds_up_to_whole_seconds() {
    let config = RobberyConfig { hacking_time: 7_500, ..enabled() };
    assert_eq!(notice_lines(&config).unwrap()[3], "Hacking time: 8s");
}
