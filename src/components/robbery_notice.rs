//! Robbery rules banner on the status tab, shown only when the station
//! allows robberies.

#[cfg(test)]
#[path = "robbery_notice_test.rs"]
mod robbery_notice_test;

use leptos::prelude::*;
use station::RobberyConfig;
use station::format;

use crate::net::host::Station;

/// Banner lines: required item, reward share, minimum progress and hack time.
pub fn notice_lines(config: &RobberyConfig) -> Option<[String; 4]> {
    config.enabled.then(|| {
        [
            format!("Required: {}", config.hack_item),
            format!("Reward: {} of materials", format::percent(config.reward_percent)),
            format!("Batch must be at least {} processed", format::percent(config.min_processed_percent)),
            format!("Hacking time: {}", format::millis_as_seconds(config.hacking_time)),
        ]
    })
}

#[component]
pub fn RobberyNotice() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;
    let lines = move || overlay.with(|o| o.snapshot.as_ref().and_then(|data| notice_lines(&data.robbery_config)));

    move || {
        lines().map(|[required, reward, progress, hacking]| {
            view! {
                <div class="robbery-notice">
                    <div class="robbery-notice__title">
                        <i class="fas fa-exclamation-triangle"></i>
                        " "
                        <span>"Robbery Information"</span>
                    </div>
                    <p class="robbery-notice__body">
                        "You can attempt to hack other players' batches."
                        <br />
                        {required}
                        <br />
                        {reward}
                        <br />
                        {progress}
                        <br />
                        {hacking}
                    </p>
                </div>
            }
        })
    }
}
