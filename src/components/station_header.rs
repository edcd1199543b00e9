//! Card header: station badge, title, and close button.

#[cfg(test)]
#[path = "station_header_test.rs"]
mod station_header_test;

use leptos::prelude::*;
use station::overlay::DataSource;
use station::{Event, Overlay};

use crate::net::host::Station;

/// `"Station #3"` once a snapshot is loaded.
pub fn station_badge(overlay: &Overlay) -> Option<String> {
    overlay.location_id().map(|id| format!("Station #{id}"))
}

/// Marker shown while the displayed data is the built-in fallback.
pub fn source_badge(overlay: &Overlay) -> Option<&'static str> {
    (overlay.snapshot.is_some() && overlay.source == DataSource::Mock).then_some("Offline data")
}

#[component]
pub fn StationHeader() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;

    view! {
        <header class="station-header">
            <button
                class="station-header__close"
                title="Close"
                on:click=move |_| station.dispatch(Event::CloseRequested)
            >
                <i class="fas fa-xmark"></i>
            </button>
            <div class="station-header__badges">
                <span class="badge badge--primary">
                    <i class="fas fa-recycle"></i>
                    " Recycling"
                </span>
                {move || {
                    overlay
                        .with(station_badge)
                        .map(|label| view! { <span class="badge badge--secondary">{label}</span> })
                }}
                {move || {
                    overlay
                        .with(source_badge)
                        .map(|label| view! { <span class="badge badge--muted">{label}</span> })
                }}
            </div>
            <h2 class="station-header__title">"Recycling Station"</h2>
            <p class="station-header__description">
                "Exchange your recyclable materials or items for useful resources."
            </p>
        </header>
    }
}
