//! Inbound host messages and global key handling.
//!
//! The host pushes `{action, data}` objects through `window.postMessage`;
//! recognised ones become reducer events. Escape anywhere on the page closes
//! the overlay. Listeners are removed when the owning component is cleaned up.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use station::Event;
use station::events::{DEFAULT_LOCATION_ID, HostEvent};

use super::host::Station;

/// Key that closes the overlay.
pub const CLOSE_KEY: &str = "Escape";

/// Map a `keydown` key name to an overlay event.
#[must_use]
pub fn key_event(key: &str) -> Option<Event> {
    (key == CLOSE_KEY).then_some(Event::EscapePressed)
}

/// Install the `message` and `keydown` window listeners for the current owner.
pub fn listen(station: Station) {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener};

        let message = window_event_listener(leptos::ev::message, move |ev| {
            let Some(raw) = js_sys::JSON::stringify(&ev.data()).ok().and_then(|s| s.as_string()) else {
                return;
            };
            match HostEvent::parse(&raw) {
                Some(host) => station.dispatch(Event::Host(host)),
                None => log::debug!("ignoring host message {raw}"),
            }
        });
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(event) = key_event(&ev.key()) {
                station.dispatch(event);
            }
        });
        on_cleanup(move || {
            message.remove();
            keydown.remove();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = station;
    }
}

/// Synthetic `showUi` used in a plain browser, where no host opens the overlay.
#[must_use]
pub fn browser_open_event() -> Event {
    Event::Host(HostEvent::ShowUi { location_id: DEFAULT_LOCATION_ID })
}
