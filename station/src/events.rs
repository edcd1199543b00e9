//! Messages pushed from the game host into the overlay.
//!
//! The host posts `{ "action": "...", "data": ... }` to the page. Only the
//! actions the overlay understands are decoded; anything else is ignored.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Deserialize;
use serde_json::Value;

/// Station used when `showUi` carries no location.
pub const DEFAULT_LOCATION_ID: u32 = 1;

/// A recognised host message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Open the overlay for a station.
    ShowUi { location_id: u32 },
    /// Close the overlay from the host side.
    HideUi,
}

#[derive(Deserialize)]
struct Envelope {
    action: String,
    #[serde(default)]
    data: Value,
}

impl HostEvent {
    /// Decode a raw message payload.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let envelope: Envelope = serde_json::from_str(raw).ok()?;
        Self::from_parts(&envelope.action, &envelope.data)
    }

    /// Decode an already-split `action`/`data` pair.
    #[must_use]
    pub fn from_parts(action: &str, data: &Value) -> Option<Self> {
        match action {
            "showUi" => Some(Self::ShowUi { location_id: location_from(data) }),
            "hideUi" => Some(Self::HideUi),
            _ => None,
        }
    }
}

/// `locationId` from the payload; missing, zero or malformed means the default station.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn location_from(data: &Value) -> u32 {
    let Some(value) = data.get("locationId") else {
        return DEFAULT_LOCATION_ID;
    };
    let whole = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0 && *f > 0.0).map(|f| f as u64));
    whole
        .and_then(|id| u32::try_from(id).ok())
        .filter(|&id| id > 0)
        .unwrap_or(DEFAULT_LOCATION_ID)
}
