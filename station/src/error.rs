//! Errors surfaced by the host bridge.

/// Why a request to the game host did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The request never completed (no host listening, network failure).
    #[error("host request failed: {0}")]
    Transport(String),
    /// The host answered with a non-success HTTP status.
    #[error("host responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("failed to decode host response: {0}")]
    Decode(String),
    /// The bridge only exists in a browser build.
    #[error("host bridge is not available in this build")]
    Unavailable,
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
