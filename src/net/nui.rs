//! Request/response calls into the game host.
//!
//! Browser (csr): real `POST {base}/{callback}` requests via `gloo-net`.
//! Native builds: stubs returning [`HostError::Unavailable`] since the bridge
//! only exists inside a page.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields `Result<_, HostError>`; the reducer decides how a
//! failure degrades, so nothing here logs beyond debug traces.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "nui_test.rs"]
mod nui_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use station::model::{LocationRequest, RobResponse};
use station::{Batch, Command, Event, HostError, RecyclingData};

use crate::util::env::NuiConfig;

/// Header value the host's callback handler expects.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Map a non-success HTTP status to an error.
#[must_use]
pub fn status_error(status: u16) -> Option<HostError> {
    (!(200..300).contains(&status)).then_some(HostError::Status(status))
}

/// POST `body` to the named callback and decode the JSON answer.
///
/// # Errors
///
/// Returns [`HostError`] on transport failure, a non-success status, an
/// undecodable answer, or when no bridge is available.
pub async fn call<B, R>(config: &NuiConfig, callback: &str, body: &B) -> Result<R, HostError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let url = config.endpoint(callback);
        log::debug!("nui call {url}");
        let payload = serde_json::to_string(body)?;
        let resp = gloo_net::http::Request::post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(payload)
            .map_err(|e| HostError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| HostError::Transport(e.to_string()))?;
        if let Some(err) = status_error(resp.status()) {
            return Err(err);
        }
        let text = resp.text().await.map_err(|e| HostError::Transport(e.to_string()))?;
        decode(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, callback, body);
        Err(HostError::Unavailable)
    }
}

/// Decode a callback answer. An empty body counts as JSON `null` so bare acks
/// decode into `serde_json::Value`.
///
/// # Errors
///
/// Returns [`HostError::Decode`] when the body does not match `R`.
pub fn decode<R: DeserializeOwned>(text: &str) -> Result<R, HostError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}

async fn ack<B: Serialize>(config: &NuiConfig, callback: &str, body: &B) -> Result<(), HostError> {
    call::<_, serde_json::Value>(config, callback, body).await.map(|_| ())
}

/// Execute one reducer command and turn its outcome into the follow-up event.
pub async fn execute(config: &NuiConfig, command: Command) -> Event {
    let callback = command.callback();
    match command {
        Command::FetchSnapshot { location_id } => {
            let result = call::<_, RecyclingData>(config, callback, &LocationRequest { location_id }).await;
            Event::SnapshotLoaded(result)
        }
        Command::FetchBatches { location_id } => {
            let result = call::<_, Vec<Batch>>(config, callback, &LocationRequest { location_id }).await;
            Event::BatchesLoaded(result)
        }
        Command::StartBatch(request) => Event::SubmitFinished(ack(config, callback, &request).await),
        Command::CollectBatch(request) => Event::CollectFinished(ack(config, callback, &request).await),
        Command::CheckRobbery(request) => Event::RobCheckFinished {
            batch_id: request.batch_id,
            result: call::<_, RobResponse>(config, callback, &request).await,
        },
        Command::AttemptRobbery(request) => Event::RobAttemptFinished {
            batch_id: request.batch_id,
            result: call::<_, RobResponse>(config, callback, &request).await,
        },
        Command::HideFrame => Event::HideFrameFinished(ack(config, callback, &serde_json::json!({})).await),
    }
}
