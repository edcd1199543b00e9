//! Router assembly and NUI callback handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay, when opened in a plain browser, posts its callbacks to
//! `{origin}/nui/{callName}`. This router answers those from the in-memory
//! [`MockStation`](crate::state::MockStation) and serves the built bundle for
//! every other path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path as FsPath;
use std::str::FromStr;
use std::time::Instant;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use station::model::{BatchRequest, LocationRequest, StartBatchRequest};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::state::{DevState, StationError};

/// Callbacks the overlay knows how to make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Callback {
    GetRecyclingData,
    GetBatches,
    StartBatchProcessing,
    CollectBatch,
    CanRobBatch,
    AttemptRobBatch,
    HideFrame,
}

impl FromStr for Callback {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "getRecyclingData" => Self::GetRecyclingData,
            "getBatches" => Self::GetBatches,
            "startBatchProcessing" => Self::StartBatchProcessing,
            "collectBatch" => Self::CollectBatch,
            "canRobBatch" => Self::CanRobBatch,
            "attemptRobBatch" => Self::AttemptRobBatch,
            "hideFrame" => Self::HideFrame,
            _ => return Err(()),
        })
    }
}

pub fn app(state: DevState, dist_dir: &FsPath) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let bundle = ServeDir::new(dist_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/nui/{callback}", post(nui_callback))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

fn station_error_to_status(err: &StationError) -> StatusCode {
    match err {
        StationError::UnknownItem(_) | StationError::UnknownBatch(_) => StatusCode::NOT_FOUND,
        StationError::NotEnough { .. } | StationError::AtCapacity | StationError::NotCollectable(_) => {
            StatusCode::CONFLICT
        }
    }
}

fn parse_body<T: DeserializeOwned>(callback: Callback, body: Value) -> Result<T, StatusCode> {
    serde_json::from_value(body).map_err(|e| {
        warn!(?callback, error = %e, "malformed callback body");
        StatusCode::BAD_REQUEST
    })
}

/// Decode a JSON body; an empty body is `null`.
fn body_value(raw: &[u8]) -> Result<Value, StatusCode> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(raw).map_err(|e| {
        warn!(error = %e, "callback body is not JSON");
        StatusCode::BAD_REQUEST
    })
}

/// Station id from a body that may omit it.
fn location_or(body: &Value, default: u32) -> u32 {
    serde_json::from_value::<LocationRequest>(body.clone()).map_or(default, |req| req.location_id)
}

/// `POST /nui/{callback}`: answer one overlay callback.
pub async fn nui_callback(
    State(state): State<DevState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, StatusCode> {
    let callback = name.parse::<Callback>().map_err(|()| {
        warn!(callback = %name, "unknown callback");
        StatusCode::NOT_FOUND
    })?;
    let body = body_value(&body)?;
    let now = Instant::now();

    let answer = match callback {
        Callback::GetRecyclingData => {
            let location_id = location_or(&body, state.default_location);
            json!(state.station.read().await.snapshot(location_id))
        }
        Callback::GetBatches => json!(state.station.read().await.batches(now)),
        Callback::StartBatchProcessing => {
            let request: StartBatchRequest = parse_body(callback, body)?;
            let id = state.station.write().await.start(&request, now).map_err(|e| {
                warn!(error = %e, "start batch rejected");
                station_error_to_status(&e)
            })?;
            info!(batch_id = id, item = %request.item_type, amount = request.amount, "batch started");
            json!({ "success": true, "batchId": id })
        }
        Callback::CollectBatch => {
            let request: BatchRequest = parse_body(callback, body)?;
            let batch = state.station.write().await.collect(request, now).map_err(|e| {
                warn!(error = %e, "collect rejected");
                station_error_to_status(&e)
            })?;
            info!(batch_id = batch.id, "batch collected");
            json!({ "success": true })
        }
        Callback::CanRobBatch | Callback::AttemptRobBatch => {
            let request: BatchRequest = parse_body(callback, body)?;
            let resp = state.station.read().await.rob(request, now);
            info!(?callback, batch_id = request.batch_id, success = resp.success, "robbery step");
            json!(resp)
        }
        Callback::HideFrame => json!({}),
    };
    Ok(Json(answer))
}
