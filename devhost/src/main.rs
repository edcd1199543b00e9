//! Development host for the recycling-station overlay.
//!
//! Serves the `trunk build` output and answers the overlay's NUI callbacks
//! from an in-memory mock station, so the UI can be exercised in a regular
//! browser without the game client.

mod config;
mod routes;
mod state;

use config::DevhostConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = DevhostConfig::from_env()?;
    let state = state::DevState::new(config.location_id);
    let app = routes::app(state, &config.dist_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, dist = %config.dist_dir.display(), "devhost listening");
    axum::serve(listener, app).await?;
    Ok(())
}
