//! Environment-driven settings for the development host.
//!
//! Variables are read after `dotenvy` has loaded any `.env` file. Missing
//! variables fall back to defaults; present but malformed ones are errors so
//! a typo does not silently bind the wrong port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid number, got {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("DEVHOST_LOCATION_ID must be at least 1")]
    ZeroLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevhostConfig {
    pub port: u16,
    /// Directory holding the `trunk build` output.
    pub dist_dir: PathBuf,
    /// Station the in-memory mock reports when a call omits `locationId`.
    pub location_id: u32,
}

impl DevhostConfig {
    /// Read `PORT`, `NUI_DIST_DIR`, and `DEVHOST_LOCATION_ID`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a numeric variable does not parse or the
    /// location id is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_number("PORT", DEFAULT_PORT)?;
        let dist_dir = std::env::var("NUI_DIST_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);
        let location_id = env_number("DEVHOST_LOCATION_ID", station::events::DEFAULT_LOCATION_ID)?;
        if location_id == 0 {
            return Err(ConfigError::ZeroLocation);
        }
        Ok(Self { port, dist_dir, location_id })
    }
}

pub(crate) fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
