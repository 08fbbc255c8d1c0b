//! Runtime configuration for upstream endpoints and credentials.
//!
//! Configuration is resolved once at process start and passed explicitly
//! into the clients. The directions API key in particular is injected at
//! construction rather than read ambiently by the resolver.

use std::env;

use crate::error::{Error, Result};

/// Fixed directory endpoint returning the list of kitchen locations.
pub const DEFAULT_DIRECTORY_URL: &str = "https://api.staging.clustertruck.com/api/kitchens";

/// Default directions provider endpoint.
pub const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved configuration for the closest-kitchen finder.
#[derive(Debug, Clone)]
pub struct Config {
    /// Kitchen directory endpoint.
    pub directory_url: String,
    /// Directions provider endpoint.
    pub directions_url: String,
    /// API key for the directions provider.
    pub api_key: String,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `GOOGLE_DIRECTIONS_API_KEY` is required. `KITCHEN_DIRECTORY_URL`,
    /// `DIRECTIONS_API_URL`, and `REQUEST_TIMEOUT_SECS` fall back to
    /// defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when the API key is absent or
    /// empty, and [`Error::InvalidConfig`] when the timeout cannot be
    /// parsed as seconds.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GOOGLE_DIRECTIONS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let directory_url =
            env::var("KITCHEN_DIRECTORY_URL").unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string());
        let directions_url =
            env::var("DIRECTIONS_API_URL").unwrap_or_else(|_| DEFAULT_DIRECTIONS_URL.to_string());

        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|e| Error::InvalidConfig {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                message: format!("{e}"),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            directory_url,
            directions_url,
            api_key,
            timeout_secs,
        })
    }
}
