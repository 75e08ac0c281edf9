//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use std::env;
use std::path::Path;
use std::time::Duration;

use dotenv::dotenv;

use crate::constants::{provider, report};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Base URL of the lyric provider
    pub lyrics_api_url: String,
    /// Timeout applied to each lyric lookup
    pub request_timeout: Duration,
    /// Maximum number of rows printed by the ranking chart
    pub chart_limit: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_api_url: provider::DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(provider::DEFAULT_TIMEOUT_SECS),
            chart_limit: report::DEFAULT_CHART_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a specific .env-style file without touching
    /// the process environment.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let iter = dotenv::from_path_iter(path).map_err(|e| match e {
            dotenv::Error::Io(source) => Error::io(source, path.to_path_buf()),
            other => Error::Parse(format!("{}: {other}", path.display())),
        })?;

        let mut vars = std::collections::HashMap::new();
        for item in iter {
            let (key, value) =
                item.map_err(|e| Error::Parse(format!("{}: {e}", path.display())))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("LYRICS_API_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(Error::config(
                    "LYRICS_API_URL is empty",
                    "Unset it to use the default provider or give a full http(s) URL",
                ));
            }
            config.lyrics_api_url = url;
        }

        if let Some(secs) = lookup("LYRICS_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(Error::config(
                        "LYRICS_TIMEOUT_SECS must be greater than zero",
                        "Use a timeout of at least 1 second",
                    ))
                }
                Ok(secs) => config.request_timeout = Duration::from_secs(secs),
                Err(_) => {
                    return Err(Error::config(
                        format!("LYRICS_TIMEOUT_SECS is not a number: {secs:?}"),
                        "Use a whole number of seconds, e.g. LYRICS_TIMEOUT_SECS=15",
                    ))
                }
            }
        }

        if let Some(limit) = lookup("CHART_LIMIT") {
            config.chart_limit = limit.trim().parse::<usize>().map_err(|_| {
                Error::config(
                    format!("CHART_LIMIT is not a number: {limit:?}"),
                    "Use a whole number of rows, e.g. CHART_LIMIT=10",
                )
            })?;
        }

        tracing::debug!(
            url = %config.lyrics_api_url,
            timeout = ?config.request_timeout,
            chart_limit = config.chart_limit,
            "configuration loaded"
        );

        Ok(config)
    }
}
