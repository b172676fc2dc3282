// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use. The bearer
//! token is required and is never given a built-in default.

use std::env;
use std::fmt;
use std::time::Duration;

/// Default base URL of the activities API.
pub const DEFAULT_API_URL: &str = "http://localhost:3460/api";

/// Sequence number looked up when `ACTIVITY_SEQUENCE` is unset.
pub const DEFAULT_SEQUENCE: i64 = 69;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Lookup configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the activities API (without the `/activities` suffix)
    pub api_url: String,
    /// Bearer token sent in the Authorization header
    pub api_token: String,
    /// Sequence number to look up
    pub target_sequence: i64,
    /// Optional request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("target_sequence", &self.target_sequence)
            .field("request_timeout", &self.request_timeout)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = var("ACTIVITIES_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_token = var("ACTIVITIES_API_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("ACTIVITIES_API_TOKEN"))?;

        let target_sequence = match var("ACTIVITY_SEQUENCE") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "ACTIVITY_SEQUENCE",
                value: raw,
            })?,
            None => DEFAULT_SEQUENCE,
        };

        let request_timeout = match var("ACTIVITIES_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "ACTIVITIES_API_TIMEOUT_SECS",
                    value: raw,
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            api_url,
            api_token,
            target_sequence,
            request_timeout,
            log_format,
        })
    }

    /// Full URL of the activities list endpoint.
    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.api_url)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
