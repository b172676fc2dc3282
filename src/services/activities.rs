// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Issues a single authorized `GET /activities` and decodes the
//! `{ data: { activities: [...] } }` envelope. There is no retry or
//! pagination; any failure is returned to the caller as-is.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{ActivitiesResponse, Activity};

/// Activities API client.
#[derive(Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ActivitiesClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3460/api`).
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Create a client from loaded configuration, applying the request timeout if set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.api_token.clone(),
        })
    }

    /// Fetch the activity list, in the order the service returns it.
    pub async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/activities", self.base_url);
        tracing::debug!(url = %url, "Fetching activities");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| AppError::Request(e.to_string()))?;

        let body: ActivitiesResponse = check_response_json(response).await?;
        if body.success == Some(false) {
            tracing::warn!(message = ?body.message, "Activities API reported success=false");
        }

        let activities = body.data.activities;
        tracing::info!(count = activities.len(), "Activities fetched");
        Ok(activities)
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "Activities API responded");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 401 {
            return Err(AppError::Unauthorized);
        }

        return Err(AppError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Request(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
}
