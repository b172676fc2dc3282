// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity records as returned by the activities API.

use serde::Deserialize;

/// One activity from `GET /api/activities`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    /// Opaque identifier (UUID in the source system)
    pub id: String,
    /// Human-facing lookup key; older records may not have one
    #[serde(default)]
    pub sequence_number: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_participants: Option<u32>,
    /// `None` when the activity has no capacity limit
    #[serde(default)]
    pub max_participants: Option<u32>,
    /// Service-defined status (e.g. "published", "draft")
    pub status: String,
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct ActivitiesResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: ActivitiesData,
}

#[derive(Debug, Deserialize)]
pub struct ActivitiesData {
    pub activities: Vec<Activity>,
}
