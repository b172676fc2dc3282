// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity lookup: find an activity by sequence number
//!
//! Fetches the activity list from the activities API with a bearer token and
//! reports the first activity matching the configured sequence number, or a
//! listing of every sequence number when none matches.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use error::Result;
use services::{lookup, write_report, ActivitiesClient, Lookup};
use std::io::Write;

/// Fetch, scan and report.
///
/// The report is only written once the response has been fetched and decoded,
/// so a failed request leaves `out` untouched.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let client = ActivitiesClient::from_config(config)?;
    let activities = client.list_activities().await?;

    let result = lookup(&activities, config.target_sequence);
    match &result {
        Lookup::Found(activity) => {
            tracing::info!(sequence = config.target_sequence, id = %activity.id, "Activity found")
        }
        Lookup::NotFound(list) => tracing::info!(
            sequence = config.target_sequence,
            count = list.len(),
            "No activity with requested sequence number"
        ),
    }

    write_report(out, config.target_sequence, &result)?;
    out.flush()?;
    Ok(())
}
