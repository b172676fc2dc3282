// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sequence-number lookup and report rendering.

use crate::models::Activity;
use std::io::{self, Write};

/// Result of scanning the activity list for a sequence number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Activity),
    /// No match; carries the full list for the fallback listing.
    NotFound(&'a [Activity]),
}

/// First activity (in list order) whose sequence number equals `target`.
pub fn find_by_sequence(activities: &[Activity], target: i64) -> Option<&Activity> {
    activities
        .iter()
        .find(|a| a.sequence_number == Some(target))
}

pub fn lookup(activities: &[Activity], target: i64) -> Lookup<'_> {
    match find_by_sequence(activities, target) {
        Some(activity) => Lookup::Found(activity),
        None => Lookup::NotFound(activities),
    }
}

fn count_or_na(count: Option<u32>) -> String {
    count.map_or_else(|| "N/A".to_string(), |n| n.to_string())
}

/// Write the human-readable report for a lookup.
pub fn write_report<W: Write>(out: &mut W, target: i64, result: &Lookup<'_>) -> io::Result<()> {
    writeln!(out, "Looking up activity with sequence number {}...", target)?;

    match result {
        Lookup::Found(activity) => {
            writeln!(out)?;
            writeln!(out, "Found activity {}:", target)?;
            writeln!(out, "ID: {}", activity.id)?;
            writeln!(out, "Title: {}", activity.title)?;
            writeln!(
                out,
                "Description: {}",
                activity.description.as_deref().unwrap_or("")
            )?;
            writeln!(
                out,
                "Current participants: {}",
                count_or_na(activity.current_participants)
            )?;
            writeln!(
                out,
                "Max participants: {}",
                count_or_na(activity.max_participants)
            )?;
            writeln!(out, "Status: {}", activity.status)?;
        }
        Lookup::NotFound(activities) => {
            writeln!(out)?;
            writeln!(out, "No activity with sequence number {}", target)?;
            writeln!(out)?;
            writeln!(out, "Sequence numbers of all activities:")?;
            for activity in activities.iter() {
                match activity.sequence_number {
                    Some(seq) => writeln!(out, "Sequence {}: {}", seq, activity.title)?,
                    None => writeln!(out, "Sequence N/A: {}", activity.title)?,
                }
            }
        }
    }

    Ok(())
}
