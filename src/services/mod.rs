// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API client and lookup logic.

pub mod activities;
pub mod lookup;

pub use activities::ActivitiesClient;
pub use lookup::{find_by_sequence, lookup, write_report, Lookup};
