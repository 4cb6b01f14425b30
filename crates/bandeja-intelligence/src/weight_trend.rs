// ABOUTME: Body-weight trend summary over logged weigh-ins
// ABOUTME: Needs at least two entries; reports first/latest, min/max, and net change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Weight trend summary over body-weight entries

use bandeja_core::models::WeightEntryRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis_constants::weight_windows::MIN_ENTRIES_FOR_TREND;
use crate::util::round_one;

/// Trend summary over a user's weigh-ins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightTrendSummary {
    /// Number of entries the trend covers
    pub entries: u32,
    /// Weight at the earliest entry
    pub first_kg: f64,
    /// Weight at the latest entry
    pub latest_kg: f64,
    /// Lowest logged weight
    pub min_kg: f64,
    /// Highest logged weight
    pub max_kg: f64,
    /// Net change, latest minus first, one decimal
    pub change_kg: f64,
    /// Date of the earliest entry
    pub first_date: NaiveDate,
    /// Date of the latest entry
    pub last_date: NaiveDate,
}

/// Summarize the weight trend over a user's entries
///
/// Entries may arrive in any order. Returns `None` with fewer than two
/// entries, since a single weigh-in carries no trend.
#[must_use]
pub fn summarize_weight_trend(entries: &[WeightEntryRecord]) -> Option<WeightTrendSummary> {
    if entries.len() < MIN_ENTRIES_FOR_TREND {
        return None;
    }

    let mut ordered: Vec<&WeightEntryRecord> = entries.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));

    let first = ordered.first()?;
    let last = ordered.last()?;
    let min_kg = ordered
        .iter()
        .map(|entry| entry.weight_kg)
        .fold(f64::INFINITY, f64::min);
    let max_kg = ordered
        .iter()
        .map(|entry| entry.weight_kg)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(WeightTrendSummary {
        entries: u32::try_from(ordered.len()).unwrap_or(u32::MAX),
        first_kg: round_one(first.weight_kg),
        latest_kg: round_one(last.weight_kg),
        min_kg: round_one(min_kg),
        max_kg: round_one(max_kg),
        change_kg: round_one(last.weight_kg - first.weight_kg),
        first_date: first.date,
        last_date: last.date,
    })
}
