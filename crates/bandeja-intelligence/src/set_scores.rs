// ABOUTME: Literal set-score parsing and text-based win estimation over free-text results
// ABOUTME: Behavior-preserving pattern rules; fragile by design and kept exactly as shipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Set-score extraction from the free-text results field
//!
//! Results are free text ("6-4, 4-6, 10-7", "vinst 2-0", ...). The rules
//! here are literal pattern matches, not intent inference: downstream
//! coach behavior depends on reproducing them exactly, including the
//! token list of the win estimator.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

use crate::analysis_constants::momentum::{
    DOMINANT_FIRST_SET_OPP, DOMINANT_FIRST_SET_OWN, MIN_SETS, MIN_TRAILING_LOSSES,
};

/// Digit pair separated by a dash or colon, e.g. "6-4" or "10:7".
/// Stored as Option to handle compilation failures gracefully (should
/// never fail for a static pattern).
static SET_SCORE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[-:]\s*(\d+)").ok());

/// Substrings that count a lowercased results string as a win
const WIN_TOKENS: [&str; 5] = ["w", "vinst", "win", "2-0", "2-1"];

/// One parsed set from the results field, own games first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetScore {
    /// Games won by the logging player's side
    pub own: u32,
    /// Games won by the opposing side
    pub opp: u32,
}

impl SetScore {
    /// Whether this set was lost
    #[must_use]
    pub const fn is_loss(self) -> bool {
        self.own < self.opp
    }
}

/// Extract own/opp set pairs from a free-text results string
///
/// Pairs the parser cannot represent (digits beyond `u32`) are skipped.
#[must_use]
pub fn parse_set_scores(raw: Option<&str>) -> Vec<SetScore> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Some(pattern) = SET_SCORE_PATTERN.as_ref() else {
        warn!("set score pattern failed to compile, parsing disabled");
        return Vec::new();
    };

    pattern
        .captures_iter(raw)
        .filter_map(|captures| {
            let own = captures.get(1)?.as_str().parse().ok()?;
            let opp = captures.get(2)?.as_str().parse().ok()?;
            Some(SetScore { own, opp })
        })
        .collect()
}

/// Whether the results string shows a dominant first set followed by a
/// collapse
///
/// Requires at least [`MIN_SETS`] parsed sets, a first set with own games
/// at or above [`DOMINANT_FIRST_SET_OWN`] and opponent games at or below
/// [`DOMINANT_FIRST_SET_OPP`], and at least [`MIN_TRAILING_LOSSES`] of the
/// remaining sets lost.
#[must_use]
pub fn has_momentum_drop(raw: Option<&str>) -> bool {
    let sets = parse_set_scores(raw);
    if sets.len() < MIN_SETS {
        return false;
    }

    let first = sets[0];
    let first_dominant =
        first.own >= DOMINANT_FIRST_SET_OWN && first.opp <= DOMINANT_FIRST_SET_OPP;
    let trailing_losses = sets[1..].iter().filter(|set| set.is_loss()).count();

    first_dominant && trailing_losses >= MIN_TRAILING_LOSSES
}

/// Estimate a win fraction from raw results strings alone
///
/// Blank and absent strings are ignored; the rest are lowercased and
/// counted as wins when they contain any of the literal [`WIN_TOKENS`].
/// Returns `None` when no non-blank results exist.
#[must_use]
pub fn estimate_win_fraction(results: &[Option<&str>]) -> Option<f64> {
    let normalized: Vec<String> = results
        .iter()
        .filter_map(|result| {
            result
                .filter(|text| !text.trim().is_empty())
                .map(str::to_lowercase)
        })
        .collect();

    if normalized.is_empty() {
        return None;
    }

    let wins = normalized
        .iter()
        .filter(|result| WIN_TOKENS.iter().any(|token| result.contains(token)))
        .count();

    Some(wins as f64 / normalized.len() as f64)
}
