// ABOUTME: Write-time coach summary and tag derivation for a newly created padel session
// ABOUTME: Six fixed rules in order; first two qualifying sentences kept, tags deduplicated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Session coach-summary generation
//!
//! Runs once, synchronously, when a padel session is created; the caller
//! persists the output into the session's `coach_summary`/`coach_tags`
//! columns. Only the single session's inputs matter, never history. The
//! rules are evaluated in a fixed order and each contributes tags and at
//! most one sentence.

use bandeja_core::models::MatchStatus;
use serde::{Deserialize, Serialize};

use crate::analysis_constants::session_rules::{
    LOW_FOCUS_FEELING_CEILING, LOW_FOCUS_INTENSITY_CEILING, MAX_SUMMARY_SENTENCES,
    STABLE_FEELING_FLOOR, STABLE_INTENSITY_FLOOR,
};
use crate::set_scores::has_momentum_drop;

/// User tag that triggers the tennis-tempo note after normalization
const TENNIS_TEMPO_TAG: &str = "tennistempo";

/// Inputs the generator reads from a newly created session
#[derive(Debug, Clone, Default)]
pub struct CoachSummaryInput<'a> {
    /// Perceived intensity, 1-5; absent coerces to 0
    pub intensity_1_5: Option<f64>,
    /// Subjective feeling, 1-5; absent coerces to 0
    pub feeling_1_5: Option<f64>,
    /// Raw results text
    pub results: Option<&'a str>,
    /// Match outcome, if specified
    pub match_status: Option<MatchStatus>,
    /// User-entered free tags
    pub tags: &'a [String],
}

/// Derived coach output, persisted once by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoachSummary {
    /// At most two sentences joined by a space
    pub summary: String,
    /// Deduplicated coach tags
    pub tags: Vec<String>,
}

/// Derive the coach summary and tags for one padel session
///
/// Pure function over already-validated inputs; never fails. Absent
/// numeric inputs coerce to 0 before the threshold comparisons.
#[must_use]
pub fn generate_coach_summary(input: &CoachSummaryInput<'_>) -> CoachSummary {
    let intensity = finite_or_zero(input.intensity_1_5);
    let feeling = finite_or_zero(input.feeling_1_5);
    let normalized_tags: Vec<String> = input
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .collect();

    let mut tags: Vec<String> = Vec::new();
    let mut sentences: Vec<&str> = Vec::new();

    if has_momentum_drop(input.results) {
        push_tags(&mut tags, &["momentum_drop", "adjustment_issue"]);
        sentences.push(
            "You opened strong but lost the shape of the match after the first set. \
             Train a clear plan B for when the opposition adjusts.",
        );
    }

    if intensity > 0.0
        && intensity < LOW_FOCUS_INTENSITY_CEILING
        && feeling > 0.0
        && feeling < LOW_FOCUS_FEELING_CEILING
    {
        push_tags(&mut tags, &["low_focus", "low_energy"]);
        sentences.push(
            "Low intensity and low feeling today. Set one simple process rule next \
             session to stabilize focus.",
        );
    }

    if intensity >= STABLE_INTENSITY_FLOOR && feeling >= STABLE_FEELING_FLOOR {
        push_tags(&mut tags, &["stable_performance"]);
        sentences.push(
            "High intensity with high feeling. You held a stable performance through \
             the session.",
        );
    }

    match input.match_status {
        Some(MatchStatus::Loss) => {
            push_tags(&mut tags, &["loss_review"]);
            sentences.push(
                "A loss today. Pick one concrete detail to improve for the next session \
                 instead of changing everything.",
            );
        }
        Some(MatchStatus::Win) => {
            push_tags(&mut tags, &["win_confirmed"]);
            sentences.push(
                "A win today. Keep the same base structure and fine-tune one thing at a \
                 time.",
            );
        }
        _ => {}
    }

    if normalized_tags.iter().any(|tag| tag == TENNIS_TEMPO_TAG) {
        push_tags(&mut tags, &["tennis_tempo", "b_plan_required"]);
        sentences.push(
            "Tennis tempo noted. Prioritize height, depth, and patience to control the \
             rhythm better.",
        );
    }

    if sentences.is_empty() {
        push_tags(&mut tags, &["baseline_review"]);
        sentences.push(
            "Session logged without clear deviations. Focus on even quality in the \
             first 20 minutes next time.",
        );
    }

    CoachSummary {
        summary: sentences[..sentences.len().min(MAX_SUMMARY_SENTENCES)].join(" "),
        tags,
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.map_or(0.0, |v| if v.is_finite() { v } else { 0.0 })
}

fn push_tags(tags: &mut Vec<String>, new_tags: &[&str]) {
    for tag in new_tags {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push((*tag).to_owned());
        }
    }
}
