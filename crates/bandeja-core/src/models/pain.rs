// ABOUTME: Pain log model with fixed body-area enumeration and batch normalization
// ABOUTME: Normalization drops out-of-range intensities, defaults the area, and caps the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::constants::pain::{MAX_INTENSITY, MAX_LOGS_PER_ACTION};

/// Fixed set of body areas a pain log can point at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PainArea {
    /// Shoulder pain
    Shoulder,
    /// Elbow pain
    Elbow,
    /// Wrist pain
    Wrist,
    /// Lower back pain
    LowerBack,
    /// Hip pain
    Hip,
    /// Knee pain
    Knee,
    /// Ankle pain
    Ankle,
    /// Anything outside the fixed set
    Other,
}

impl PainArea {
    /// Wire-format string for this area
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::LowerBack => "lower_back",
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
            Self::Other => "other",
        }
    }

    /// Parse a wire-format string, falling back to `Other` for anything
    /// unrecognized
    #[must_use]
    pub fn parse_or_other(value: &str) -> Self {
        match value {
            "shoulder" => Self::Shoulder,
            "elbow" => Self::Elbow,
            "wrist" => Self::Wrist,
            "lower_back" => Self::LowerBack,
            "hip" => Self::Hip,
            "knee" => Self::Knee,
            "ankle" => Self::Ankle,
            _ => Self::Other,
        }
    }
}

/// A persisted pain log row, belonging to a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainLogRecord {
    /// Unique pain log id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Workout this pain was logged against
    pub workout_id: Uuid,
    /// Affected body area
    pub pain_area: PainArea,
    /// Pain intensity on the 0-10 integer scale
    pub pain_intensity_0_10: u8,
    /// Optional pain characterization (e.g. "sharp", "dull")
    pub pain_type: Option<String>,
    /// Free-text note
    pub pain_note: Option<String>,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

/// An unvalidated pain log as submitted with a create/edit action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainLogDraft {
    /// Submitted area string; anything unrecognized maps to `Other`
    pub pain_area: Option<String>,
    /// Submitted intensity; entries outside 0-10 are dropped
    pub pain_intensity_0_10: i64,
    /// Optional pain characterization
    pub pain_type: Option<String>,
    /// Free-text note
    pub pain_note: Option<String>,
}

/// Normalized pain log ready to be persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedPainLog {
    /// Affected body area
    pub pain_area: PainArea,
    /// Pain intensity on the 0-10 integer scale
    pub pain_intensity_0_10: u8,
    /// Optional pain characterization
    pub pain_type: Option<String>,
    /// Free-text note
    pub pain_note: Option<String>,
}

/// Normalize a submitted pain log batch
///
/// Entries with an intensity outside the 0-10 scale are dropped, a missing
/// or unrecognized area falls back to `PainArea::Other`, and the batch is
/// capped at [`MAX_LOGS_PER_ACTION`] entries.
#[must_use]
pub fn normalize_pain_logs(drafts: &[PainLogDraft]) -> Vec<NormalizedPainLog> {
    let normalized: Vec<NormalizedPainLog> = drafts
        .iter()
        .filter(|draft| {
            (0..=i64::from(MAX_INTENSITY)).contains(&draft.pain_intensity_0_10)
        })
        .take(MAX_LOGS_PER_ACTION)
        .map(|draft| NormalizedPainLog {
            pain_area: draft
                .pain_area
                .as_deref()
                .map_or(PainArea::Other, PainArea::parse_or_other),
            pain_intensity_0_10: draft.pain_intensity_0_10 as u8,
            pain_type: draft.pain_type.clone(),
            pain_note: draft.pain_note.clone(),
        })
        .collect();

    if normalized.len() < drafts.len() {
        warn!(
            submitted = drafts.len(),
            kept = normalized.len(),
            "dropped pain log entries during normalization"
        );
    }

    normalized
}
