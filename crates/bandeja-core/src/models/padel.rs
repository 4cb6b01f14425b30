// ABOUTME: Padel session model with match status and unforced-errors enumerations
// ABOUTME: Wire-string parsing maps unknown status/level values to None, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a padel match session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Match was won
    Win,
    /// Match was lost
    Loss,
    /// Outcome not clearly decided
    Unclear,
    /// Match was aborted before a result
    Aborted,
}

impl MatchStatus {
    /// Wire-format string for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Unclear => "unclear",
            Self::Aborted => "aborted",
        }
    }

    /// Parse a wire-format string; anything unrecognized maps to `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "win" => Some(Self::Win),
            "loss" => Some(Self::Loss),
            "unclear" => Some(Self::Unclear),
            "aborted" => Some(Self::Aborted),
            _ => None,
        }
    }

    /// Whether this status counts toward the win/loss ratio
    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

/// Self-assessed unforced-errors level for a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnforcedErrorsLevel {
    /// Few unforced errors
    Low,
    /// Average amount of unforced errors
    Medium,
    /// Many unforced errors
    High,
}

impl UnforcedErrorsLevel {
    /// Wire-format string for this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a wire-format string; anything unrecognized maps to `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Padel-specific detail row, 1:1 with a padel-typed workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PadelSessionRecord {
    /// Unique session id
    pub id: Uuid,
    /// Parent workout id
    pub workout_id: Uuid,
    /// Session format label (e.g. "americano", "match")
    pub session_format: Option<String>,
    /// Partner name as entered
    pub partner: Option<String>,
    /// Opponent name(s) as entered
    pub opponents: Option<String>,
    /// Free-text set scores, e.g. "6-4, 4-6, 10-7"
    pub results: Option<String>,
    /// Match outcome; absent means "not specified"
    pub match_status: Option<MatchStatus>,
    /// Self-assessed unforced-errors level
    pub unforced_errors_level: Option<UnforcedErrorsLevel>,
    /// Coach summary derived once at creation time
    pub coach_summary: Option<String>,
    /// Coach tags derived once at creation time
    pub coach_tags: Vec<String>,
    /// User-entered free tags
    pub tags: Vec<String>,
    /// Estimated share of balls played, 0-1
    pub ball_share: Option<f64>,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}
