// ABOUTME: Heuristic critical-coach insight over a bounded window of recent padel sessions
// ABOUTME: Quality-ratio pattern templates plus a headline win rate with a literal text fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Critical-coach analysis over a recent session window
//!
//! One insight per request, recomputed every time: a headline win-rate
//! metric, a pattern classification from the feeling/intensity ratio,
//! two alternative interpretations, and a fixed challenge prompt. The
//! caller supplies sessions newest first; window semantics depend on
//! that order.

use bandeja_core::models::{MatchStatus, WorkoutWithPadel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_constants::coach_window::{
    HEADROOM_RATIO_THRESHOLD, MAX_SESSIONS_IN_WINDOW, MIN_SESSIONS_FOR_INSIGHT,
    NEUTRAL_QUALITY_RATIO, OVERLOAD_RATIO_THRESHOLD,
};
use crate::set_scores::estimate_win_fraction;

/// A single heuristic insight over a recent session window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachInsight {
    /// Number of sessions the insight covers (3-10)
    pub window_size: u32,
    /// Headline metric title
    pub kpi_title: String,
    /// Headline metric value, or "no match data"
    pub kpi_value: String,
    /// Pattern classification narrative
    pub pattern: String,
    /// Exactly two alternative interpretations of the same window
    pub alternatives: [String; 2],
    /// Fixed challenge prompt
    pub challenge: String,
}

/// Configuration for the critical-coach window and thresholds
#[derive(Debug, Clone)]
pub struct CriticalCoachConfig {
    /// Fewer sessions than this produce no insight
    pub min_sessions: usize,
    /// The window never looks past this many sessions
    pub max_window: usize,
    /// Quality ratio below this selects the overload narrative
    pub overload_ratio_threshold: f64,
    /// Quality ratio above this selects the headroom narrative
    pub headroom_ratio_threshold: f64,
}

impl Default for CriticalCoachConfig {
    fn default() -> Self {
        Self {
            min_sessions: MIN_SESSIONS_FOR_INSIGHT,
            max_window: MAX_SESSIONS_IN_WINDOW,
            overload_ratio_threshold: OVERLOAD_RATIO_THRESHOLD,
            headroom_ratio_threshold: HEADROOM_RATIO_THRESHOLD,
        }
    }
}

/// How the headline win rate was obtained, if at all
#[derive(Debug, Clone, Copy, PartialEq)]
enum HeadlineWinRate {
    /// Derived from logged match statuses
    Decided { wins: u32, losses: u32 },
    /// Estimated from results text, fraction in [0, 1]
    Estimated(f64),
    /// No signal in the window
    Missing,
}

impl HeadlineWinRate {
    /// Win fraction in [0, 1], when any signal exists
    fn fraction(self) -> Option<f64> {
        match self {
            Self::Decided { wins, losses } => {
                Some(f64::from(wins) / f64::from(wins + losses))
            }
            Self::Estimated(fraction) => Some(fraction),
            Self::Missing => None,
        }
    }
}

/// Critical-coach analyzer
pub struct CriticalCoachAnalyzer {
    config: CriticalCoachConfig,
}

impl Default for CriticalCoachAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CriticalCoachAnalyzer {
    /// Create an analyzer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CriticalCoachConfig::default(),
        }
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub const fn with_config(config: CriticalCoachConfig) -> Self {
        Self { config }
    }

    /// Analyze the most recent padel sessions
    ///
    /// `sessions` must be sorted newest first. Returns `None` below the
    /// minimum window; this is the "insufficient data" signal, not an
    /// error.
    #[must_use]
    pub fn analyze(&self, sessions: &[WorkoutWithPadel]) -> Option<CoachInsight> {
        if sessions.len() < self.config.min_sessions {
            debug!(
                sessions = sessions.len(),
                minimum = self.config.min_sessions,
                "too few sessions for a coach insight"
            );
            return None;
        }

        let scoped = &sessions[..sessions.len().min(self.config.max_window)];
        let window_size = scoped.len();
        let window = window_size as f64;

        let avg_intensity =
            scoped.iter().map(WorkoutWithPadel::intensity_or_zero).sum::<f64>() / window;
        let avg_feeling =
            scoped.iter().map(WorkoutWithPadel::feeling_or_zero).sum::<f64>() / window;
        let avg_duration =
            scoped.iter().map(WorkoutWithPadel::duration_min_f64).sum::<f64>() / window;

        let quality_ratio = if avg_intensity == 0.0 {
            NEUTRAL_QUALITY_RATIO
        } else {
            avg_feeling / avg_intensity
        };

        let headline = Self::headline_win_rate(scoped);

        debug!(
            window_size,
            quality_ratio, avg_duration, "computed critical-coach window"
        );

        Some(CoachInsight {
            window_size: u32::try_from(window_size).unwrap_or(u32::MAX),
            kpi_title: format!("Win rate (last {window_size} sessions)"),
            kpi_value: Self::format_kpi_value(headline),
            pattern: self.classify_pattern(quality_ratio),
            alternatives: [
                Self::duration_alternative(avg_duration),
                Self::win_rate_alternative(headline),
            ],
            challenge: CHALLENGE_PROMPT.to_owned(),
        })
    }

    /// Prefer logged match statuses; fall back to the results-text
    /// heuristic only when no session in the window carries a status.
    fn headline_win_rate(scoped: &[WorkoutWithPadel]) -> HeadlineWinRate {
        let statuses: Vec<MatchStatus> = scoped
            .iter()
            .filter_map(|session| {
                session.padel_session.as_ref().and_then(|p| p.match_status)
            })
            .collect();

        if statuses.is_empty() {
            let results: Vec<Option<&str>> = scoped
                .iter()
                .map(|session| {
                    session
                        .padel_session
                        .as_ref()
                        .and_then(|p| p.results.as_deref())
                })
                .collect();
            return estimate_win_fraction(&results)
                .map_or(HeadlineWinRate::Missing, HeadlineWinRate::Estimated);
        }

        let wins = u32::try_from(
            statuses.iter().filter(|s| **s == MatchStatus::Win).count(),
        )
        .unwrap_or(u32::MAX);
        let losses = u32::try_from(
            statuses.iter().filter(|s| **s == MatchStatus::Loss).count(),
        )
        .unwrap_or(u32::MAX);

        if wins + losses == 0 {
            return HeadlineWinRate::Missing;
        }
        HeadlineWinRate::Decided { wins, losses }
    }

    fn format_kpi_value(headline: HeadlineWinRate) -> String {
        match headline {
            HeadlineWinRate::Decided { wins, losses } => {
                let rate = 100.0 * f64::from(wins) / f64::from(wins + losses);
                format!("{rate:.1}% ({wins}-{losses})")
            }
            HeadlineWinRate::Estimated(fraction) => {
                format!("~{:.0}% (estimated from logged results)", fraction * 100.0)
            }
            HeadlineWinRate::Missing => "no match data".to_owned(),
        }
    }

    fn classify_pattern(&self, quality_ratio: f64) -> String {
        if quality_ratio < self.config.overload_ratio_threshold {
            PATTERN_OVERLOAD.to_owned()
        } else if quality_ratio > self.config.headroom_ratio_threshold {
            PATTERN_HEADROOM.to_owned()
        } else {
            PATTERN_NEUTRAL.to_owned()
        }
    }

    fn duration_alternative(avg_duration: f64) -> String {
        format!(
            "Alternative interpretation A: an average session length of {avg_duration:.0} min \
             may be the main driver. Long sessions erode precision even when the intensity \
             scale looks reasonable."
        )
    }

    fn win_rate_alternative(headline: HeadlineWinRate) -> String {
        headline.fraction().map_or_else(
            || {
                "Alternative interpretation B: you log too few results to judge match \
                 outcomes. The trend could be better or worse than the feeling suggests."
                    .to_owned()
            },
            |fraction| {
                let percent = (fraction * 100.0).round();
                format!(
                    "Alternative interpretation B: the win rate ({percent:.0}%) can mask \
                     development. Good results can come from the level of opposition, not \
                     necessarily from better play quality."
                )
            },
        )
    }
}

/// Narrative when load runs ahead of feeling
const PATTERN_OVERLOAD: &str = "You push high load but the feeling does not keep up. The \
    pattern points to intensity often being too high relative to daily form.";

/// Narrative when feeling runs ahead of load
const PATTERN_HEADROOM: &str = "Feeling is stronger than the load. You can likely raise \
    quality in key sessions without losing control.";

/// Narrative when neither dominates
const PATTERN_NEUTRAL: &str = "You train fairly evenly, but feeling does not always follow \
    intensity. That suggests preparation and recovery govern the outcome more than total \
    volume.";

/// Fixed reflection prompt appended to every insight
const CHALLENGE_PROMPT: &str = "Critical question: if you were forced to change one thing \
    next week, is it really technique you lack, or should you first optimize the load \
    level per session?";
