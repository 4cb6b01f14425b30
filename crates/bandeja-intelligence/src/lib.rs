// ABOUTME: Training statistics and coaching-insight engine for the Bandeja platform
// ABOUTME: Aggregation, critical-coach analysis, and write-time session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

#![deny(unsafe_code)]

//! # Bandeja Intelligence
//!
//! Analysis engine for the Bandeja training log. Every entry point here is
//! a pure, synchronous computation over already-fetched rows: callers pass
//! slices of records plus an explicit reference date and get plain data
//! structures back. Nothing in this crate performs I/O, reads the clock,
//! or holds state between invocations.
//!
//! ## Modules
//!
//! - **win_rate**: period-scoped win/loss totals with partner and opponent breakdowns
//! - **training_summary**: workout totals and per week/month/year frequency averages
//! - **pain_stats**: ISO-week pain buckets and all-time top pain areas
//! - **weight_trend**: first/latest/min/max summary over body-weight entries
//! - **critical_coach**: single heuristic insight over a recent session window
//! - **coach_engine**: write-time session summary and tag derivation
//! - **set_scores**: literal set-score parsing shared by the coach modules

/// Analysis thresholds and window sizes organized by concern
pub mod analysis_constants;

/// Write-time session coach summary and tag derivation
pub mod coach_engine;

/// Heuristic critical-coach insight over a recent session window
pub mod critical_coach;

/// ISO-week pain buckets and top pain areas
pub mod pain_stats;

/// Literal set-score parsing and text-based win estimation
pub mod set_scores;

/// Workout totals and frequency averages
pub mod training_summary;

/// Body-weight trend summary
pub mod weight_trend;

/// Win/loss statistics with partner and opponent breakdowns
pub mod win_rate;

mod util;

pub use coach_engine::{generate_coach_summary, CoachSummary, CoachSummaryInput};
pub use critical_coach::{CoachInsight, CriticalCoachAnalyzer, CriticalCoachConfig};
pub use pain_stats::{PainAreaCount, PainOverview, PainStatsCalculator, PainWeekBucket};
pub use set_scores::SetScore;
pub use training_summary::{
    TrainingAverages, TrainingPeriod, TrainingSummaryCalculator, TrainingTotals,
    TrainingVolumeSummary,
};
pub use weight_trend::{summarize_weight_trend, WeightTrendSummary};
pub use win_rate::{
    MatchTotals, OpponentWinRate, PartnerWinRate, RecentMatch, StatsPeriod, WinRateAnalyzer,
    WinRateConfig, WinRateSummary,
};
