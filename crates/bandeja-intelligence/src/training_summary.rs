// ABOUTME: Workout totals and per week/month/year frequency averages over full history
// ABOUTME: Inclusive calendar spans with a floor of one unit so averages never divide by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Training volume summary over a user's full workout history

use bandeja_core::models::{MatchStatus, WorkoutType, WorkoutWithPadel};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::util::round_one;

/// Average workouts per calendar unit, one decimal each
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingAverages {
    /// Workouts per week over the logged span
    pub per_week: f64,
    /// Workouts per month over the logged span
    pub per_month: f64,
    /// Workouts per year over the logged span
    pub per_year: f64,
}

/// Lifetime counters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingTotals {
    /// All workouts regardless of type
    pub workouts: u32,
    /// Padel sessions with status `win`
    pub wins: u32,
    /// Padel sessions with status `loss`
    pub losses: u32,
}

/// First and last logged calendar days
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPeriod {
    /// Earliest workout date, `None` with an empty history
    pub first_date: Option<NaiveDate>,
    /// Latest workout date, `None` with an empty history
    pub last_date: Option<NaiveDate>,
}

/// Full training volume report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingVolumeSummary {
    /// Frequency averages over the logged span
    pub averages: TrainingAverages,
    /// Lifetime counters
    pub totals: TrainingTotals,
    /// Span boundaries
    pub period: TrainingPeriod,
}

/// Training volume calculator
pub struct TrainingSummaryCalculator;

impl TrainingSummaryCalculator {
    /// Summarize a user's full workout history
    ///
    /// An empty history yields zero counts, `None` dates, and zero
    /// averages; spans are floored at one unit so the division is always
    /// defined.
    #[must_use]
    pub fn summarize(workouts: &[WorkoutWithPadel]) -> TrainingVolumeSummary {
        let total_workouts = u32::try_from(workouts.len()).unwrap_or(u32::MAX);
        let first_date = workouts.iter().map(|w| w.workout.date).min();
        let last_date = workouts.iter().map(|w| w.workout.date).max();

        let (wins, losses) = Self::match_totals(workouts);

        let (week_span, month_span, year_span) = match (first_date, last_date) {
            (Some(first), Some(last)) => (
                Self::week_span(first, last),
                Self::months_between_inclusive(first, last).max(1),
                Self::years_between_inclusive(first, last).max(1),
            ),
            _ => (1, 1, 1),
        };

        debug!(
            workouts = total_workouts,
            week_span, month_span, year_span, "computed training volume summary"
        );

        let total = f64::from(total_workouts);
        TrainingVolumeSummary {
            averages: TrainingAverages {
                per_week: round_one(total / week_span as f64),
                per_month: round_one(total / month_span as f64),
                per_year: round_one(total / year_span as f64),
            },
            totals: TrainingTotals {
                workouts: total_workouts,
                wins,
                losses,
            },
            period: TrainingPeriod {
                first_date,
                last_date,
            },
        }
    }

    fn match_totals(workouts: &[WorkoutWithPadel]) -> (u32, u32) {
        let mut wins = 0;
        let mut losses = 0;
        for session in workouts {
            if session.workout.workout_type != WorkoutType::Padel {
                continue;
            }
            match session.padel_session.as_ref().and_then(|p| p.match_status) {
                Some(MatchStatus::Win) => wins += 1,
                Some(MatchStatus::Loss) => losses += 1,
                _ => {}
            }
        }
        (wins, losses)
    }

    /// Inclusive day span in whole weeks, rounded up, floored at one
    fn week_span(first: NaiveDate, last: NaiveDate) -> i64 {
        let days = (last - first).num_days() + 1;
        (days + 6).div_euclid(7).max(1)
    }

    /// Calendar months touched by the span, inclusive of both ends
    fn months_between_inclusive(first: NaiveDate, last: NaiveDate) -> i64 {
        let years = i64::from(last.year()) - i64::from(first.year());
        let months = i64::from(last.month()) - i64::from(first.month());
        years * 12 + months + 1
    }

    /// Calendar years touched by the span, inclusive of both ends
    fn years_between_inclusive(first: NaiveDate, last: NaiveDate) -> i64 {
        i64::from(last.year()) - i64::from(first.year()) + 1
    }
}
