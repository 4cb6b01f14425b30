// ABOUTME: Integration tests for the training volume summary
// ABOUTME: Covers empty history, inclusive span arithmetic, rounding, and match totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bandeja_core::models::{MatchStatus, WorkoutType, WorkoutWithPadel};
use bandeja_intelligence::training_summary::TrainingSummaryCalculator;

mod common;
use common::{day, padel_match, workout};

fn plain(date: &str, workout_type: WorkoutType) -> WorkoutWithPadel {
    WorkoutWithPadel {
        workout: workout(date, workout_type, 60),
        padel_session: None,
    }
}

#[test]
fn empty_history_yields_zeroes_and_absent_dates() {
    common::init_test_logging();
    let summary = TrainingSummaryCalculator::summarize(&[]);

    assert_eq!(summary.totals.workouts, 0);
    assert_eq!(summary.totals.wins, 0);
    assert_eq!(summary.totals.losses, 0);
    assert_eq!(summary.period.first_date, None);
    assert_eq!(summary.period.last_date, None);
    assert!((summary.averages.per_week - 0.0).abs() < f64::EPSILON);
    assert!((summary.averages.per_year - 0.0).abs() < f64::EPSILON);
}

#[test]
fn two_week_span_divides_counts_evenly() {
    // 2026-01-05 .. 2026-01-18 is 14 inclusive days = 2 weeks, 1 month, 1 year
    let history = vec![
        plain("2026-01-05", WorkoutType::Running),
        plain("2026-01-09", WorkoutType::Strength),
        plain("2026-01-13", WorkoutType::Running),
        plain("2026-01-18", WorkoutType::Other),
    ];

    let summary = TrainingSummaryCalculator::summarize(&history);

    assert_eq!(summary.totals.workouts, 4);
    assert_eq!(summary.period.first_date, Some(day("2026-01-05")));
    assert_eq!(summary.period.last_date, Some(day("2026-01-18")));
    assert!((summary.averages.per_week - 2.0).abs() < f64::EPSILON);
    assert!((summary.averages.per_month - 4.0).abs() < f64::EPSILON);
    assert!((summary.averages.per_year - 4.0).abs() < f64::EPSILON);
}

#[test]
fn partial_week_rounds_up_the_span() {
    // 13 inclusive days ceil to 2 weeks; 7 workouts / 2 weeks = 3.5
    let history: Vec<WorkoutWithPadel> = (1..=7)
        .map(|i| plain(&format!("2026-01-{:02}", 1 + 2 * (i - 1)), WorkoutType::Running))
        .collect();

    let summary = TrainingSummaryCalculator::summarize(&history);

    assert_eq!(summary.period.first_date, Some(day("2026-01-01")));
    assert_eq!(summary.period.last_date, Some(day("2026-01-13")));
    assert!((summary.averages.per_week - 3.5).abs() < f64::EPSILON, "13 days is 2 weeks");
}

#[test]
fn month_span_counts_touched_calendar_months() {
    // Late January to early March touches 3 calendar months
    let history = vec![
        plain("2026-01-28", WorkoutType::Running),
        plain("2026-03-02", WorkoutType::Running),
    ];

    let summary = TrainingSummaryCalculator::summarize(&history);

    assert!((summary.averages.per_month - 0.7).abs() < f64::EPSILON, "2 / 3 months = 0.7");
}

#[test]
fn year_span_counts_touched_calendar_years() {
    let history = vec![
        plain("2025-12-30", WorkoutType::Running),
        plain("2026-01-02", WorkoutType::Running),
    ];

    let summary = TrainingSummaryCalculator::summarize(&history);

    assert!((summary.averages.per_year - 1.0).abs() < f64::EPSILON, "2 / 2 years = 1.0");
}

#[test]
fn match_totals_count_only_padel_statuses() {
    let history = vec![
        padel_match("2026-05-01", Some(MatchStatus::Win)),
        padel_match("2026-05-03", Some(MatchStatus::Loss)),
        padel_match("2026-05-05", Some(MatchStatus::Unclear)),
        padel_match("2026-05-07", None),
        plain("2026-05-09", WorkoutType::Running),
    ];

    let summary = TrainingSummaryCalculator::summarize(&history);

    assert_eq!(summary.totals.workouts, 5);
    assert_eq!(summary.totals.wins, 1);
    assert_eq!(summary.totals.losses, 1);
}
