// ABOUTME: Integration tests for pain statistics: ISO-week buckets and top areas
// ABOUTME: Covers week labels, mean intensity, the 90-day window, and ranking caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bandeja_core::models::{PainArea, PainLogRecord, WorkoutRecord, WorkoutType};
use bandeja_intelligence::pain_stats::PainStatsCalculator;
use chrono::{Datelike, Duration};

mod common;
use common::{day, pain_log, workout};

#[test]
fn one_week_with_three_logs_averages_their_intensity() {
    common::init_test_logging();
    // 2026-01-01 is a Thursday in ISO week 2026-W01
    let w = workout("2026-01-01", WorkoutType::Padel, 90);
    let logs = vec![
        pain_log(w.id, PainArea::Shoulder, 4),
        pain_log(w.id, PainArea::Shoulder, 6),
        pain_log(w.id, PainArea::Knee, 8),
    ];

    let overview = PainStatsCalculator::analyze(&[w], &logs, day("2026-01-20"));

    assert_eq!(overview.weekly.len(), 1);
    assert_eq!(overview.weekly[0].iso_week, "2026-W01");
    assert_eq!(overview.weekly[0].pain_logs, 3);
    assert!((overview.weekly[0].avg_intensity - 6.0).abs() < f64::EPSILON);
}

#[test]
fn workout_weeks_without_pain_still_get_a_bucket() {
    let sore = workout("2026-03-02", WorkoutType::Running, 40);
    let painless = workout("2026-03-10", WorkoutType::Running, 40);
    let logs = vec![pain_log(sore.id, PainArea::Knee, 5)];

    let overview = PainStatsCalculator::analyze(&[sore, painless], &logs, day("2026-03-15"));

    assert_eq!(overview.weekly.len(), 2);
    let empty_week = overview
        .weekly
        .iter()
        .find(|bucket| bucket.pain_logs == 0)
        .expect("painless week should still be bucketed");
    assert!((empty_week.avg_intensity - 0.0).abs() < f64::EPSILON);
}

#[test]
fn weekly_buckets_exclude_workouts_older_than_ninety_days() {
    let recent = workout("2026-07-01", WorkoutType::Padel, 60);
    let ancient = workout("2026-01-05", WorkoutType::Padel, 60);
    let logs = vec![
        pain_log(recent.id, PainArea::Elbow, 3),
        pain_log(ancient.id, PainArea::Elbow, 9),
    ];

    let overview = PainStatsCalculator::analyze(&[recent, ancient], &logs, day("2026-08-01"));

    assert_eq!(overview.weekly.len(), 1, "January workout is outside the window");
    assert_eq!(overview.weekly[0].pain_logs, 1);
    // ...but the all-time area ranking still sees both logs
    assert_eq!(overview.top_areas.len(), 1);
    assert_eq!(overview.top_areas[0].count, 2);
}

#[test]
fn weekly_buckets_cap_at_twelve_newest_first() {
    let today = day("2026-08-05");
    let workouts: Vec<WorkoutRecord> = (0..13)
        .map(|weeks_back| {
            let date = today - Duration::days(7 * weeks_back);
            workout(&date.format("%Y-%m-%d").to_string(), WorkoutType::Running, 30)
        })
        .collect();

    let overview = PainStatsCalculator::analyze(&workouts, &[], today);

    assert_eq!(overview.weekly.len(), 12, "thirteen workout weeks truncate to twelve");
    let this_week = today.iso_week();
    assert_eq!(
        overview.weekly[0].iso_week,
        format!("{:04}-W{:02}", this_week.year(), this_week.week()),
        "newest bucket first"
    );
}

#[test]
fn top_areas_rank_by_frequency_and_cap_at_five() {
    let w = workout("2026-07-20", WorkoutType::Strength, 45);
    let mut logs: Vec<PainLogRecord> = Vec::new();
    for (area, count) in [
        (PainArea::Shoulder, 4_u32),
        (PainArea::Knee, 3),
        (PainArea::Elbow, 2),
        (PainArea::Wrist, 2),
        (PainArea::Hip, 1),
        (PainArea::Ankle, 1),
    ] {
        for _ in 0..count {
            logs.push(pain_log(w.id, area, 5));
        }
    }

    let overview = PainStatsCalculator::analyze(&[w], &logs, day("2026-08-01"));

    assert_eq!(overview.top_areas.len(), 5, "six areas truncate to five");
    assert_eq!(overview.top_areas[0].pain_area, PainArea::Shoulder);
    assert_eq!(overview.top_areas[0].count, 4);
    assert_eq!(overview.top_areas[1].pain_area, PainArea::Knee);
}

#[test]
fn empty_input_yields_empty_overview() {
    let overview = PainStatsCalculator::analyze(&[], &[], day("2026-08-01"));

    assert!(overview.weekly.is_empty());
    assert!(overview.top_areas.is_empty());
}

#[test]
fn overview_serializes_with_snake_case_wire_fields() {
    let w = workout("2026-07-28", WorkoutType::Padel, 60);
    let logs = vec![pain_log(w.id, PainArea::LowerBack, 7)];

    let overview = PainStatsCalculator::analyze(&[w], &logs, day("2026-08-01"));
    let json = serde_json::to_value(&overview).unwrap();

    assert_eq!(json["weekly"][0]["pain_logs"], 1);
    assert_eq!(json["top_areas"][0]["pain_area"], "lower_back");
    assert_eq!(json["top_areas"][0]["count"], 1);
}
