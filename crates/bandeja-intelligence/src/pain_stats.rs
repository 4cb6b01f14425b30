// ABOUTME: Pain statistics: ISO-week buckets over the last 90 days plus top pain areas
// ABOUTME: Buckets follow workout weeks so weeks with workouts but no pain still appear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Pain statistics over workouts and their pain logs
//!
//! Weekly buckets are keyed by the ISO week (Monday start) of the parent
//! workout's date, restricted to the last 90 days; a week with workouts
//! but no pain logs reports a zero count and zero mean intensity.

use std::collections::HashMap;

use bandeja_core::models::{PainArea, PainLogRecord, WorkoutRecord};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis_constants::pain_windows::{MAX_WEEK_BUCKETS, TOP_AREA_LIMIT, WINDOW_DAYS};
use crate::util::round_one;

/// One ISO-week bucket of pain logs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainWeekBucket {
    /// ISO week label, e.g. "2026-W05"
    pub iso_week: String,
    /// Pain logs recorded against workouts in this week
    pub pain_logs: u32,
    /// Mean pain intensity, one decimal; 0.0 for a log-free week
    pub avg_intensity: f64,
}

/// Frequency of one pain area over all history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainAreaCount {
    /// Affected body area
    pub pain_area: PainArea,
    /// Number of logs pointing at it
    pub count: u32,
}

/// Full pain report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainOverview {
    /// Weekly buckets, newest first
    pub weekly: Vec<PainWeekBucket>,
    /// Most frequent pain areas over all history
    pub top_areas: Vec<PainAreaCount>,
}

/// Pain statistics calculator
pub struct PainStatsCalculator;

impl PainStatsCalculator {
    /// Compute the pain report for one user
    ///
    /// `workouts` and `pain_logs` are the user's full history; `today`
    /// anchors the 90-day weekly window.
    #[must_use]
    pub fn analyze(
        workouts: &[WorkoutRecord],
        pain_logs: &[PainLogRecord],
        today: NaiveDate,
    ) -> PainOverview {
        let weekly = Self::weekly_buckets(workouts, pain_logs, today);
        let top_areas = Self::top_areas(pain_logs);

        debug!(
            weeks = weekly.len(),
            areas = top_areas.len(),
            "computed pain overview"
        );

        PainOverview { weekly, top_areas }
    }

    fn weekly_buckets(
        workouts: &[WorkoutRecord],
        pain_logs: &[PainLogRecord],
        today: NaiveDate,
    ) -> Vec<PainWeekBucket> {
        let cutoff = today - Duration::days(WINDOW_DAYS);

        // Workout id -> ISO week key, windowed; every such week gets a
        // bucket even when no pain was logged against it.
        let mut workout_weeks: HashMap<Uuid, (i32, u32)> = HashMap::new();
        let mut buckets: HashMap<(i32, u32), (u32, u32)> = HashMap::new();

        for workout in workouts {
            if workout.date < cutoff {
                continue;
            }
            let iso = workout.date.iso_week();
            let key = (iso.year(), iso.week());
            workout_weeks.insert(workout.id, key);
            buckets.entry(key).or_insert((0, 0));
        }

        for log in pain_logs {
            let Some(key) = workout_weeks.get(&log.workout_id) else {
                continue;
            };
            if let Some((count, intensity_sum)) = buckets.get_mut(key) {
                *count += 1;
                *intensity_sum += u32::from(log.pain_intensity_0_10);
            }
        }

        let mut keyed: Vec<((i32, u32), (u32, u32))> = buckets.into_iter().collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        keyed.truncate(MAX_WEEK_BUCKETS);

        keyed
            .into_iter()
            .map(|((year, week), (count, intensity_sum))| PainWeekBucket {
                iso_week: format!("{year:04}-W{week:02}"),
                pain_logs: count,
                avg_intensity: if count == 0 {
                    0.0
                } else {
                    round_one(f64::from(intensity_sum) / f64::from(count))
                },
            })
            .collect()
    }

    fn top_areas(pain_logs: &[PainLogRecord]) -> Vec<PainAreaCount> {
        let mut counts: HashMap<PainArea, u32> = HashMap::new();
        for log in pain_logs {
            *counts.entry(log.pain_area).or_insert(0) += 1;
        }

        let mut ranking: Vec<PainAreaCount> = counts
            .into_iter()
            .map(|(pain_area, count)| PainAreaCount { pain_area, count })
            .collect();

        ranking.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.pain_area.as_str().cmp(b.pain_area.as_str()))
        });
        ranking.truncate(TOP_AREA_LIMIT);
        ranking
    }
}
