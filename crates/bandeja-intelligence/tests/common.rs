// ABOUTME: Shared test builders and setup helpers for the intelligence integration tests
// ABOUTME: Provides record constructors and TEST_LOG-aware logging initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `bandeja-intelligence`

use bandeja_core::models::{
    MatchStatus, PadelSessionRecord, PainArea, PainLogRecord, WeightEntryRecord, WorkoutRecord,
    WorkoutType, WorkoutWithPadel,
};
use chrono::{NaiveDate, Utc};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a `YYYY-MM-DD` calendar day
pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Create a workout with no ratings and no note
pub fn workout(date: &str, workout_type: WorkoutType, duration_min: u32) -> WorkoutRecord {
    WorkoutRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date: day(date),
        workout_type,
        duration_min,
        intensity_1_5: None,
        feeling_1_5: None,
        note: None,
        created_at: Utc::now(),
    }
}

/// Create an empty padel session row for a workout
pub fn padel_session(workout_id: Uuid) -> PadelSessionRecord {
    PadelSessionRecord {
        id: Uuid::new_v4(),
        workout_id,
        session_format: None,
        partner: None,
        opponents: None,
        results: None,
        match_status: None,
        unforced_errors_level: None,
        coach_summary: None,
        coach_tags: Vec::new(),
        tags: Vec::new(),
        ball_share: None,
        created_at: Utc::now(),
    }
}

/// Create a padel workout joined with a session carrying the given status
pub fn padel_match(date: &str, status: Option<MatchStatus>) -> WorkoutWithPadel {
    let workout = workout(date, WorkoutType::Padel, 90);
    let mut session = padel_session(workout.id);
    session.match_status = status;
    WorkoutWithPadel {
        workout,
        padel_session: Some(session),
    }
}

/// Create a padel session with intensity/feeling ratings for window analysis
pub fn rated_padel(
    date: &str,
    intensity: Option<f64>,
    feeling: Option<f64>,
    duration_min: u32,
) -> WorkoutWithPadel {
    let mut joined = padel_match(date, None);
    joined.workout.intensity_1_5 = intensity;
    joined.workout.feeling_1_5 = feeling;
    joined.workout.duration_min = duration_min;
    joined
}

/// Create a pain log against a workout
pub fn pain_log(workout_id: Uuid, area: PainArea, intensity: u8) -> PainLogRecord {
    PainLogRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        workout_id,
        pain_area: area,
        pain_intensity_0_10: intensity,
        pain_type: None,
        pain_note: None,
        created_at: Utc::now(),
    }
}

/// Create a weight entry
pub fn weight_entry(date: &str, weight_kg: f64) -> WeightEntryRecord {
    WeightEntryRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date: day(date),
        weight_kg,
        note: None,
        created_at: Utc::now(),
    }
}
