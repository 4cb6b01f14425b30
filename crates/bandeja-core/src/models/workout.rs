// ABOUTME: Workout record model with type enumeration and effort-scale validation
// ABOUTME: Defines WorkoutRecord, WorkoutType, and the joined WorkoutWithPadel read shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::effort_scale::{MAX_RATING, MIN_RATING, RATING_STEP};
use crate::errors::{AppError, AppResult};
use crate::models::padel::PadelSessionRecord;

/// Enumeration of supported workout types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Padel match or training session
    Padel,
    /// Running session
    Running,
    /// Strength/gym session
    Strength,
    /// Any other activity
    Other,
}

impl WorkoutType {
    /// Wire-format string for this workout type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padel => "padel",
            Self::Running => "running",
            Self::Strength => "strength",
            Self::Other => "other",
        }
    }

    /// Parse a wire-format string into a workout type
    ///
    /// # Errors
    /// Returns `ErrorCode::InvalidInput` for unknown type strings.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "padel" => Ok(Self::Padel),
            "running" => Ok(Self::Running),
            "strength" => Ok(Self::Strength),
            "other" => Ok(Self::Other),
            unknown => Err(AppError::invalid_input(format!(
                "unknown workout type: {unknown}"
            ))),
        }
    }
}

/// Validate an intensity/feeling rating against the 1-5 half-step scale
///
/// # Errors
/// Returns `ErrorCode::ValueOutOfRange` when the value is non-finite,
/// outside [1.0, 5.0], or off the 0.5 grid.
pub fn validate_effort_rating(value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < MIN_RATING || value > MAX_RATING {
        return Err(AppError::value_out_of_range(format!(
            "rating {value} outside {MIN_RATING}-{MAX_RATING}"
        )));
    }

    let steps = value / RATING_STEP;
    if (steps - steps.round()).abs() > f64::EPSILON {
        return Err(AppError::value_out_of_range(format!(
            "rating {value} is not a multiple of {RATING_STEP}"
        )));
    }

    Ok(value)
}

/// A single logged workout
///
/// Dates are plain calendar days as entered by the user; no time zone
/// conversion is applied anywhere in the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    /// Unique workout id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the workout
    pub date: NaiveDate,
    /// Activity type
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Duration in minutes (always positive)
    pub duration_min: u32,
    /// Perceived intensity, 1-5 in half steps
    pub intensity_1_5: Option<f64>,
    /// Subjective feeling, 1-5 in half steps
    pub feeling_1_5: Option<f64>,
    /// Free-text note
    pub note: Option<String>,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Validate the record against the write-time rules
    ///
    /// # Errors
    /// Returns `ErrorCode::ValueOutOfRange` for a zero duration or an
    /// intensity/feeling rating off the 1-5 half-step scale.
    pub fn validate(&self) -> AppResult<()> {
        if self.duration_min == 0 {
            return Err(AppError::value_out_of_range(
                "duration_min must be positive",
            ));
        }
        if let Some(intensity) = self.intensity_1_5 {
            validate_effort_rating(intensity)?;
        }
        if let Some(feeling) = self.feeling_1_5 {
            validate_effort_rating(feeling)?;
        }
        Ok(())
    }
}

/// A workout joined with its padel session, when one exists
///
/// The padel session is present only for padel-typed workouts; every other
/// type carries `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutWithPadel {
    /// The workout row
    #[serde(flatten)]
    pub workout: WorkoutRecord,
    /// The joined padel session, if any
    pub padel_session: Option<PadelSessionRecord>,
}

impl WorkoutWithPadel {
    /// Intensity coerced to 0.0 when absent or non-finite
    #[must_use]
    pub fn intensity_or_zero(&self) -> f64 {
        finite_or_zero(self.workout.intensity_1_5)
    }

    /// Feeling coerced to 0.0 when absent or non-finite
    #[must_use]
    pub fn feeling_or_zero(&self) -> f64 {
        finite_or_zero(self.workout.feeling_1_5)
    }

    /// Duration in minutes as a float
    #[must_use]
    pub fn duration_min_f64(&self) -> f64 {
        f64::from(self.workout.duration_min)
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.map_or(0.0, |v| if v.is_finite() { v } else { 0.0 })
}
