// ABOUTME: Body-weight entry model with positive-weight validation
// ABOUTME: One row per weigh-in, keyed by calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A single body-weight entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntryRecord {
    /// Unique entry id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar day of the weigh-in
    pub date: NaiveDate,
    /// Weight in kilograms (always positive)
    pub weight_kg: f64,
    /// Free-text note
    pub note: Option<String>,
    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

impl WeightEntryRecord {
    /// Validate the record against the write-time rules
    ///
    /// # Errors
    /// Returns `ErrorCode::ValueOutOfRange` when the weight is not a
    /// positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "weight_kg must be positive, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}
