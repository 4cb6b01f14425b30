// ABOUTME: Core data models and types for the Bandeja training log
// ABOUTME: Re-exports workout, padel session, pain log, and weight entry records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! # Data Models
//!
//! Core data structures shared by the persistence collaborator and the
//! analysis layer.
//!
//! ## Design Principles
//!
//! - **Already validated**: records hold persisted, validated rows; the
//!   analysis layer only has to tolerate absent optional fields
//! - **Serializable**: all models support JSON serialization with
//!   snake_case wire forms
//! - **Calendar days**: workout and weight dates are plain calendar days
//!   (`NaiveDate`), never converted across time zones

// Domain modules
mod padel;
mod pain;
mod weight;
mod workout;

// Re-export all public types for convenience
pub use padel::{MatchStatus, PadelSessionRecord, UnforcedErrorsLevel};
pub use pain::{normalize_pain_logs, NormalizedPainLog, PainArea, PainLogDraft, PainLogRecord};
pub use weight::WeightEntryRecord;
pub use workout::{validate_effort_rating, WorkoutRecord, WorkoutType, WorkoutWithPadel};
