// ABOUTME: Core types and constants for the Bandeja training log platform
// ABOUTME: Foundation crate with domain models, validation, error types, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

#![deny(unsafe_code)]

//! # Bandeja Core
//!
//! Foundation crate providing shared types and constants for the Bandeja
//! training log platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain-wide validation constants (effort scale, pain caps)
//! - **models**: Core data models (`WorkoutRecord`, `PadelSessionRecord`, pain and weight logs)

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain-wide validation constants organized by concern
pub mod constants;

/// Core data models (workouts, padel sessions, pain logs, weight entries)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    MatchStatus, PadelSessionRecord, PainArea, PainLogDraft, PainLogRecord, UnforcedErrorsLevel,
    WeightEntryRecord, WorkoutRecord, WorkoutType, WorkoutWithPadel,
};
