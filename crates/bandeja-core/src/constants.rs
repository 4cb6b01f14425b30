// ABOUTME: Domain-wide validation constants for workout, pain, and weight records
// ABOUTME: Shared bounds that write-time validation enforces before rows are persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Validation constants shared across the platform
//!
//! Write-time validation enforces these bounds; the analysis layer can
//! therefore assume persisted rows already respect them and only has to
//! tolerate absent values.

/// Subjective effort scale used for intensity and feeling ratings
pub mod effort_scale {
    /// Lowest accepted rating on the 1-5 scale
    pub const MIN_RATING: f64 = 1.0;

    /// Highest accepted rating on the 1-5 scale
    pub const MAX_RATING: f64 = 5.0;

    /// Ratings move in half steps (1.0, 1.5, 2.0, ...)
    pub const RATING_STEP: f64 = 0.5;
}

/// Pain logging bounds
pub mod pain {
    /// Pain intensity is recorded on a 0-10 integer scale
    pub const MAX_INTENSITY: u8 = 10;

    /// At most this many pain logs are accepted per create/edit action
    pub const MAX_LOGS_PER_ACTION: usize = 2;
}
