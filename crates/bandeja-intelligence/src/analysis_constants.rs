// ABOUTME: Analysis thresholds and window sizes used by the statistics and coach modules
// ABOUTME: Values mirror the product's established heuristics, organized by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Analysis constants used throughout the intelligence modules
//!
//! These values define the windows, sample-size floors, and template
//! thresholds of the established coaching heuristics. They are literal
//! rules, not tunable fitness science: the product's behavior depends on
//! them being exactly these values.

/// Critical-coach session window and quality-ratio thresholds
pub mod coach_window {
    /// Fewer sessions than this produce no insight at all
    pub const MIN_SESSIONS_FOR_INSIGHT: usize = 3;

    /// The analysis window never looks past this many recent sessions
    pub const MAX_SESSIONS_IN_WINDOW: usize = 10;

    /// Below this feeling/intensity ratio the overload narrative applies
    pub const OVERLOAD_RATIO_THRESHOLD: f64 = 0.85;

    /// Above this feeling/intensity ratio the headroom narrative applies
    pub const HEADROOM_RATIO_THRESHOLD: f64 = 1.1;

    /// Ratio reported when mean intensity is zero (no degenerate signal)
    pub const NEUTRAL_QUALITY_RATIO: f64 = 1.0;
}

/// Session-summary rule thresholds on the 1-5 effort scale
pub mod session_rules {
    /// Intensity strictly below this (and above 0) reads as low focus
    pub const LOW_FOCUS_INTENSITY_CEILING: f64 = 2.0;

    /// Feeling strictly below this (and above 0) reads as low focus
    pub const LOW_FOCUS_FEELING_CEILING: f64 = 3.0;

    /// Intensity at or above this counts toward stable performance
    pub const STABLE_INTENSITY_FLOOR: f64 = 4.0;

    /// Feeling at or above this counts toward stable performance
    pub const STABLE_FEELING_FLOOR: f64 = 4.0;

    /// A coach summary keeps at most this many sentences
    pub const MAX_SUMMARY_SENTENCES: usize = 2;
}

/// Momentum-drop detection over parsed set scores
pub mod momentum {
    /// Minimum parsed sets before the heuristic applies at all
    pub const MIN_SETS: usize = 3;

    /// Own games at or above this make the first set dominant
    pub const DOMINANT_FIRST_SET_OWN: u32 = 6;

    /// Opponent games at or below this make the first set dominant
    pub const DOMINANT_FIRST_SET_OPP: u32 = 1;

    /// At least this many later sets must be losses
    pub const MIN_TRAILING_LOSSES: usize = 2;
}

/// Win-rate ranking sample floors and result limits
pub mod win_rate_limits {
    /// Partners need this many decided matches before a rate is reported
    pub const MIN_PARTNER_SAMPLE: u32 = 3;

    /// Opponents need this many decided matches before a rate is reported
    pub const MIN_OPPONENT_SAMPLE: u32 = 1;

    /// The partner ranking is truncated to this many rows
    pub const TOP_PARTNER_LIMIT: usize = 3;

    /// The recent-match list is capped at this many rows
    pub const RECENT_MATCH_LIMIT: usize = 10;
}

/// Pain statistics windows
pub mod pain_windows {
    /// Weekly buckets only cover this many days back from the reference date
    pub const WINDOW_DAYS: i64 = 90;

    /// At most this many weekly buckets are reported, newest first
    pub const MAX_WEEK_BUCKETS: usize = 12;

    /// The area ranking is truncated to this many rows
    pub const TOP_AREA_LIMIT: usize = 5;
}

/// Weight trend reporting
pub mod weight_windows {
    /// Fewer entries than this produce no trend summary
    pub const MIN_ENTRIES_FOR_TREND: usize = 2;
}
