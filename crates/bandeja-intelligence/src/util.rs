// ABOUTME: Small numeric helpers shared by the statistics modules
// ABOUTME: One-decimal rounding matching the presentation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

/// Round to one decimal place, the precision every reported rate and
/// average uses
pub(crate) fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
