// ABOUTME: Period-scoped win/loss statistics with partner and opponent breakdowns
// ABOUTME: Decided matches drive rates; unclear/aborted/absent statuses are counted separately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bandeja

//! Win-rate statistics over padel sessions
//!
//! Rates are percentages rounded to one decimal and reported as `None`
//! (never zero) when no decided matches exist, so the presentation layer
//! can distinguish "0% wins" from "nothing to measure".

use std::cmp::Ordering;
use std::collections::HashMap;

use bandeja_core::models::{MatchStatus, WorkoutType, WorkoutWithPadel};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis_constants::win_rate_limits::{
    MIN_OPPONENT_SAMPLE, MIN_PARTNER_SAMPLE, RECENT_MATCH_LIMIT, TOP_PARTNER_LIMIT,
};
use crate::util::round_one;

/// Sentinel label for sessions logged without a partner name
const UNKNOWN_PARTNER: &str = "Unknown partner";

/// Time window for a statistics query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsPeriod {
    /// Only sessions dated within the last N days
    Days(u32),
    /// No date restriction
    AllTime,
}

impl StatsPeriod {
    /// Whether a calendar day falls inside this period, measured back
    /// from the supplied reference date
    #[must_use]
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::AllTime => true,
            Self::Days(days) => date >= today - Duration::days(i64::from(days)),
        }
    }

    /// The day count, or `None` for all-time
    #[must_use]
    pub const fn days(self) -> Option<u32> {
        match self {
            Self::Days(days) => Some(days),
            Self::AllTime => None,
        }
    }
}

/// Win/loss/unclear totals for a period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchTotals {
    /// Sessions with status `win`
    pub wins: u32,
    /// Sessions with status `loss`
    pub losses: u32,
    /// Sessions with an unclear, aborted, or absent status
    pub unclear: u32,
    /// Percentage of decided matches won, one decimal; `None` when no
    /// decided matches exist
    pub win_rate: Option<f64>,
}

/// Win rate for one partner, decided matches only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerWinRate {
    /// Partner name, or the unknown-partner sentinel
    pub partner: String,
    /// Decided matches won with this partner
    pub wins: u32,
    /// Decided matches lost with this partner
    pub losses: u32,
    /// Decided matches played with this partner
    pub matches: u32,
    /// Win percentage, one decimal
    pub win_rate: Option<f64>,
}

/// Win rate against one opponents string, decided matches only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpponentWinRate {
    /// Opponents exactly as entered (trimmed)
    pub opponents: String,
    /// Decided matches won against them
    pub wins: u32,
    /// Decided matches lost against them
    pub losses: u32,
    /// Decided matches played against them
    pub matches: u32,
    /// Win percentage, one decimal
    pub win_rate: Option<f64>,
}

/// One row of the recent-match list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentMatch {
    /// Workout id of the session
    pub id: Uuid,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Partner name as entered
    pub partner: Option<String>,
    /// Opponents as entered
    pub opponents: Option<String>,
    /// Raw results text
    pub results: Option<String>,
    /// Match status, defaulting to `unclear` when absent
    pub match_status: MatchStatus,
}

/// Full win-rate report for a period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinRateSummary {
    /// Period length in days, `None` for all-time
    pub period_days: Option<u32>,
    /// Overall totals
    pub total: MatchTotals,
    /// Best partners by win rate, sample floor applied
    pub partner_win_rate: Vec<PartnerWinRate>,
    /// All opponents by win rate, sample floor applied
    pub opponent_win_rate: Vec<OpponentWinRate>,
    /// Most recent sessions in the period
    pub recent_matches: Vec<RecentMatch>,
}

/// Configuration for win-rate analysis
#[derive(Debug, Clone)]
pub struct WinRateConfig {
    /// Minimum decided matches before a partner rate is reported
    pub min_partner_sample: u32,
    /// Minimum decided matches before an opponent rate is reported
    pub min_opponent_sample: u32,
    /// Maximum partner rows reported
    pub top_partner_limit: usize,
    /// Maximum recent-match rows reported
    pub recent_match_limit: usize,
}

impl Default for WinRateConfig {
    fn default() -> Self {
        Self {
            min_partner_sample: MIN_PARTNER_SAMPLE,
            min_opponent_sample: MIN_OPPONENT_SAMPLE,
            top_partner_limit: TOP_PARTNER_LIMIT,
            recent_match_limit: RECENT_MATCH_LIMIT,
        }
    }
}

/// Win-rate analyzer over padel sessions
pub struct WinRateAnalyzer {
    config: WinRateConfig,
}

impl Default for WinRateAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WinRateAnalyzer {
    /// Create an analyzer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: WinRateConfig::default(),
        }
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub const fn with_config(config: WinRateConfig) -> Self {
        Self { config }
    }

    /// Compute the win-rate report for one user's sessions
    ///
    /// `sessions` may arrive in any order; `today` anchors the period
    /// filter so the computation never reads the clock.
    #[must_use]
    pub fn analyze(
        &self,
        sessions: &[WorkoutWithPadel],
        period: StatsPeriod,
        today: NaiveDate,
    ) -> WinRateSummary {
        let scoped: Vec<&WorkoutWithPadel> = sessions
            .iter()
            .filter(|session| {
                session.workout.workout_type == WorkoutType::Padel
                    && session.padel_session.is_some()
                    && period.contains(session.workout.date, today)
            })
            .collect();

        let total = Self::totals(&scoped);
        let partner_win_rate = self.partner_ranking(&scoped);
        let opponent_win_rate = self.opponent_ranking(&scoped);
        let recent_matches = self.recent_matches(&scoped);

        debug!(
            sessions = scoped.len(),
            wins = total.wins,
            losses = total.losses,
            "computed win-rate summary"
        );

        WinRateSummary {
            period_days: period.days(),
            total,
            partner_win_rate,
            opponent_win_rate,
            recent_matches,
        }
    }

    fn totals(scoped: &[&WorkoutWithPadel]) -> MatchTotals {
        let mut wins = 0;
        let mut losses = 0;
        let mut unclear = 0;

        for session in scoped {
            match session.padel_session.as_ref().and_then(|p| p.match_status) {
                Some(MatchStatus::Win) => wins += 1,
                Some(MatchStatus::Loss) => losses += 1,
                Some(MatchStatus::Unclear | MatchStatus::Aborted) | None => unclear += 1,
            }
        }

        MatchTotals {
            wins,
            losses,
            unclear,
            win_rate: calc_rate(wins, losses),
        }
    }

    fn partner_ranking(&self, scoped: &[&WorkoutWithPadel]) -> Vec<PartnerWinRate> {
        let mut groups: HashMap<String, (u32, u32)> = HashMap::new();

        for session in scoped {
            let Some(padel) = session.padel_session.as_ref() else {
                continue;
            };
            let Some(status) = padel.match_status.filter(|status| status.is_decided()) else {
                continue;
            };

            let partner = padel
                .partner
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_PARTNER)
                .to_owned();

            let entry = groups.entry(partner).or_insert((0, 0));
            match status {
                MatchStatus::Win => entry.0 += 1,
                _ => entry.1 += 1,
            }
        }

        let mut ranking: Vec<PartnerWinRate> = groups
            .into_iter()
            .filter(|(_, (wins, losses))| wins + losses >= self.config.min_partner_sample)
            .map(|(partner, (wins, losses))| PartnerWinRate {
                partner,
                wins,
                losses,
                matches: wins + losses,
                win_rate: calc_rate(wins, losses),
            })
            .collect();

        sort_by_rate_desc(&mut ranking, |row| row.win_rate);
        ranking.truncate(self.config.top_partner_limit);
        ranking
    }

    fn opponent_ranking(&self, scoped: &[&WorkoutWithPadel]) -> Vec<OpponentWinRate> {
        let mut groups: HashMap<String, (u32, u32)> = HashMap::new();

        for session in scoped {
            let Some(padel) = session.padel_session.as_ref() else {
                continue;
            };
            let Some(status) = padel.match_status.filter(|status| status.is_decided()) else {
                continue;
            };
            let Some(opponents) = padel
                .opponents
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
            else {
                continue;
            };

            let entry = groups.entry(opponents.to_owned()).or_insert((0, 0));
            match status {
                MatchStatus::Win => entry.0 += 1,
                _ => entry.1 += 1,
            }
        }

        let mut ranking: Vec<OpponentWinRate> = groups
            .into_iter()
            .filter(|(_, (wins, losses))| wins + losses >= self.config.min_opponent_sample)
            .map(|(opponents, (wins, losses))| OpponentWinRate {
                opponents,
                wins,
                losses,
                matches: wins + losses,
                win_rate: calc_rate(wins, losses),
            })
            .collect();

        sort_by_rate_desc(&mut ranking, |row| row.win_rate);
        ranking
    }

    fn recent_matches(&self, scoped: &[&WorkoutWithPadel]) -> Vec<RecentMatch> {
        let mut ordered: Vec<&&WorkoutWithPadel> = scoped.iter().collect();
        ordered.sort_by(|a, b| {
            b.workout
                .date
                .cmp(&a.workout.date)
                .then(b.workout.created_at.cmp(&a.workout.created_at))
        });

        ordered
            .into_iter()
            .take(self.config.recent_match_limit)
            .filter_map(|session| {
                let padel = session.padel_session.as_ref()?;
                Some(RecentMatch {
                    id: session.workout.id,
                    date: session.workout.date,
                    partner: padel.partner.clone(),
                    opponents: padel.opponents.clone(),
                    results: padel.results.clone(),
                    match_status: padel.match_status.unwrap_or(MatchStatus::Unclear),
                })
            })
            .collect()
    }
}

/// Percentage of decided matches won, one decimal; `None` when nothing
/// was decided
fn calc_rate(wins: u32, losses: u32) -> Option<f64> {
    let total = wins + losses;
    if total == 0 {
        return None;
    }
    Some(round_one(100.0 * f64::from(wins) / f64::from(total)))
}

fn sort_by_rate_desc<T>(rows: &mut [T], rate: impl Fn(&T) -> Option<f64>) {
    rows.sort_by(|a, b| {
        let rate_a = rate(a).unwrap_or(0.0);
        let rate_b = rate(b).unwrap_or(0.0);
        rate_b.partial_cmp(&rate_a).unwrap_or(Ordering::Equal)
    });
}
