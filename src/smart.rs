// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rule-based smart lists: a generalized typed-predicate engine.
//!
//! A rule is `(type, comparison, value, negated)`. The value is a closed
//! tagged union ([`RuleValue`]); each rule type accepts only certain
//! comparison/value combinations, and anything outside that table evaluates
//! to **non-match, never an error** — conservative exclusion is the whole
//! error-handling story here.
//!
//! Valid combinations:
//!
//! | type family | comparisons | value variants |
//! |---|---|---|
//! | boolean flags (isFavorited/isBookmarked/isArchived) | equals, notEquals | bool |
//! | playStatus / downloadStatus | equals, notEquals | playStatus / downloadStatus |
//! | numeric (duration, rating, playbackPosition) | equals/notEquals (±0.01), lessThan, greaterThan | int, double, timeInterval |
//! | date (dateAdded, pubDate) | equals/notEquals (same day), before, after | date |
//! | date | between | dateRange |
//! | date | within/between (membership), after (vs start), before (vs end) | relativeDatePeriod |
//! | string (podcast, title, description) | equals, notEquals, contains, notContains, startsWith, endsWith | string |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::FilterLogic;
use crate::period::RelativeDatePeriod;
use crate::sort::SortOption;
use crate::types::{DownloadStatus, Episode, PlayStatus};

/// Tolerance for floating-point `equals`/`notEquals` on numeric rules.
const NUMERIC_EPSILON: f64 = 0.01;

/// Episode cap bounds for smart lists and advanced search.
pub const MAX_EPISODES_RANGE: std::ops::RangeInclusive<usize> = 1..=500;

/// Minimum smart-list refresh interval, in seconds.
pub const MIN_REFRESH_INTERVAL: f64 = 60.0;

/// The thirteen rule types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleType {
    PlayStatus,
    DownloadStatus,
    DateAdded,
    PubDate,
    Duration,
    Rating,
    Podcast,
    Title,
    Description,
    IsFavorited,
    IsBookmarked,
    IsArchived,
    PlaybackPosition,
}

/// The twelve comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleComparison {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    LessThan,
    GreaterThan,
    Between,
    Before,
    After,
    Within,
}

/// The ten-variant tagged union a rule compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum RuleValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
    Date(DateTime<Utc>),
    DateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Seconds.
    TimeInterval(f64),
    RelativePeriod(RelativeDatePeriod),
    PlayStatus(PlayStatus),
    DownloadStatus(DownloadStatus),
}

/// One typed predicate, optionally negated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartListRule {
    pub rule_type: RuleType,
    pub comparison: RuleComparison,
    pub value: RuleValue,
    #[serde(default)]
    pub is_negated: bool,
}

impl SmartListRule {
    pub fn new(rule_type: RuleType, comparison: RuleComparison, value: RuleValue) -> Self {
        SmartListRule {
            rule_type,
            comparison,
            value,
            is_negated: false,
        }
    }
}

/// Ordered rules plus combination logic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartListRuleSet {
    pub rules: Vec<SmartListRule>,
    #[serde(default)]
    pub logic: FilterLogic,
}

impl SmartListRuleSet {
    pub fn new(rules: Vec<SmartListRule>, logic: FilterLogic) -> Self {
        SmartListRuleSet { rules, logic }
    }
}

/// A smart list: rule set plus presentation and refresh configuration.
///
/// Construction clamps the episode cap to `[1, 500]` and floors the refresh
/// interval at 60 seconds — data hygiene happens here, never at evaluation
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartList {
    pub name: String,
    pub rule_set: SmartListRuleSet,
    pub sort: SortOption,
    max_episodes: Option<usize>,
    refresh_interval: f64,
    pub auto_update: bool,
}

impl SmartList {
    pub fn new(name: impl Into<String>, rule_set: SmartListRuleSet) -> Self {
        SmartList {
            name: name.into(),
            rule_set,
            sort: SortOption::default(),
            max_episodes: None,
            refresh_interval: 3600.0,
            auto_update: true,
        }
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Cap the evaluated list, clamped to `[1, 500]`.
    pub fn with_max_episodes(mut self, max: usize) -> Self {
        self.max_episodes =
            Some(max.clamp(*MAX_EPISODES_RANGE.start(), *MAX_EPISODES_RANGE.end()));
        self
    }

    /// Set the refresh interval in seconds, floored at 60.
    pub fn with_refresh_interval(mut self, seconds: f64) -> Self {
        self.refresh_interval = seconds.max(MIN_REFRESH_INTERVAL);
        self
    }

    pub fn max_episodes(&self) -> Option<usize> {
        self.max_episodes
    }

    pub fn refresh_interval(&self) -> f64 {
        self.refresh_interval
    }
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Evaluate a rule set against one episode. Empty sets match everything.
pub fn rule_set_matches_at(
    episode: &Episode,
    rule_set: &SmartListRuleSet,
    now: DateTime<Utc>,
) -> bool {
    if rule_set.rules.is_empty() {
        return true;
    }
    match rule_set.logic {
        FilterLogic::And => rule_set
            .rules
            .iter()
            .all(|rule| evaluate_rule_at(episode, rule, now)),
        FilterLogic::Or => rule_set
            .rules
            .iter()
            .any(|rule| evaluate_rule_at(episode, rule, now)),
    }
}

/// Evaluate one rule, XORing the raw predicate with the rule's negation.
pub fn evaluate_rule_at(episode: &Episode, rule: &SmartListRule, now: DateTime<Utc>) -> bool {
    let matched = match rule.rule_type {
        RuleType::IsFavorited => flag_rule(episode.is_favorited, rule),
        RuleType::IsBookmarked => flag_rule(episode.is_bookmarked, rule),
        RuleType::IsArchived => flag_rule(episode.is_archived, rule),
        RuleType::PlayStatus => play_status_rule(episode.play_status(), rule),
        RuleType::DownloadStatus => download_status_rule(episode.download_status, rule),
        RuleType::Duration => numeric_rule(episode.duration, rule),
        RuleType::Rating => numeric_rule(episode.rating.map(f64::from), rule),
        RuleType::PlaybackPosition => numeric_rule(Some(episode.playback_position), rule),
        RuleType::DateAdded => date_rule(Some(episode.date_added), rule, now),
        RuleType::PubDate => date_rule(episode.pub_date, rule, now),
        RuleType::Podcast => string_rule(Some(&episode.podcast_title), rule),
        RuleType::Title => string_rule(Some(&episode.title), rule),
        RuleType::Description => string_rule(episode.description.as_deref(), rule),
    };
    matched ^ rule.is_negated
}

fn flag_rule(flag: bool, rule: &SmartListRule) -> bool {
    let RuleValue::Bool(expected) = rule.value else {
        return false;
    };
    match rule.comparison {
        RuleComparison::Equals => flag == expected,
        RuleComparison::NotEquals => flag != expected,
        _ => false,
    }
}

fn play_status_rule(status: PlayStatus, rule: &SmartListRule) -> bool {
    let RuleValue::PlayStatus(expected) = rule.value else {
        return false;
    };
    match rule.comparison {
        RuleComparison::Equals => status == expected,
        RuleComparison::NotEquals => status != expected,
        _ => false,
    }
}

fn download_status_rule(status: DownloadStatus, rule: &SmartListRule) -> bool {
    let RuleValue::DownloadStatus(expected) = rule.value else {
        return false;
    };
    match rule.comparison {
        RuleComparison::Equals => status == expected,
        RuleComparison::NotEquals => status != expected,
        _ => false,
    }
}

/// Numeric comparison with floating tolerance on equality.
///
/// A missing field value is a non-match, per the degraded-outcome policy.
fn numeric_rule(field: Option<f64>, rule: &SmartListRule) -> bool {
    let Some(actual) = field else {
        return false;
    };
    let expected = match rule.value {
        RuleValue::Int(i) => i as f64,
        RuleValue::Double(d) => d,
        RuleValue::TimeInterval(t) => t,
        _ => return false,
    };
    match rule.comparison {
        RuleComparison::Equals => (actual - expected).abs() <= NUMERIC_EPSILON,
        RuleComparison::NotEquals => (actual - expected).abs() > NUMERIC_EPSILON,
        RuleComparison::LessThan => actual < expected,
        RuleComparison::GreaterThan => actual > expected,
        _ => false,
    }
}

/// Date comparison against an absolute date, an explicit range, or a
/// relative period window.
///
/// Absolute `equals` compares calendar days, not instants. Relative
/// `after`/`before` compare against the window's start/end respectively.
fn date_rule(field: Option<DateTime<Utc>>, rule: &SmartListRule, now: DateTime<Utc>) -> bool {
    let Some(actual) = field else {
        return false;
    };
    match &rule.value {
        RuleValue::Date(expected) => match rule.comparison {
            RuleComparison::Equals => actual.date_naive() == expected.date_naive(),
            RuleComparison::NotEquals => actual.date_naive() != expected.date_naive(),
            RuleComparison::Before => actual < *expected,
            RuleComparison::After => actual > *expected,
            _ => false,
        },
        RuleValue::DateRange { start, end } => match rule.comparison {
            RuleComparison::Between => *start <= actual && actual <= *end,
            _ => false,
        },
        RuleValue::RelativePeriod(period) => {
            let (start, end) = period.resolve(now);
            match rule.comparison {
                RuleComparison::Within | RuleComparison::Between => {
                    start <= actual && actual < end
                }
                RuleComparison::After => actual > start,
                RuleComparison::Before => actual < end,
                _ => false,
            }
        }
        _ => false,
    }
}

fn string_rule(field: Option<&str>, rule: &SmartListRule) -> bool {
    let Some(actual) = field else {
        return false;
    };
    let RuleValue::Text(ref expected) = rule.value else {
        return false;
    };
    let actual = actual.to_lowercase();
    let expected = expected.to_lowercase();
    match rule.comparison {
        RuleComparison::Equals => actual == expected,
        RuleComparison::NotEquals => actual != expected,
        RuleComparison::Contains => actual.contains(&expected),
        RuleComparison::NotContains => !actual.contains(&expected),
        RuleComparison::StartsWith => actual.starts_with(&expected),
        RuleComparison::EndsWith => actual.ends_with(&expected),
        _ => false,
    }
}

// =============================================================================
// REFRESH PREDICATE
// =============================================================================

/// Pure "is a refresh due now" predicate.
///
/// The caller owns the last-refresh timestamp; the engine only answers the
/// question. Never-refreshed lists (no timestamp) are always due when
/// auto-update is on.
pub fn needs_refresh_at(
    last_updated: Option<DateTime<Utc>>,
    interval_seconds: f64,
    auto_update: bool,
    now: DateTime<Utc>,
) -> bool {
    if !auto_update {
        return false;
    }
    let Some(last) = last_updated else {
        return true;
    };
    let elapsed = (now - last).num_milliseconds() as f64 / 1000.0;
    elapsed >= interval_seconds
}
