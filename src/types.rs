// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the query engine.
//!
//! Everything here is an immutable value type: the engine never mutates an
//! [`Episode`] — any state change is the caller producing a new snapshot.
//! All configuration and result types are serde values (camelCase) so callers
//! can persist presets and render results without the engine doing I/O.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Episode**: `rating`, when present, is in `1..=5`. The engine treats a
//!   missing rating per policy (sorts as 0, rules evaluate false), never as
//!   an error.
//! - **Highlight**: `start < end ≤ text.chars().count()`. Offsets are
//!   character offsets into `text`, NOT byte offsets — multi-byte UTF-8
//!   titles are common in podcast feeds.
//! - **Scoring tables**: field weight and exact-match score are tuned so that
//!   a full title match always dominates a full description match
//!   (`3.0 × 10.0 > 1.0 × 5.0`). Don't reorder the hierarchy casually; the
//!   ranking tests pin it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// EPISODE SNAPSHOT
// =============================================================================

/// Read-only episode snapshot supplied by the caller.
///
/// Durations and playback positions are seconds. `rating` is the user's
/// 1–5 star rating, absent when unrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub podcast_title: String,
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    /// Total duration in seconds, if the feed declared one.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub is_played: bool,
    #[serde(default)]
    pub download_status: DownloadStatus,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub rating: Option<u8>,
    /// Resume position in seconds; `0.0` means never started.
    #[serde(default)]
    pub playback_position: f64,
    pub date_added: DateTime<Utc>,
}

impl Episode {
    /// Derived three-state play status used by sorting and smart rules.
    ///
    /// An episode is in progress once playback has moved off zero and the
    /// user hasn't marked it played.
    pub fn play_status(&self) -> PlayStatus {
        if self.is_played {
            PlayStatus::Played
        } else if self.playback_position > 0.0 {
            PlayStatus::InProgress
        } else {
            PlayStatus::Unplayed
        }
    }

    /// Whether a finished local copy exists.
    #[inline]
    pub fn is_downloaded(&self) -> bool {
        self.download_status == DownloadStatus::Downloaded
    }
}

/// Three-state playback lifecycle: unplayed → in progress → played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayStatus {
    Unplayed,
    InProgress,
    Played,
}

impl PlayStatus {
    /// Sort ordinal: unplayed(0) < inProgress(1) < played(2).
    pub fn ordinal(self) -> u8 {
        match self {
            PlayStatus::Unplayed => 0,
            PlayStatus::InProgress => 1,
            PlayStatus::Played => 2,
        }
    }
}

/// Download lifecycle for an episode's local copy.
///
/// **Gotcha**: the derived declaration order is NOT the sort order — sorting
/// uses [`DownloadStatus::sort_ordinal`], which puts finished downloads first
/// and failures last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DownloadStatus {
    Downloaded,
    Downloading,
    Paused,
    #[default]
    NotDownloaded,
    Failed,
}

impl DownloadStatus {
    /// Sort ordinal: downloaded(0) < downloading(1) < paused(2) <
    /// notDownloaded(3) < failed(4).
    pub fn sort_ordinal(self) -> u8 {
        match self {
            DownloadStatus::Downloaded => 0,
            DownloadStatus::Downloading => 1,
            DownloadStatus::Paused => 2,
            DownloadStatus::NotDownloaded => 3,
            DownloadStatus::Failed => 4,
        }
    }
}

// =============================================================================
// SEARCH FIELDS AND SCORING TABLES
// =============================================================================

/// Which part of an episode a search term targets.
///
/// Duration and date are searchable through their display rendering
/// (`1:02:30`, `Mar 5, 2024`), so `date:2024` works as a plain substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Podcast,
    Duration,
    Date,
}

/// Fields searched when a term has no explicit `field:` prefix.
pub const DEFAULT_SEARCH_FIELDS: [SearchField; 3] = [
    SearchField::Title,
    SearchField::Description,
    SearchField::Podcast,
];

impl SearchField {
    /// Relevance weight applied to a field's match score.
    ///
    /// | field | weight | exact-match score |
    /// |-------------|-----|------|
    /// | title | 3.0 | 10.0 |
    /// | podcast | 2.0 | 7.0 |
    /// | description | 1.0 | 5.0 |
    /// | duration | 0.5 | 3.0 |
    /// | date | 0.5 | 3.0 |
    pub fn weight(self) -> f64 {
        match self {
            SearchField::Title => 3.0,
            SearchField::Podcast => 2.0,
            SearchField::Description => 1.0,
            SearchField::Duration | SearchField::Date => 0.5,
        }
    }

    /// Score awarded for a full (phrase or all-words) match in this field.
    pub fn exact_match_score(self) -> f64 {
        match self {
            SearchField::Title => 10.0,
            SearchField::Podcast => 7.0,
            SearchField::Description => 5.0,
            SearchField::Duration | SearchField::Date => 3.0,
        }
    }

    /// Parse a `field:` prefix, case-insensitively.
    ///
    /// Unknown prefixes return `None` and the caller keeps the token as
    /// literal search text — a typo'd prefix is never a parse failure.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_lowercase().as_str() {
            "title" => Some(SearchField::Title),
            "description" => Some(SearchField::Description),
            "podcast" => Some(SearchField::Podcast),
            "duration" => Some(SearchField::Duration),
            "date" => Some(SearchField::Date),
            _ => None,
        }
    }

    /// Lowercase string form, matching the serde rename convention.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Description => "description",
            SearchField::Podcast => "podcast",
            SearchField::Duration => "duration",
            SearchField::Date => "date",
        }
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// A recorded match span, used for UI emphasis.
///
/// `start`/`end` are character offsets into `text` (the full source text of
/// the matched field); `matched` is the original-case substring they cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub field: SearchField,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub matched: String,
}

/// An episode decorated with relevance metadata.
///
/// `score` can be negative when negated terms matched; such results are never
/// returned by the combiner (it requires a positive total), but intermediate
/// values flow through here in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub episode: Episode,
    pub score: f64,
    pub highlights: Vec<Highlight>,
    /// ~150-character context window centered on the highest-weight
    /// highlight, ellipsis-padded at truncated ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}
