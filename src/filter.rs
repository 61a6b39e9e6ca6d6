//! Fixed-vocabulary boolean filtering.
//!
//! A filter is an ordered set of conditions over eight criteria, combined
//! with AND/OR. Archived episodes are excluded by default; the exclusion is
//! lifted only when the filter carries an **unnegated** `archived` condition.
//! An empty filter passes every non-archived episode through unchanged.

use serde::{Deserialize, Serialize};

use crate::sort::SortOption;
use crate::types::Episode;

/// The eight filterable criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCriteria {
    Unplayed,
    Downloaded,
    Favorited,
    InProgress,
    Bookmarked,
    Archived,
    Rated,
    Unrated,
}

impl FilterCriteria {
    /// The raw predicate for this criteria, before negation.
    pub fn matches(self, episode: &Episode) -> bool {
        match self {
            FilterCriteria::Unplayed => !episode.is_played,
            FilterCriteria::Downloaded => episode.is_downloaded(),
            FilterCriteria::Favorited => episode.is_favorited,
            FilterCriteria::InProgress => {
                episode.playback_position > 0.0 && !episode.is_played
            }
            FilterCriteria::Bookmarked => episode.is_bookmarked,
            FilterCriteria::Archived => episode.is_archived,
            FilterCriteria::Rated => episode.rating.is_some(),
            FilterCriteria::Unrated => episode.rating.is_none(),
        }
    }
}

/// How multiple conditions (or smart rules) combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterLogic {
    #[default]
    And,
    Or,
}

/// One criteria, optionally negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub is_negated: bool,
}

impl FilterCondition {
    pub fn new(criteria: FilterCriteria) -> Self {
        FilterCondition {
            criteria,
            is_negated: false,
        }
    }

    pub fn negated(criteria: FilterCriteria) -> Self {
        FilterCondition {
            criteria,
            is_negated: true,
        }
    }

    /// Criteria predicate XOR negation.
    pub fn matches(&self, episode: &Episode) -> bool {
        self.criteria.matches(episode) ^ self.is_negated
    }
}

/// An ordered condition set plus combination logic and a sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeFilter {
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
    #[serde(default)]
    pub logic: FilterLogic,
    #[serde(default)]
    pub sort: SortOption,
}

impl Default for EpisodeFilter {
    fn default() -> Self {
        EpisodeFilter {
            conditions: Vec::new(),
            logic: FilterLogic::And,
            sort: SortOption::default(),
        }
    }
}

impl EpisodeFilter {
    pub fn new(conditions: Vec<FilterCondition>, logic: FilterLogic, sort: SortOption) -> Self {
        EpisodeFilter {
            conditions,
            logic,
            sort,
        }
    }

    /// Whether this filter explicitly asks for archived episodes.
    fn includes_archived(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.criteria == FilterCriteria::Archived && !c.is_negated)
    }
}

/// Condition-set match, ignoring the archived default-exclusion.
///
/// An empty condition set matches everything.
pub fn episode_matches(episode: &Episode, filter: &EpisodeFilter) -> bool {
    if filter.conditions.is_empty() {
        return true;
    }
    match filter.logic {
        FilterLogic::And => filter.conditions.iter().all(|c| c.matches(episode)),
        FilterLogic::Or => filter.conditions.iter().any(|c| c.matches(episode)),
    }
}

/// Full filter semantics: archived default-exclusion plus condition match.
pub(crate) fn passes_filter(episode: &Episode, filter: &EpisodeFilter) -> bool {
    if episode.is_archived && !filter.includes_archived() {
        return false;
    }
    episode_matches(episode, filter)
}

/// Filter a collection, preserving input order.
///
/// Sorting is a separate concern — see [`crate::engine::filter_and_sort`].
pub fn apply_filter(episodes: &[Episode], filter: &EpisodeFilter) -> Vec<Episode> {
    episodes
        .iter()
        .filter(|e| passes_filter(e, filter))
        .cloned()
        .collect()
}
