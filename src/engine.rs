//! Public entry points composing the parser, scorer, filter, sort, and
//! smart-rule evaluators.
//!
//! Every function here is a pure transform over an immutable snapshot: no
//! I/O, no shared state, no locks. Date-sensitive operations come in `_at`
//! pairs; the un-suffixed form evaluates at `Utc::now()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filter::{apply_filter, passes_filter, EpisodeFilter};
use crate::query::SearchQuery;
use crate::search::search_query;
use crate::smart::{needs_refresh_at, rule_set_matches_at, SmartList, MAX_EPISODES_RANGE};
use crate::sort::{compare_episodes, sort_episodes_in_place, SortOption};
use crate::types::{Episode, SearchResult};

/// Filter a collection and order it by the filter's sort key.
pub fn filter_and_sort(episodes: &[Episode], filter: &EpisodeFilter) -> Vec<Episode> {
    let mut filtered = apply_filter(episodes, filter);
    sort_episodes_in_place(&mut filtered, filter.sort);
    debug!(
        input = episodes.len(),
        output = filtered.len(),
        "filter_and_sort"
    );
    filtered
}

/// Free-text search, ranked by relevance descending.
pub fn search_episodes(episodes: &[Episode], text: &str) -> Vec<SearchResult> {
    search_query(episodes, &SearchQuery::parse(text))
}

/// Advanced search configuration: a structured query plus an optional
/// post-filter, an optional sort override, and an episode cap.
///
/// The cap is clamped to `[1, 500]` at construction — evaluation trusts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub query: SearchQuery,
    #[serde(default)]
    pub filter: Option<EpisodeFilter>,
    /// Overrides relevance ordering when set.
    #[serde(default)]
    pub sort: Option<SortOption>,
    max_episodes: Option<usize>,
}

impl SearchConfig {
    pub fn new(query: SearchQuery) -> Self {
        SearchConfig {
            query,
            filter: None,
            sort: None,
            max_episodes: None,
        }
    }

    pub fn parse(text: &str) -> Self {
        Self::new(SearchQuery::parse(text))
    }

    pub fn with_filter(mut self, filter: EpisodeFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Cap the result list, clamped to `[1, 500]`.
    pub fn with_max_episodes(mut self, max: usize) -> Self {
        self.max_episodes =
            Some(max.clamp(*MAX_EPISODES_RANGE.start(), *MAX_EPISODES_RANGE.end()));
        self
    }

    pub fn max_episodes(&self) -> Option<usize> {
        self.max_episodes
    }
}

/// Structured search with post-filter, sort override, and cap.
pub fn search_episodes_advanced(episodes: &[Episode], config: &SearchConfig) -> Vec<SearchResult> {
    let mut results = search_query(episodes, &config.query);

    if let Some(filter) = &config.filter {
        results.retain(|result| passes_filter(&result.episode, filter));
    }
    if let Some(sort) = config.sort {
        results.sort_by(|a, b| compare_episodes(&a.episode, &b.episode, sort));
    }
    if let Some(max) = config.max_episodes {
        results.truncate(max);
    }

    debug!(
        terms = config.query.terms.len(),
        results = results.len(),
        "search_episodes_advanced"
    );
    results
}

/// Evaluate a smart list at an explicit instant: match, sort, cap.
pub fn evaluate_smart_list_at(
    episodes: &[Episode],
    list: &SmartList,
    now: DateTime<Utc>,
) -> Vec<Episode> {
    let mut matched: Vec<Episode> = episodes
        .iter()
        .filter(|episode| rule_set_matches_at(episode, &list.rule_set, now))
        .cloned()
        .collect();
    sort_episodes_in_place(&mut matched, list.sort);
    if let Some(max) = list.max_episodes() {
        matched.truncate(max);
    }
    debug!(
        list = %list.name,
        input = episodes.len(),
        output = matched.len(),
        "evaluate_smart_list"
    );
    matched
}

/// [`evaluate_smart_list_at`] at `Utc::now()`.
pub fn evaluate_smart_list(episodes: &[Episode], list: &SmartList) -> Vec<Episode> {
    evaluate_smart_list_at(episodes, list, Utc::now())
}

/// Pure refresh-due predicate at `Utc::now()`.
///
/// The background-refresh collaborator owns the timestamp and the timer;
/// this only answers whether a refresh is due.
pub fn needs_refresh(
    last_updated: Option<DateTime<Utc>>,
    interval_seconds: f64,
    auto_update: bool,
) -> bool {
    needs_refresh_at(last_updated, interval_seconds, auto_update, Utc::now())
}

// =============================================================================
// PARALLEL VARIANTS
// =============================================================================

/// Order-preserving parallel evaluation for large libraries.
///
/// Results are identical to the sequential forms; rayon's indexed collect
/// keeps input order before sorting.
#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use crate::search::evaluate_episode;
    use rayon::prelude::*;

    /// Parallel [`filter_and_sort`].
    pub fn filter_and_sort_parallel(episodes: &[Episode], filter: &EpisodeFilter) -> Vec<Episode> {
        let mut filtered: Vec<Episode> = episodes
            .par_iter()
            .filter(|e| passes_filter(e, filter))
            .cloned()
            .collect();
        sort_episodes_in_place(&mut filtered, filter.sort);
        filtered
    }

    /// Parallel [`search_episodes`].
    pub fn search_episodes_parallel(episodes: &[Episode], text: &str) -> Vec<SearchResult> {
        let query = SearchQuery::parse(text);
        if query.is_empty() {
            return Vec::new();
        }
        let mut results: Vec<SearchResult> = episodes
            .par_iter()
            .filter_map(|episode| evaluate_episode(episode, &query))
            .collect();
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results
    }

    /// Parallel [`evaluate_smart_list_at`].
    pub fn evaluate_smart_list_parallel_at(
        episodes: &[Episode],
        list: &SmartList,
        now: DateTime<Utc>,
    ) -> Vec<Episode> {
        let mut matched: Vec<Episode> = episodes
            .par_iter()
            .filter(|episode| rule_set_matches_at(episode, &list.rule_set, now))
            .cloned()
            .collect();
        sort_episodes_in_place(&mut matched, list.sort);
        if let Some(max) = list.max_episodes() {
            matched.truncate(max);
        }
        matched
    }
}

#[cfg(feature = "parallel")]
pub use parallel::{
    evaluate_smart_list_parallel_at, filter_and_sort_parallel, search_episodes_parallel,
};
