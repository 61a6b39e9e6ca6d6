//! Episode query and ranking engine for podcast libraries.
//!
//! A stateless, pure-function library that filters, sorts, full-text-searches
//! (with relevance scoring and highlighting), and evaluates rule-based smart
//! lists over immutable episode snapshots. The engine performs no I/O and
//! owns no mutable state: callers pass snapshots and configuration in, and
//! get ordered results out, so concurrent calls are race-free by
//! construction.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  query.rs  │───▶│ scoring.rs  │───▶│  search.rs  │
//! │  (parse)   │    │ (score_term)│    │ (combiner,  │
//! │            │    │             │    │  snippets)  │
//! └────────────┘    └─────────────┘    └─────────────┘
//!       ┌────────────┐  ┌───────────┐  ┌────────────┐
//!       │ filter.rs  │  │  sort.rs  │  │  smart.rs  │
//!       │ (criteria) │  │ (8 orders)│  │ (rules +   │
//!       │            │  │           │  │  period.rs)│
//!       └────────────┘  └───────────┘  └────────────┘
//!                      ┌───────────┐
//!                      │ engine.rs │  public facade
//!                      └───────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use epiq::{search_episodes, Episode};
//! use chrono::Utc;
//!
//! let episodes = vec![Episode {
//!     id: "ep-1".into(),
//!     title: "Season Finale".into(),
//!     description: None,
//!     podcast_title: "My Show".into(),
//!     pub_date: None,
//!     duration: None,
//!     is_played: false,
//!     download_status: Default::default(),
//!     is_favorited: false,
//!     is_bookmarked: false,
//!     is_archived: false,
//!     rating: None,
//!     playback_position: 0.0,
//!     date_added: Utc::now(),
//! }];
//!
//! let results = search_episodes(&episodes, "title:finale");
//! assert_eq!(results.len(), 1);
//! ```

// Module declarations
mod engine;
mod filter;
mod period;
mod query;
mod scoring;
mod search;
mod smart;
mod sort;
pub mod testing;
mod text;
mod types;

// Re-exports for public API
pub use engine::{
    evaluate_smart_list, evaluate_smart_list_at, filter_and_sort, needs_refresh,
    search_episodes, search_episodes_advanced, SearchConfig,
};
pub use filter::{
    apply_filter, episode_matches, EpisodeFilter, FilterCondition, FilterCriteria, FilterLogic,
};
pub use period::{RelativeDatePeriod, ALL_PERIODS};
pub use query::{QueryOperator, SearchQuery, SearchTerm};
pub use scoring::{format_date, format_duration, score_term};
pub use search::{evaluate_episode, search_query};
pub use smart::{
    evaluate_rule_at, needs_refresh_at, rule_set_matches_at, RuleComparison, RuleType, RuleValue,
    SmartList, SmartListRule, SmartListRuleSet, MAX_EPISODES_RANGE, MIN_REFRESH_INTERVAL,
};
pub use sort::{compare_episodes, sort_episodes, SortOption};
pub use types::{
    DownloadStatus, Episode, Highlight, PlayStatus, SearchField, SearchResult,
    DEFAULT_SEARCH_FIELDS,
};

#[cfg(feature = "parallel")]
pub use engine::{
    evaluate_smart_list_parallel_at, filter_and_sort_parallel, search_episodes_parallel,
};
