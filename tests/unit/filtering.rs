//! Filter evaluator edge cases over the shared sample library.

use crate::common::sample_library;
use epiq::{
    apply_filter, episode_matches, filter_and_sort, EpisodeFilter, FilterCondition,
    FilterCriteria, FilterLogic, SortOption,
};

fn filter(conditions: Vec<FilterCondition>, logic: FilterLogic) -> EpisodeFilter {
    EpisodeFilter::new(conditions, logic, SortOption::PubDateNewest)
}

#[test]
fn empty_filter_is_identity_minus_archived() {
    let library = sample_library();
    let out = apply_filter(&library, &EpisodeFilter::default());
    assert_eq!(out.len(), library.len() - 1);
    assert!(out.iter().all(|e| !e.is_archived));
}

#[test]
fn archived_condition_must_be_unnegated_to_lift_exclusion() {
    let library = sample_library();

    let unnegated = filter(
        vec![FilterCondition::new(FilterCriteria::Archived)],
        FilterLogic::And,
    );
    let out = apply_filter(&library, &unnegated);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "archived");

    // `NOT archived` under OR logic reaches archived episodes as a
    // condition, but the default exclusion still applies first.
    let negated = filter(
        vec![FilterCondition::negated(FilterCriteria::Archived)],
        FilterLogic::Or,
    );
    let out = apply_filter(&library, &negated);
    assert!(out.iter().all(|e| !e.is_archived));
}

#[test]
fn negated_conditions_xor() {
    let library = sample_library();
    let not_downloaded = filter(
        vec![FilterCondition::negated(FilterCriteria::Downloaded)],
        FilterLogic::And,
    );
    let out = apply_filter(&library, &not_downloaded);
    assert!(out.iter().all(|e| !e.is_downloaded()));
    assert!(!out.is_empty());
}

#[test]
fn or_logic_unions_conditions() {
    let library = sample_library();
    let favorites_or_in_progress = filter(
        vec![
            FilterCondition::new(FilterCriteria::Favorited),
            FilterCondition::new(FilterCriteria::InProgress),
        ],
        FilterLogic::Or,
    );
    let out = apply_filter(&library, &favorites_or_in_progress);
    // The interview episode is both; nothing else is either.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "interview");
}

#[test]
fn episode_matches_ignores_archived_exclusion() {
    let library = sample_library();
    let archived = library.iter().find(|e| e.is_archived).unwrap();
    // Condition-set match is true (empty set), even though apply_filter
    // would exclude this episode.
    assert!(episode_matches(archived, &EpisodeFilter::default()));
}

#[test]
fn filter_and_sort_orders_by_filter_sort_key() {
    let library = sample_library();
    let unplayed = filter(
        vec![FilterCondition::new(FilterCriteria::Unplayed)],
        FilterLogic::And,
    );
    let out = filter_and_sort(&library, &unplayed);
    let ids: Vec<&str> = out.iter().map(|e| e.id.as_str()).collect();
    // Newest first, undated last.
    assert_eq!(ids, vec!["finale", "interview", "undated"]);
}
