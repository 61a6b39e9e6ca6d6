//! Sort engine behavior over the shared sample library.

use crate::common::{make_episode, sample_library, utc};
use epiq::{compare_episodes, sort_episodes, SortOption};
use std::cmp::Ordering;

const ALL_SORTS: [SortOption; 8] = [
    SortOption::PubDateNewest,
    SortOption::PubDateOldest,
    SortOption::Duration,
    SortOption::Title,
    SortOption::PlayStatus,
    SortOption::DownloadStatus,
    SortOption::Rating,
    SortOption::DateAdded,
];

#[test]
fn every_key_is_antisymmetric_over_the_library() {
    let library = sample_library();
    for sort in ALL_SORTS {
        for a in &library {
            for b in &library {
                let forward = compare_episodes(a, b, sort);
                let backward = compare_episodes(b, a, sort);
                assert_eq!(forward, backward.reverse(), "sort {:?}", sort);
            }
        }
    }
}

#[test]
fn missing_dates_sort_last_in_both_directions() {
    let library = sample_library();
    for sort in [SortOption::PubDateNewest, SortOption::PubDateOldest] {
        let sorted = sort_episodes(&library, sort);
        let tail = sorted.last().unwrap();
        assert!(tail.pub_date.is_none(), "sort {:?}", sort);
    }
}

#[test]
fn missing_duration_sorts_last() {
    let sorted = sort_episodes(&sample_library(), SortOption::Duration);
    assert!(sorted.last().unwrap().duration.is_none());
    let durations: Vec<Option<f64>> = sorted.iter().map(|e| e.duration).collect();
    let known: Vec<f64> = durations.iter().flatten().copied().collect();
    assert!(known.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn rating_treats_missing_as_zero() {
    let mut low = make_episode("low", "Low");
    low.rating = Some(1);
    let unrated = make_episode("none", "None");
    let sorted = sort_episodes(&[unrated, low], SortOption::Rating);
    assert_eq!(sorted[0].id, "low");
    // A missing rating ties with an explicit zero-equivalent, so stability
    // decides between unrated episodes.
    assert_eq!(
        compare_episodes(&sorted[1], &sorted[1], SortOption::Rating),
        Ordering::Equal
    );
}

#[test]
fn title_sort_is_locale_insensitive_on_case() {
    let a = make_episode("a", "apple pie stories");
    let b = make_episode("b", "Apple Pie Stories");
    assert_eq!(compare_episodes(&a, &b, SortOption::Title), Ordering::Equal);
}

#[test]
fn date_added_is_newest_first() {
    let mut early = make_episode("early", "E");
    early.date_added = utc(2024, 1, 1);
    let mut late = make_episode("late", "L");
    late.date_added = utc(2024, 5, 1);
    let sorted = sort_episodes(&[early, late], SortOption::DateAdded);
    assert_eq!(sorted[0].id, "late");
}
