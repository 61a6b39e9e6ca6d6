//! Stable total orderings over episodes.
//!
//! Eight sort keys, each a total order: for any two episodes exactly one of
//! less/greater/equal holds. Missing values (`pub_date`, `duration`) always
//! sort **last** regardless of direction; a missing rating is treated as 0.
//! Sorting is stable, so equal keys preserve input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::Episode;

/// The eight sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    PubDateNewest,
    PubDateOldest,
    Duration,
    Title,
    PlayStatus,
    DownloadStatus,
    Rating,
    DateAdded,
}

/// Compare two episodes under a sort key.
///
/// | key | rule |
/// |---|---|
/// | pubDateNewest | descending by date; missing dates last |
/// | pubDateOldest | ascending; missing dates last |
/// | duration | ascending; missing last |
/// | title | case-insensitive ascending |
/// | playStatus | unplayed < inProgress < played |
/// | downloadStatus | downloaded < downloading < paused < notDownloaded < failed |
/// | rating | descending; missing treated as 0 |
/// | dateAdded | descending |
pub fn compare_episodes(a: &Episode, b: &Episode, sort: SortOption) -> Ordering {
    match sort {
        SortOption::PubDateNewest => descending_missing_last(a.pub_date, b.pub_date),
        SortOption::PubDateOldest => ascending_missing_last(a.pub_date, b.pub_date),
        SortOption::Duration => match (a.duration, b.duration) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortOption::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortOption::PlayStatus => a
            .play_status()
            .ordinal()
            .cmp(&b.play_status().ordinal()),
        SortOption::DownloadStatus => a
            .download_status
            .sort_ordinal()
            .cmp(&b.download_status.sort_ordinal()),
        SortOption::Rating => b.rating.unwrap_or(0).cmp(&a.rating.unwrap_or(0)),
        SortOption::DateAdded => b.date_added.cmp(&a.date_added),
    }
}

fn ascending_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn descending_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort into a new vector.
pub fn sort_episodes(episodes: &[Episode], sort: SortOption) -> Vec<Episode> {
    let mut sorted = episodes.to_vec();
    sort_episodes_in_place(&mut sorted, sort);
    sorted
}

pub(crate) fn sort_episodes_in_place(episodes: &mut [Episode], sort: SortOption) {
    episodes.sort_by(|a, b| compare_episodes(a, b, sort));
}
