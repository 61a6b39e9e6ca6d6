//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::types::{DownloadStatus, Episode};

/// Create a test episode with sensible defaults.
///
/// This is the canonical fixture used across all tests: unplayed, not
/// downloaded, published March 1 2024, 30 minutes long.
pub fn make_episode(id: &str, title: &str) -> Episode {
    Episode {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("Description for {}", title)),
        podcast_title: "Test Podcast".to_string(),
        pub_date: Some(utc(2024, 3, 1)),
        duration: Some(1800.0),
        is_played: false,
        download_status: DownloadStatus::NotDownloaded,
        is_favorited: false,
        is_bookmarked: false,
        is_archived: false,
        rating: None,
        playback_position: 0.0,
        date_added: utc(2024, 3, 2),
    }
}

/// Midnight UTC on the given date. Panics on invalid dates (tests only).
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc_at(year, month, day, 0, 0, 0)
}

/// A specific UTC instant. Panics on invalid components (tests only).
pub fn utc_at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
    let time = NaiveTime::from_hms_opt(hour, min, sec).expect("valid test time");
    date.and_time(time).and_utc()
}
