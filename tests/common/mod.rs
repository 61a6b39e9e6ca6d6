//! Shared test utilities and fixtures.

#![allow(dead_code)]

use epiq::{DownloadStatus, Episode};

// Re-export canonical test utilities from epiq::testing
pub use epiq::testing::{make_episode, utc, utc_at};

/// A small varied library: mixed play states, download states, dates,
/// durations, and one archived episode.
pub fn sample_library() -> Vec<Episode> {
    let mut finale = make_episode("finale", "Season Finale Special");
    finale.description = Some("The big season finale, spoiler-free recap".to_string());
    finale.pub_date = Some(utc(2024, 3, 10));
    finale.duration = Some(4200.0);

    let mut news = make_episode("news", "Weekly News Roundup");
    news.description = Some("Short news update".to_string());
    news.pub_date = Some(utc(2024, 3, 12));
    news.duration = Some(900.0);
    news.is_played = true;

    let mut interview = make_episode("interview", "Deep Dive Interview");
    interview.description = Some("A two hour conversation".to_string());
    interview.pub_date = Some(utc(2024, 2, 20));
    interview.duration = Some(7200.0);
    interview.playback_position = 1200.0;
    interview.download_status = DownloadStatus::Downloaded;
    interview.is_favorited = true;
    interview.rating = Some(5);

    let mut undated = make_episode("undated", "Lost Tape");
    undated.pub_date = None;
    undated.duration = None;

    let mut archived = make_episode("archived", "Old Announcement");
    archived.pub_date = Some(utc(2023, 1, 1));
    archived.is_archived = true;

    vec![finale, news, interview, undated, archived]
}
