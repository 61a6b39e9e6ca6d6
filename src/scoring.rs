// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-term, per-field match scoring.
//!
//! A term is scored against each of its target fields (the explicit
//! `field:` target, or the default title/description/podcast triple). Phrase
//! terms require the whole text as one case-insensitive substring and award
//! the field's full exact-match score; fuzzy terms split into whitespace
//! words and award a fraction proportional to how many words were found.
//! Each field score is multiplied by the field weight and summed; negated
//! terms flip the sign of the total.
//!
//! Every match records a [`Highlight`] with char offsets into the source
//! text, so the UI can emphasize spans without re-searching.

use crate::query::SearchTerm;
use crate::text::{char_slice, find_folded, fold_chars};
use crate::types::{Episode, Highlight, SearchField, DEFAULT_SEARCH_FIELDS};
use chrono::{DateTime, Utc};

/// Score one term against one episode, recording highlights as we go.
///
/// Missing optional fields (no description, no duration, no date) simply
/// contribute zero — never an error.
pub fn score_term(episode: &Episode, term: &SearchTerm) -> (f64, Vec<Highlight>) {
    let fields: &[SearchField] = match term.field {
        Some(ref field) => std::slice::from_ref(field),
        None => &DEFAULT_SEARCH_FIELDS,
    };

    let mut score = 0.0;
    let mut highlights = Vec::new();

    for &field in fields {
        let Some(text) = field_text(episode, field) else {
            continue;
        };
        score += score_field(&text, field, term, &mut highlights) * field.weight();
    }

    if term.is_negated {
        score = -score;
    }
    (score, highlights)
}

/// Raw (unweighted) score of a term within a single field.
fn score_field(
    text: &str,
    field: SearchField,
    term: &SearchTerm,
    highlights: &mut Vec<Highlight>,
) -> f64 {
    let haystack = fold_chars(text);

    if term.is_phrase {
        let needle = fold_chars(&term.text);
        let Some(start) = find_folded(&haystack, &needle) else {
            return 0.0;
        };
        let end = start + needle.len();
        highlights.push(make_highlight(text, field, start, end));
        return field.exact_match_score();
    }

    let words: Vec<&str> = term.text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let mut matched_words = 0usize;
    for word in &words {
        let needle = fold_chars(word);
        if let Some(start) = find_folded(&haystack, &needle) {
            let end = start + needle.len();
            highlights.push(make_highlight(text, field, start, end));
            matched_words += 1;
        }
    }

    (matched_words as f64 / words.len() as f64) * field.exact_match_score()
}

fn make_highlight(text: &str, field: SearchField, start: usize, end: usize) -> Highlight {
    Highlight {
        field,
        text: text.to_string(),
        start,
        end,
        matched: char_slice(text, start, end),
    }
}

/// The searchable text of a field, if the episode carries it.
///
/// Duration and date fields search over their display rendering.
pub(crate) fn field_text(episode: &Episode, field: SearchField) -> Option<String> {
    match field {
        SearchField::Title => Some(episode.title.clone()),
        SearchField::Description => episode.description.clone(),
        SearchField::Podcast => Some(episode.podcast_title.clone()),
        SearchField::Duration => episode.duration.map(format_duration),
        SearchField::Date => episode.pub_date.map(format_date),
    }
}

/// Render seconds as `H:MM:SS`, or `M:SS` under an hour.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Render a publish date as `Mar 5, 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
