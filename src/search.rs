//! Score combination and result assembly.
//!
//! The combiner walks terms left to right, accumulating a running total.
//! `operators[i]` applies to **`terms[i]`'s own score** — not to the pair of
//! adjacent terms as in a classic infix evaluator. This positional pairing is
//! deliberate and load-bearing: a leading `OR` therefore applies to the first
//! term, and `a AND b` gates on `a`'s score (index 0), adding `b`
//! unconditionally (index 1 has no operator). The behavior is pinned by tests;
//! don't "fix" it toward a binary operand tree.
//!
//! Per-term rules against the running total:
//! - `AND`: term score of zero fails the whole query, otherwise add;
//! - `OR`: total becomes the max of total and term score;
//! - `NOT`: a positive term score fails the whole query;
//! - no operator: index 0 with zero score fails, otherwise add
//!   unconditionally.
//!
//! An episode is included only when the final total is positive.

use crate::query::{QueryOperator, SearchQuery};
use crate::scoring::score_term;
use crate::text::char_slice;
use crate::types::{Episode, Highlight, SearchResult};

/// Half-width, in characters, of the context snippet window.
const SNIPPET_RADIUS: usize = 75;

/// Run a structured query over a collection, ranked by relevance descending.
pub fn search_query(episodes: &[Episode], query: &SearchQuery) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = episodes
        .iter()
        .filter_map(|episode| evaluate_episode(episode, query))
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

/// Score a single episode against a query, or `None` when it fails.
pub fn evaluate_episode(episode: &Episode, query: &SearchQuery) -> Option<SearchResult> {
    let mut total = 0.0;
    let mut highlights: Vec<Highlight> = Vec::new();

    for (i, term) in query.terms.iter().enumerate() {
        let (score, term_highlights) = score_term(episode, term);

        if let Some(operator) = query.operators.get(i) {
            match operator {
                QueryOperator::And => {
                    if score == 0.0 {
                        return None;
                    }
                    total += score;
                }
                QueryOperator::Or => total = total.max(score),
                QueryOperator::Not => {
                    if score > 0.0 {
                        return None;
                    }
                }
            }
        } else {
            if i == 0 && score == 0.0 {
                return None;
            }
            total += score;
        }

        // Highlights from negated terms mark text the query excluded; keep
        // only the spans the user actually searched for.
        if !term.is_negated {
            highlights.extend(term_highlights);
        }
    }

    if total <= 0.0 {
        return None;
    }

    let snippet = make_snippet(&highlights);
    Some(SearchResult {
        episode: episode.clone(),
        score: total,
        highlights,
        snippet,
    })
}

/// Context window around the highest-weight-field highlight.
///
/// Takes ±[`SNIPPET_RADIUS`] characters around the match range, clamped to
/// the text, with `...` on each truncated side.
fn make_snippet(highlights: &[Highlight]) -> Option<String> {
    let best = highlights.iter().fold(None::<&Highlight>, |best, h| {
        match best {
            Some(b) if b.field.weight() >= h.field.weight() => Some(b),
            _ => Some(h),
        }
    })?;

    let text_len = best.text.chars().count();
    let window_start = best.start.saturating_sub(SNIPPET_RADIUS);
    let window_end = (best.end + SNIPPET_RADIUS).min(text_len);

    let mut snippet = String::new();
    if window_start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&char_slice(&best.text, window_start, window_end));
    if window_end < text_len {
        snippet.push_str("...");
    }
    Some(snippet)
}
