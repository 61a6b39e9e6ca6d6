//! Free-text query parsing.
//!
//! A query is an ordered list of terms plus an ordered list of boolean
//! operators. Operators keep their *positional* index: `operators[i]` is
//! applied to `terms[i]`'s own score by the combiner, not to the gap between
//! `terms[i]` and `terms[i+1]`. See [`crate::search`] for why that matters.
//!
//! Token rules, applied in order:
//! 1. a raw token equal (case-insensitively) to `AND`/`OR`/`NOT` becomes an
//!    operator, never a term;
//! 2. a leading `-` negates the term and is stripped;
//! 3. a recognized `field:` prefix targets the term and is stripped — an
//!    unrecognized prefix stays literal text, not a parse failure;
//! 4. a token fully wrapped in quotes becomes a phrase term (exact substring
//!    match) with the quotes stripped.
//!
//! Whitespace inside quotes does not split tokens, so `"season finale"` is a
//! single phrase token and `-title:"season finale"` composes all three rules.

use serde::{Deserialize, Serialize};

use crate::types::SearchField;

/// Boolean operator recorded at its positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryOperator {
    And,
    Or,
    Not,
}

impl QueryOperator {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_uppercase().as_str() {
            "AND" => Some(QueryOperator::And),
            "OR" => Some(QueryOperator::Or),
            "NOT" => Some(QueryOperator::Not),
            _ => None,
        }
    }
}

/// A single search term: text plus targeting/negation/phrase flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTerm {
    pub text: String,
    #[serde(default)]
    pub field: Option<SearchField>,
    #[serde(default)]
    pub is_negated: bool,
    #[serde(default)]
    pub is_phrase: bool,
}

impl SearchTerm {
    /// Plain unnegated, untargeted, non-phrase term.
    pub fn new(text: impl Into<String>) -> Self {
        SearchTerm {
            text: text.into(),
            field: None,
            is_negated: false,
            is_phrase: false,
        }
    }
}

/// A parsed query: ordered terms and positionally-indexed operators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub terms: Vec<SearchTerm>,
    pub operators: Vec<QueryOperator>,
}

impl SearchQuery {
    /// Parse free text into a structured query.
    ///
    /// Blank input yields empty term and operator lists. Parsing is total:
    /// there is no malformed query, only literal text.
    pub fn parse(input: &str) -> Self {
        let mut terms = Vec::new();
        let mut operators = Vec::new();

        for token in tokenize(input) {
            if let Some(operator) = QueryOperator::from_token(&token) {
                operators.push(operator);
                continue;
            }

            let mut text = token;
            let mut is_negated = false;
            let mut field = None;
            let mut is_phrase = false;

            if let Some(stripped) = text.strip_prefix('-') {
                is_negated = true;
                text = stripped.to_string();
            }

            if let Some(colon) = text.find(':') {
                if let Some(target) = SearchField::from_prefix(&text[..colon]) {
                    field = Some(target);
                    text = text[colon + 1..].to_string();
                }
            }

            if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
                is_phrase = true;
                text = text[1..text.len() - 1].to_string();
            }

            if text.is_empty() {
                continue;
            }

            terms.push(SearchTerm {
                text,
                field,
                is_negated,
                is_phrase,
            });
        }

        SearchQuery { terms, operators }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Split on whitespace outside quoted spans; quotes stay part of the token.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
