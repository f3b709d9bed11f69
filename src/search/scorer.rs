//! Lexical relevance scoring.
//!
//! Scores are built from fixed weights:
//!
//! | Signal                               | Weight             |
//! |--------------------------------------|--------------------|
//! | query equals name                    | 10.0 (final)       |
//! | query inside name                    | +5.0               |
//! | query inside description (each)      | +2.0               |
//! | word overlap with each capability    | +1.5 per word      |
//! | word overlap with each scenario      | +1.0 per word      |
//! | tag hit                              | +0.5 per tag       |
//!
//! The sum is scaled by the entry's quality (±25% around 5.0) and rounded
//! to two decimals.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::catalog::CatalogEntry;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

const EXACT_NAME: f64 = 10.0;
const NAME_CONTAINS: f64 = 5.0;
const DESCRIPTION_CONTAINS: f64 = 2.0;
const CAPABILITY_WORD: f64 = 1.5;
const SCENARIO_WORD: f64 = 1.0;
const TAG_HIT: f64 = 0.5;
const QUALITY_MIDPOINT: f64 = 5.0;

/// How the query should be interpreted.
///
/// Both modes currently share one formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Natural-language intent ("I want to download videos").
    #[default]
    Intent,
    /// Plain keywords ("video").
    Keyword,
}

/// Split text into a set of lower-cased word tokens.
pub fn tokenize(text: &str) -> HashSet<String> {
    WORD_REGEX
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Score one catalog entry against a query. Always `>= 0`.
pub fn score(entry: &CatalogEntry, query: &str, mode: MatchMode) -> f64 {
    let _ = mode;
    let query_lower = query.to_lowercase();
    let name_lower = entry.name.to_lowercase();

    if name_lower == query_lower {
        return EXACT_NAME;
    }

    let mut total = 0.0;

    if name_lower.contains(&query_lower) {
        total += NAME_CONTAINS;
    }

    if entry.description.to_lowercase().contains(&query_lower) {
        total += DESCRIPTION_CONTAINS;
    }
    if let Some(localized) = &entry.description_localized {
        if localized.to_lowercase().contains(&query_lower) {
            total += DESCRIPTION_CONTAINS;
        }
    }

    let query_words = tokenize(&query_lower);

    total += entry
        .capabilities
        .iter()
        .map(|cap| overlap(&query_words, cap) as f64 * CAPABILITY_WORD)
        .sum::<f64>();

    total += entry
        .scenarios
        .iter()
        .map(|s| overlap(&query_words, s) as f64 * SCENARIO_WORD)
        .sum::<f64>();

    for tag in &entry.tags {
        let tag = tag.to_lowercase();
        if tag.contains(&query_lower) || query_words.iter().any(|w| tag.contains(w.as_str())) {
            total += TAG_HIT;
        }
    }

    let quality = entry.quality_score.clamp(0.0, 10.0);
    total *= 1.0 + (quality - QUALITY_MIDPOINT) / 20.0;

    round2(total)
}

fn overlap(query_words: &HashSet<String>, phrase: &str) -> usize {
    tokenize(phrase).intersection(query_words).count()
}

/// Round half-even on the exact decimal value, the way `{:.2}` formats it.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
