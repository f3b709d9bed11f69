//! Catalog search.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry, CategorySummary};

use super::scorer::{score, MatchMode};

/// Options for [`SearchEngine::search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub mode: MatchMode,
    /// Maximum number of results.
    pub limit: usize,
    /// Results scoring below this are dropped.
    pub min_score: f64,
}

impl SearchOptions {
    pub const DEFAULT_LIMIT: usize = 5;
    pub const DEFAULT_MIN_SCORE: f64 = 0.5;

    /// Default options with a different result limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Intent,
            limit: Self::DEFAULT_LIMIT,
            min_score: Self::DEFAULT_MIN_SCORE,
        }
    }
}

/// A catalog entry paired with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub match_score: f64,
}

/// Full-scan search over a loaded catalog.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Rank catalog entries against a query.
    ///
    /// Results are sorted by descending score; equal scores keep catalog
    /// order. An empty catalog or no match yields an empty list.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let match_score = score(entry, query, options.mode);
                (match_score >= options.min_score).then(|| MatchResult {
                    entry: entry.clone(),
                    match_score,
                })
            })
            .collect();

        // sort_by is stable, so ties keep catalog order
        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(options.limit);

        tracing::debug!(
            "Search '{}' matched {} entries (limit {})",
            query,
            results.len(),
            options.limit
        );
        results
    }

    /// Look up an entry by exact name.
    pub fn info(&self, name: &str) -> Option<&'a CatalogEntry> {
        self.catalog.get(name)
    }

    /// List all entries, optionally restricted to one category.
    pub fn list(&self, category: Option<&str>) -> Vec<&'a CatalogEntry> {
        self.catalog.filter_by_tag(category)
    }

    /// Tag aggregation, sorted by tag name.
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.catalog.categories()
    }
}
