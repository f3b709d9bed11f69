//! Relevance ranking over the catalog.
//!
//! - [`scorer`] - Deterministic lexical scoring of one entry against a query
//! - [`engine`] - Full-scan search, lookup, and category listing
//!
//! # Example
//!
//! ```
//! use skillio::catalog::{Catalog, CatalogEntry};
//! use skillio::search::{SearchEngine, SearchOptions};
//!
//! let mut entry = CatalogEntry::new("video-downloader", "Download videos");
//! entry.capabilities = vec!["download youtube videos".to_string()];
//! entry.quality_score = 8.0;
//!
//! let catalog = Catalog::from_entries(vec![entry]);
//! let results = SearchEngine::new(&catalog)
//!     .search("I want to download videos", &SearchOptions::default());
//!
//! assert_eq!(results[0].match_score, 3.45);
//! ```

pub mod engine;
pub mod scorer;

pub use engine::{MatchResult, SearchEngine, SearchOptions};
pub use scorer::{score, tokenize, MatchMode};
