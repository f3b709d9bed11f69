//! Skill catalog.
//!
//! The catalog is a static list of skill entries loaded from a YAML document
//! with a top-level `skills:` key. It is loaded fresh on every invocation and
//! never mutated; installation state lives in the [`crate::registry`].
//!
//! # Sources
//!
//! 1. An explicit catalog file (`--catalog`, `SKILLIO_CATALOG`, or settings)
//! 2. The catalog embedded in the binary
//!
//! # Example
//!
//! ```
//! use skillio::catalog::Catalog;
//!
//! let catalog = Catalog::from_yaml_str(
//!     "skills:\n  - name: video-downloader\n    description: Download videos\n",
//!     "inline.yaml",
//! )
//! .unwrap();
//! assert!(catalog.get("video-downloader").is_some());
//! ```

pub mod entry;
pub mod loader;

pub use entry::{CatalogEntry, SkillSource};
pub use loader::{Catalog, CategorySummary};
