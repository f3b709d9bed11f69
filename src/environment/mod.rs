//! Host environment detection.
//!
//! Skills are materialized into directories that agent hosts (IDEs and
//! desktop apps) read from. This module finds those directories at project
//! and global scope and picks the default install root.
//!
//! - [`host`] - Host environment types
//! - [`detector`] - Filesystem probing and install root precedence

pub mod detector;
pub mod host;

pub use detector::{find_project_root, HostDetector, PROJECT_MARKERS};
pub use host::{HostEnvironment, HostKind, Scope};
