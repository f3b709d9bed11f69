//! Install registry.
//!
//! The registry is the single record of which skills are installed, where,
//! and how. It is a JSON document next to the default install root:
//!
//! ```json
//! {"skills": {"video-downloader": {"version": "1.0.0", "path": "...",
//!   "source": {"type": "github", "repo": "yt-dlp/yt-dlp"},
//!   "installed_at": "/home/me/project", "method": "skill-seekers"}}}
//! ```
//!
//! The store is passed explicitly to whoever needs it and is read and
//! written whole at call boundaries. There is no locking; concurrent
//! processes can race.

pub mod store;

pub use store::{InstallMethod, InstallRecord, InstallRegistry, RegistryStore, REGISTRY_FILE};
