//! Install target resolution.

use std::path::{Path, PathBuf};

use crate::environment::{HostDetector, Scope};

/// Chooses the directory skills are installed under.
///
/// Precedence: explicit target, first detected environment in the requested
/// scope, then the detector's default root (override, project Cursor,
/// global Cursor, standalone).
#[derive(Debug, Clone, Copy)]
pub struct TargetResolver<'a> {
    detector: &'a HostDetector,
    override_path: Option<&'a Path>,
}

impl<'a> TargetResolver<'a> {
    pub fn new(detector: &'a HostDetector, override_path: Option<&'a Path>) -> Self {
        Self {
            detector,
            override_path,
        }
    }

    /// Base directory for an install. The skill lives in `<base>/<name>`.
    pub fn resolve(&self, target: Option<&Path>, scope: Option<Scope>) -> PathBuf {
        if let Some(target) = target {
            return target.to_path_buf();
        }

        if let Some(scope) = scope {
            if let Some(env) = self.detector.first_in_scope(scope) {
                tracing::debug!("Using {} environment at {}", env.kind, env.path.display());
                return env.path;
            }
            tracing::debug!("No {} environment detected, using default root", scope);
        }

        self.default_root()
    }

    /// Root used when nothing more specific is asked for.
    pub fn default_root(&self) -> PathBuf {
        self.detector.default_install_root(self.override_path)
    }
}
