//! Filesystem probing for host environments.

use std::path::{Path, PathBuf};

use super::host::{HostEnvironment, HostKind, Scope};

/// Directories that mark a project root.
pub const PROJECT_MARKERS: &[&str] = &[".git", ".cursor"];

const CURSOR_DIR: &str = ".cursor";
const WINDSURF_DIR: &str = ".windsurf";
const CONTINUE_DIR: &str = ".continue";
const STANDALONE_DIR: &str = ".skillio";
const SKILLS_DIR: &str = "skills";

/// Find the project root by walking up from `start`.
///
/// Returns the first directory containing one of [`PROJECT_MARKERS`],
/// or None when the filesystem root is reached.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if PROJECT_MARKERS.iter().any(|m| current.join(m).exists()) {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Detects where skills can be installed.
///
/// Holds the working and home directories so detection can be pointed at
/// a sandbox in tests.
///
/// # Example
///
/// ```
/// use skillio::environment::{HostDetector, HostKind};
///
/// let temp = tempfile::TempDir::new().unwrap();
/// let detector = HostDetector::new(temp.path(), temp.path());
/// let envs = detector.detect();
///
/// assert_eq!(envs.last().unwrap().kind, HostKind::Standalone);
/// ```
#[derive(Debug, Clone)]
pub struct HostDetector {
    cwd: PathBuf,
    home: PathBuf,
}

impl HostDetector {
    /// Create a detector rooted at explicit directories.
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: home.into(),
        }
    }

    /// Create a detector for the current process.
    pub fn from_env() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The enclosing project root, if any.
    pub fn project_root(&self) -> Option<PathBuf> {
        find_project_root(&self.cwd)
    }

    /// Skillio's own skills directory.
    pub fn standalone_root(&self) -> PathBuf {
        self.home.join(STANDALONE_DIR).join(SKILLS_DIR)
    }

    /// Detect candidate environments, recommended first.
    ///
    /// The list always ends with the standalone directory.
    pub fn detect(&self) -> Vec<HostEnvironment> {
        let mut envs = Vec::new();

        if let Some(root) = self.project_root() {
            if root.join(CURSOR_DIR).is_dir() {
                envs.push(HostEnvironment::probe(
                    HostKind::Cursor,
                    Scope::Project,
                    root.join(CURSOR_DIR).join(SKILLS_DIR),
                ));
            }
            if root.join(WINDSURF_DIR).is_dir() {
                envs.push(HostEnvironment::probe(
                    HostKind::Windsurf,
                    Scope::Project,
                    root.join(WINDSURF_DIR).join(SKILLS_DIR),
                ));
            }
        }

        if self.home.join(CURSOR_DIR).is_dir() {
            envs.push(HostEnvironment::probe(
                HostKind::Cursor,
                Scope::Global,
                self.home.join(CURSOR_DIR).join(SKILLS_DIR),
            ));
        }

        let claude = self.claude_desktop_dir();
        if claude.is_dir() {
            envs.push(HostEnvironment::probe(
                HostKind::ClaudeDesktop,
                Scope::Global,
                claude.join(SKILLS_DIR),
            ));
        }

        if self.home.join(CONTINUE_DIR).is_dir() {
            envs.push(HostEnvironment::probe(
                HostKind::Continue,
                Scope::Global,
                self.home.join(CONTINUE_DIR).join(SKILLS_DIR),
            ));
        }

        envs.push(HostEnvironment::probe(
            HostKind::Standalone,
            Scope::Global,
            self.standalone_root(),
        ));

        tracing::debug!("Detected {} host environments", envs.len());
        envs
    }

    /// First detected environment with the given scope.
    pub fn first_in_scope(&self, scope: Scope) -> Option<HostEnvironment> {
        self.detect().into_iter().find(|e| e.scope == scope)
    }

    /// Default install root when no target is given.
    ///
    /// Precedence: explicit override, project `.cursor/skills` when the
    /// project uses Cursor, existing `~/.cursor/skills`, standalone.
    pub fn default_install_root(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }

        if let Some(root) = self.project_root() {
            if root.join(CURSOR_DIR).exists() {
                return root.join(CURSOR_DIR).join(SKILLS_DIR);
            }
        }

        let cursor_global = self.home.join(CURSOR_DIR).join(SKILLS_DIR);
        if cursor_global.exists() {
            return cursor_global;
        }

        self.standalone_root()
    }

    fn claude_desktop_dir(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.home
                .join("Library")
                .join("Application Support")
                .join("Claude")
        } else if cfg!(target_os = "windows") {
            self.home.join("AppData").join("Roaming").join("Claude")
        } else {
            self.home.join(".config").join("Claude")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Sandbox {
        _temp: TempDir,
        home: PathBuf,
        project: PathBuf,
    }

    fn sandbox() -> Sandbox {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let project = temp.path().join("work").join("app");
        fs::create_dir_all(&home).unwrap();
        fs::create_dir_all(&project).unwrap();
        Sandbox {
            _temp: temp,
            home,
            project,
        }
    }

    #[test]
    fn find_project_root_walks_up() {
        let sb = sandbox();
        fs::create_dir_all(sb.project.join(".git")).unwrap();
        let nested = sb.project.join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(sb.project.clone()));
    }

    #[test]
    fn find_project_root_accepts_cursor_marker() {
        let sb = sandbox();
        fs::create_dir_all(sb.project.join(".cursor")).unwrap();

        assert_eq!(find_project_root(&sb.project), Some(sb.project.clone()));
    }

    #[test]
    fn bare_directories_only_yield_standalone() {
        let sb = sandbox();
        let detector = HostDetector::new(&sb.project, &sb.home);
        let envs = detector.detect();

        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].kind, HostKind::Standalone);
        assert_eq!(envs[0].path, sb.home.join(".skillio").join("skills"));
        assert!(!envs[0].exists);
    }

    #[test]
    fn project_cursor_is_recommended_first() {
        let sb = sandbox();
        fs::create_dir_all(sb.project.join(".git")).unwrap();
        fs::create_dir_all(sb.project.join(".cursor")).unwrap();
        fs::create_dir_all(sb.home.join(".cursor").join("skills")).unwrap();

        let envs = HostDetector::new(&sb.project, &sb.home).detect();

        assert_eq!(envs[0].kind, HostKind::Cursor);
        assert_eq!(envs[0].scope, Scope::Project);
        assert!(!envs[0].exists);
        assert_eq!(envs[1].kind, HostKind::Cursor);
        assert_eq!(envs[1].scope, Scope::Global);
        assert!(envs[1].exists);
        assert_eq!(envs.last().unwrap().kind, HostKind::Standalone);
    }

    #[test]
    fn project_windsurf_follows_cursor() {
        let sb = sandbox();
        fs::create_dir_all(sb.project.join(".cursor").join("skills")).unwrap();
        fs::create_dir_all(sb.project.join(".windsurf")).unwrap();

        let envs = HostDetector::new(&sb.project, &sb.home).detect();

        assert_eq!(envs[0].kind, HostKind::Cursor);
        assert!(envs[0].exists);
        assert_eq!(envs[1].kind, HostKind::Windsurf);
        assert_eq!(envs[1].scope, Scope::Project);
    }

    #[test]
    fn global_continue_detected_from_parent() {
        let sb = sandbox();
        fs::create_dir_all(sb.home.join(".continue")).unwrap();

        let envs = HostDetector::new(&sb.project, &sb.home).detect();

        assert_eq!(envs[0].kind, HostKind::Continue);
        assert_eq!(envs[0].path, sb.home.join(".continue").join("skills"));
        assert_eq!(envs.len(), 2);
    }

    #[test]
    fn first_in_scope_picks_first_match() {
        let sb = sandbox();
        fs::create_dir_all(sb.project.join(".cursor")).unwrap();
        fs::create_dir_all(sb.home.join(".cursor")).unwrap();
        let detector = HostDetector::new(&sb.project, &sb.home);

        let global = detector.first_in_scope(Scope::Global).unwrap();
        assert_eq!(global.path, sb.home.join(".cursor").join("skills"));

        let project = detector.first_in_scope(Scope::Project).unwrap();
        assert_eq!(project.path, sb.project.join(".cursor").join("skills"));
    }

    #[test]
    fn default_root_prefers_override() {
        let sb = sandbox();
        let detector = HostDetector::new(&sb.project, &sb.home);
        let custom = sb.home.join("custom");

        assert_eq!(detector.default_install_root(Some(&custom)), custom);
    }

    #[test]
    fn default_root_precedence() {
        let sb = sandbox();
        let detector = HostDetector::new(&sb.project, &sb.home);

        assert_eq!(detector.default_install_root(None), detector.standalone_root());

        fs::create_dir_all(sb.home.join(".cursor").join("skills")).unwrap();
        assert_eq!(
            detector.default_install_root(None),
            sb.home.join(".cursor").join("skills")
        );

        fs::create_dir_all(sb.project.join(".cursor")).unwrap();
        assert_eq!(
            detector.default_install_root(None),
            sb.project.join(".cursor").join("skills")
        );
    }
}
