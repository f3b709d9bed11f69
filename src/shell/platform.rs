//! Platform detection.

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI with a custom env var lookup (for testing).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    [
        "CI",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "TRAVIS",
        "JENKINS_URL",
    ]
    .iter()
    .any(|var| env_fn(var).is_ok())
}
