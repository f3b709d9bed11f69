//! Subprocess execution.
//!
//! Commands are spawned directly (no shell) with captured output. When a
//! timeout is set the child is waited on for at most that long, then killed.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use wait_timeout::ChildExt;

use crate::error::Result;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed for exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Stderr if present, otherwise stdout.
    pub fn diagnostic_output(&self) -> &str {
        if !self.stderr.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    /// The first `max_chars` characters of the diagnostic output.
    pub fn output_excerpt(&self, max_chars: usize) -> String {
        let output = self.diagnostic_output().trim();
        if output.is_empty() {
            return "Unknown error".to_string();
        }
        output.chars().take(max_chars).collect()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Kill the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Run a program with arguments, capturing its output.
///
/// Returns `Err` only when the process cannot be spawned or waited on;
/// non-zero exits and timeouts are reported in the [`CommandResult`].
pub fn run<P, I, S>(program: P, args: I, options: &CommandOptions) -> Result<CommandResult>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let start = Instant::now();

    let mut cmd = Command::new(program.as_ref());
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Spawning {}", program.as_ref().to_string_lossy());
    let mut child = cmd.spawn()?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_handle = thread::spawn(move || read_pipe(stdout));
    let stderr_handle = thread::spawn(move || read_pipe(stderr));

    let status = match options.timeout {
        Some(limit) => match child.wait_timeout(limit)? {
            Some(status) => Some(status),
            None => {
                let _ = child.kill();
                let _ = child.wait();
                None
            }
        },
        None => Some(child.wait()?),
    };

    let duration = start.elapsed();

    let Some(status) = status else {
        // Readers are left detached: grandchildren may still hold the pipes.
        tracing::warn!(
            "{} killed after {:?}",
            program.as_ref().to_string_lossy(),
            duration
        );
        return Ok(CommandResult {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        });
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
        timed_out: false,
    })
}

fn read_pipe<R: Read>(pipe: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(stdout: &str, stderr: &str) -> CommandResult {
        CommandResult {
            exit_code: Some(1),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration: Duration::ZERO,
            success: false,
            timed_out: false,
        }
    }

    #[test]
    fn excerpt_prefers_stderr() {
        let result = result_with("out", "rate limited");
        assert_eq!(result.output_excerpt(200), "rate limited");
    }

    #[test]
    fn excerpt_truncates() {
        let result = result_with(&"x".repeat(500), "");
        assert_eq!(result.output_excerpt(200).chars().count(), 200);
    }

    #[test]
    fn excerpt_of_empty_output() {
        assert_eq!(result_with("", "  ").output_excerpt(200), "Unknown error");
    }

    #[test]
    fn spawn_failure_is_error() {
        let result = run(
            "skillio-definitely-not-a-real-program",
            Vec::<String>::new(),
            &CommandOptions::default(),
        );
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let result = run("sh", ["-c", "echo hello; exit 3"], &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stdout.contains("hello"));
        assert!(!result.timed_out);
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let result = run("sh", ["-c", "touch marker"], &options).unwrap();

        assert!(result.success);
        assert!(temp.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn kills_on_timeout() {
        let options = CommandOptions {
            timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };

        let result = run("sleep", ["5"], &options).unwrap();

        assert!(result.timed_out);
        assert!(!result.success);
        assert!(result.duration < Duration::from_secs(5));
    }
}
