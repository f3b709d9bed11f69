//! End-to-end tests for the skillio binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = r#"
skills:
  - name: video-downloader
    description: Download videos from YouTube
    capabilities: [download youtube videos]
    scenarios: [I want to download a YouTube video]
    tags: [media]
    quality_score: 9.0
    source:
      type: github
      repo: yt-dlp/yt-dlp
  - name: pdf-toolkit
    description: Work with PDF documents
    capabilities: [merge pdf files]
    tags: [documents]
"#;

/// Isolated home, working directory, catalog and install root.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("work")).unwrap();
        fs::write(temp.path().join("catalog.yaml"), CATALOG).unwrap();
        Self { temp }
    }

    fn skills(&self) -> PathBuf {
        self.temp.path().join("skills")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("skillio"));
        cmd.current_dir(self.temp.path().join("work"))
            .env("HOME", self.temp.path().join("home"))
            .env("SKILLIO_INSTALL_PATH", self.skills())
            .env("SKILLIO_CATALOG", self.temp.path().join("catalog.yaml"))
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("skillio"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("search"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("skillio"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() {
    Command::new(cargo_bin("skillio")).assert().failure();
}

#[test]
fn search_recommends_best_match() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["search", "download youtube videos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("video-downloader"))
        .stdout(predicate::str::contains(
            "Recommended: skillio install video-downloader",
        ));
}

#[test]
fn search_json_is_parseable() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["search", "merge pdf files", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["name"], "pdf-toolkit");
}

#[test]
fn search_without_matches_succeeds() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["search", "zzqqxx"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No skills found"));
}

#[test]
fn install_list_remove_cycle() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["install", "video-downloader", "--no-seekers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed video-downloader"));
    assert!(sandbox
        .skills()
        .join("video-downloader")
        .join("SKILL.md")
        .is_file());

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("video-downloader"))
        .stdout(predicate::str::contains("Total: 1 skills"));

    sandbox
        .cmd()
        .args(["install", "video-downloader", "--no-seekers"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already installed"));

    sandbox
        .cmd()
        .args(["remove", "video-downloader", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed video-downloader"));
    assert!(!sandbox.skills().join("video-downloader").exists());
}

#[test]
fn remove_without_force_is_cancelled_when_not_interactive() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["install", "pdf-toolkit", "--no-seekers"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["remove", "pdf-toolkit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));
    assert!(sandbox.skills().join("pdf-toolkit").exists());
}

#[test]
fn install_unknown_skill_exits_two() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["install", "nope", "--no-seekers"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn install_json_reports_method() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["install", "pdf-toolkit", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["method"], "simple");
}

#[test]
fn info_shows_details() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["info", "video-downloader"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://github.com/yt-dlp/yt-dlp"));
}

#[test]
fn info_unknown_skill_exits_two() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["info", "nope"]).assert().code(2);
}

#[test]
fn remove_not_installed_exits_two() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["remove", "pdf-toolkit", "--force"])
        .assert()
        .code(2);
}

#[test]
fn list_all_shows_catalog() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf-toolkit"))
        .stdout(predicate::str::contains("Total: 2 skills"));
}

#[test]
fn categories_lists_tags() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("documents"))
        .stdout(predicate::str::contains("media"));
}

#[test]
fn environments_lists_standalone() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("environments")
        .assert()
        .success()
        .stdout(predicate::str::contains("standalone"));
}

#[test]
fn completions_mention_binary() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillio"));
}

#[test]
fn quiet_mode_still_prints_json() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["--quiet", "search", "pdf", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}
