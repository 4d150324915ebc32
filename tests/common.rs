#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tempfile::TempDir;

/// A throwaway git repository driven through the `git` binary.
pub struct TestRepo {
  dir: TempDir
}

impl TestRepo {
  /// Initializes a repository with one commit and a `base` branch pointing at it.
  ///
  /// Returns `None` when `git` is not installed.
  pub fn new() -> Option<Self> {
    if !git_available() {
      eprintln!("git not found on PATH, skipping");
      return None;
    }

    let repo = TestRepo { dir: TempDir::new().expect("Could not create temp dir") };
    repo.git(&["init", "-q"]).expect("Could not init repo");
    repo.write_file("README.md", "# test\n");
    repo.stage_file("README.md").expect("Could not stage README.md");
    repo.commit("Initial commit").expect("Could not commit");
    repo.git(&["branch", "base"]).expect("Could not create base branch");
    Some(repo)
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  pub fn write_file(&self, name: &str, content: &str) {
    std::fs::write(self.path().join(name), content).expect("Could not write file");
  }

  pub fn stage_file(&self, name: &str) -> Result<String> {
    self.git(&["add", name])
  }

  pub fn commit(&self, message: &str) -> Result<String> {
    self.git(&["commit", "-q", "-m", message])
  }

  pub fn git(&self, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
      .args(["-c", "user.name=Test", "-c", "user.email=test@example.com", "-c", "commit.gpgsign=false"])
      .args(args)
      .env("OVERCOMMIT_DISABLE", "1")
      .current_dir(self.path())
      .output()
      .context("Could not run git command")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      bail!("Git command failed: {}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
  }
}

pub fn git_available() -> bool {
  Command::new("git").arg("--version").output().map(|o| o.status.success()).unwrap_or(false)
}

pub fn setup() {
  _ = env_logger::builder().is_test(true).try_init();
}
