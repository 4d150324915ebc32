//! Process-backed diff source: shells out to `git diff`.

use log::{debug, warn};

use crate::command::{CommandRunner, SystemRunner};
use crate::diff::DiffSource;
use crate::error::{GitDiffError, Result};
use crate::profiling::Profile;

const GIT: &str = "git";

/// Flags shared by every invocation: no color codes, no external diff drivers.
const PLAIN_OUTPUT: [&str; 2] = ["--no-color", "--no-ext-diff"];

/// Thin wrapper for a subset of the `git diff` command.
///
/// Stateless: every call spawns exactly one process through the runner.
#[derive(Debug, Clone, Default)]
pub struct GitDiffTool<R = SystemRunner> {
  runner: R
}

impl GitDiffTool {
  pub fn new() -> Self {
    Self::default()
  }
}

impl<R: CommandRunner> GitDiffTool<R> {
  pub fn with_runner(runner: R) -> Self {
    Self { runner }
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Runs `git diff <args> --no-color --no-ext-diff` and returns stdout.
  ///
  /// Any output on stderr fails the call, regardless of the exit status.
  fn execute(&self, args: &[&str]) -> Result<String> {
    let mut command = Vec::with_capacity(args.len() + 3);
    command.push(GIT);
    command.push("diff");
    command.extend_from_slice(args);
    command.extend_from_slice(&PLAIN_OUTPUT);

    let _profile = Profile::new(command.join(" "));
    debug!("[git diff] Command: {:?}", command);

    let output = self.runner.execute(&command).map_err(|err| {
      warn!("[git diff] Could not run {}: {}", GIT, err);
      GitDiffError::from(err)
    })?;

    if !output.stderr.is_empty() {
      warn!("[git diff] stderr: {}", output.stderr.trim_end());
      return Err(GitDiffError::new(output.stderr));
    }

    debug!("[git diff] Captured {} bytes", output.stdout.len());
    Ok(output.stdout)
  }
}

impl<R: CommandRunner> DiffSource for GitDiffTool<R> {
  fn diff_committed(&self, compare_branch: &str) -> Result<String> {
    let range = format!("{}...HEAD", compare_branch);
    self.execute(&[range.as_str()])
  }

  fn diff_unstaged(&self) -> Result<String> {
    self.execute(&[])
  }

  fn diff_staged(&self) -> Result<String> {
    self.execute(&["--cached"])
  }
}
