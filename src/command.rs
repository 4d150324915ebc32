//! Running external commands and capturing both output streams.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::io;

use log::debug;

use crate::diff::Utf8String;

/// Captured, decoded output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  pub stdout: String,
  pub stderr: String
}

impl CommandOutput {
  pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
    Self { stdout: stdout.into(), stderr: stderr.into() }
  }
}

/// Executes a command given as `[program, args...]` and returns its output.
///
/// Implementations block until the process has exited and both streams are
/// drained. The exit status is not part of the contract.
pub trait CommandRunner {
  fn execute(&self, command: &[&str]) -> io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
  fn execute(&self, command: &[&str]) -> io::Result<CommandOutput> {
    (**self).execute(command)
  }
}

/// Spawns real processes with [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
  current_dir: Option<PathBuf>
}

impl SystemRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Runs every command inside `dir` instead of the current directory.
  pub fn in_dir(dir: impl AsRef<Path>) -> Self {
    Self { current_dir: Some(dir.as_ref().to_path_buf()) }
  }
}

impl CommandRunner for SystemRunner {
  fn execute(&self, command: &[&str]) -> io::Result<CommandOutput> {
    let (program, args) = command
      .split_first()
      .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    crate::profile!("Execute command");
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());

    if let Some(dir) = &self.current_dir {
      cmd.current_dir(dir);
    }

    debug!("[execute] Running {:?}", command);
    let output = cmd.output()?;
    debug!("[execute] {} exited with {}", program, output.status);

    Ok(CommandOutput {
      stdout: output.stdout.to_utf8(),
      stderr: output.stderr.to_utf8()
    })
  }
}
