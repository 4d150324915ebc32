//! Error type for the diff sources.
//!
//! Every failure of the process-backed source collapses into [`GitDiffError`]:
//! a missing `git` binary, a crash and a warning printed to stderr all look
//! the same to the caller.

use thiserror::Error;

/// `git diff` reported a problem, either on stderr or by failing to run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("git diff failed: {message}")]
pub struct GitDiffError {
  message: String
}

impl GitDiffError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }

  /// The stderr text of the tool, or the spawn failure description.
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl From<std::io::Error> for GitDiffError {
  fn from(err: std::io::Error) -> Self {
    GitDiffError::new(err.to_string())
  }
}

pub type Result<T, E = GitDiffError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use std::io;

  use super::*;

  #[test]
  fn test_display_includes_stderr() {
    let error = GitDiffError::new("fatal: bad revision 'origin/master...HEAD'");
    assert_eq!(error.to_string(), "git diff failed: fatal: bad revision 'origin/master...HEAD'");
    assert_eq!(error.message(), "fatal: bad revision 'origin/master...HEAD'");
  }

  #[test]
  fn test_io_error_collapses_into_same_kind() {
    let error: GitDiffError = io::Error::new(io::ErrorKind::NotFound, "program not found").into();
    assert_eq!(error, GitDiffError::new("program not found"));
  }
}
