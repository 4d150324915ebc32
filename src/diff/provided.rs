//! Static diff source returning caller-provided text.

use std::path::Path;

use anyhow::{Context, Result as AnyResult};

use crate::diff::DiffSource;
use crate::error::Result;

/// Like [`GitDiffTool`](crate::diff::GitDiffTool), but answers from a diff
/// supplied up front, e.g. read from a file or a test fixture.
///
/// The committed diff is the provided text whatever branch is asked for;
/// staged and unstaged diffs are always empty. Nothing here can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidedDiffTool {
  diff_committed: String
}

impl ProvidedDiffTool {
  pub fn new(diff: impl Into<String>) -> Self {
    Self { diff_committed: diff.into() }
  }

  /// Reads the provided diff from `path`.
  pub fn from_file(path: impl AsRef<Path>) -> AnyResult<Self> {
    let path = path.as_ref();
    log::debug!("[provided] Reading diff from {}", path.display());
    let diff = std::fs::read_to_string(path).with_context(|| format!("Failed to read diff file {}", path.display()))?;
    Ok(Self::new(diff))
  }
}

impl DiffSource for ProvidedDiffTool {
  fn diff_committed(&self, _compare_branch: &str) -> Result<String> {
    Ok(self.diff_committed.clone())
  }

  fn diff_unstaged(&self) -> Result<String> {
    Ok(String::new())
  }

  fn diff_staged(&self) -> Result<String> {
    Ok(String::new())
  }
}
