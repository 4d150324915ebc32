//! Gathering the full change set of a branch from a [`DiffSource`].

use crate::diff::DiffSource;
use crate::error::Result;

/// Which parts of the change set to leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
  pub ignore_staged:   bool,
  pub ignore_unstaged: bool
}

/// Concatenates the committed, staged and unstaged diffs, in that order.
///
/// Stops at the first failing call. The texts are joined as-is.
pub fn collect_diff<S: DiffSource + ?Sized>(source: &S, compare_branch: &str, options: CollectOptions) -> Result<String> {
  let mut diff = source.diff_committed(compare_branch)?;

  if !options.ignore_staged {
    diff.push_str(&source.diff_staged()?);
  }

  if !options.ignore_unstaged {
    diff.push_str(&source.diff_unstaged()?);
  }

  Ok(diff)
}
