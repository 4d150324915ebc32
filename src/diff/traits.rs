//! Utility traits for diff sources.

use crate::error::Result;

/// Branch compared against when the caller does not name one.
pub const DEFAULT_COMPARE_BRANCH: &str = "origin/master";

/// A source of raw `git diff` text.
///
/// The returned text is opaque: no parsing happens here.
pub trait DiffSource {
  /// Changes committed on `HEAD` that are not yet in `compare_branch`.
  fn diff_committed(&self, compare_branch: &str) -> Result<String>;

  /// Changes in the working tree that are not staged.
  fn diff_unstaged(&self) -> Result<String>;

  /// Changes staged in the index but not committed.
  fn diff_staged(&self) -> Result<String>;

  /// [`DiffSource::diff_committed`] against [`DEFAULT_COMPARE_BRANCH`].
  fn diff_committed_default(&self) -> Result<String> {
    self.diff_committed(DEFAULT_COMPARE_BRANCH)
  }
}

impl<T: DiffSource + ?Sized> DiffSource for &T {
  fn diff_committed(&self, compare_branch: &str) -> Result<String> {
    (**self).diff_committed(compare_branch)
  }

  fn diff_unstaged(&self) -> Result<String> {
    (**self).diff_unstaged()
  }

  fn diff_staged(&self) -> Result<String> {
    (**self).diff_staged()
  }
}

impl<T: DiffSource + ?Sized> DiffSource for Box<T> {
  fn diff_committed(&self, compare_branch: &str) -> Result<String> {
    (**self).diff_committed(compare_branch)
  }

  fn diff_unstaged(&self) -> Result<String> {
    (**self).diff_unstaged()
  }

  fn diff_staged(&self) -> Result<String> {
    (**self).diff_staged()
  }
}

/// Extension trait for converting bytes to UTF-8 strings
pub trait Utf8String {
  fn to_utf8(&self) -> String;
}

impl Utf8String for Vec<u8> {
  fn to_utf8(&self) -> String {
    self.as_slice().to_utf8()
  }
}

impl Utf8String for [u8] {
  fn to_utf8(&self) -> String {
    // Fast path for valid UTF-8
    if let Ok(s) = std::str::from_utf8(self) {
      return s.to_string();
    }
    String::from_utf8_lossy(self).into_owned()
  }
}
