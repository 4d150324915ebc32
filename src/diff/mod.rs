//! Diff sources.
//!
//! A [`DiffSource`] hands out the raw text of `git diff` for committed,
//! staged and unstaged changes. [`GitDiffTool`] runs git for it,
//! [`ProvidedDiffTool`] replays text supplied by the caller.

pub mod collect;
pub mod git;
pub mod provided;
pub mod traits;

pub use collect::{collect_diff, CollectOptions};
pub use git::GitDiffTool;
pub use provided::ProvidedDiffTool;
pub use traits::{DiffSource, Utf8String, DEFAULT_COMPARE_BRANCH};
