#[macro_export]
macro_rules! profile {
  ($name:expr) => {
    let _span = tracing::span!(tracing::Level::DEBUG, $name);
    let _enter = _span.enter();
  };
}

pub mod command;
pub mod config;
pub mod diff;
pub mod error;
pub mod profiling;

// Re-exports
pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use diff::{collect_diff, CollectOptions, DiffSource, GitDiffTool, ProvidedDiffTool, DEFAULT_COMPARE_BRANCH};
pub use error::GitDiffError;
pub use profiling::Profile;
