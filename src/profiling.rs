use std::io::IsTerminal;
use std::time::{Duration, Instant};

use colored::Colorize;

/// Logs how long a scope took when dropped, at debug level only.
pub struct Profile {
  start: Instant,
  name:  String
}

impl Profile {
  pub fn new(name: impl Into<String>) -> Self {
    Self { start: Instant::now(), name: name.into() }
  }

  pub fn elapsed(&self) -> Duration {
    self.start.elapsed()
  }

  /// The name, colored only when the log goes to a terminal.
  fn label(&self, colorize: bool) -> String {
    if colorize {
      self.name.blue().to_string()
    } else {
      self.name.clone()
    }
  }
}

impl Drop for Profile {
  fn drop(&mut self) {
    if log::log_enabled!(log::Level::Debug) {
      let label = self.label(std::io::stderr().is_terminal());
      log::debug!("{}: {:.2?}", label, self.elapsed());
    }
  }
}
