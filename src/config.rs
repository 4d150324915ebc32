use std::path::{Path, PathBuf};

use serde::Deserialize;
use config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use lazy_static::lazy_static;

use crate::diff::{CollectOptions, DEFAULT_COMPARE_BRANCH};

const ENV_PREFIX: &str = "GIT_DIFF_TOOL";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct App {
  pub compare_branch:  Option<String>,
  pub ignore_staged:   Option<bool>,
  pub ignore_unstaged: Option<bool>
}

#[derive(Debug)]
pub struct ConfigPaths {
  pub file: PathBuf
}

lazy_static! {
  pub static ref PATHS: Option<ConfigPaths> = ConfigPaths::new();
}

impl ConfigPaths {
  /// `~/.config/git-diff-tool/config.ini`, if a home directory is known.
  fn new() -> Option<Self> {
    let file = home::home_dir()?.join(".config/git-diff-tool/config.ini");
    Some(Self { file })
  }
}

impl App {
  /// Loads defaults, then the user config file, then `GIT_DIFF_TOOL_*` variables.
  ///
  /// Variables from a `.env` file only count if the caller loaded it first.
  pub fn new() -> Result<Self> {
    Self::load(PATHS.as_ref().map(|paths| paths.file.as_path()))
  }

  /// Like [`App::new`] with an explicit config file, which may be missing.
  pub fn load(file: Option<&Path>) -> Result<Self> {
    let mut builder = Config::builder()
      .set_default("compare_branch", DEFAULT_COMPARE_BRANCH)?
      .set_default("ignore_staged", false)?
      .set_default("ignore_unstaged", false)?;

    if let Some(file) = file {
      log::debug!("[config] Reading {}", file.display());
      builder = builder.add_source(File::new(file.to_string_lossy().as_ref(), FileFormat::Ini).required(false));
    }

    builder
      .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
      .build()?
      .try_deserialize()
      .with_context(|| format!("Failed to deserialize config (file: {:?})", file))
  }

  pub fn compare_branch(&self) -> &str {
    self.compare_branch.as_deref().unwrap_or(DEFAULT_COMPARE_BRANCH)
  }

  pub fn collect_options(&self) -> CollectOptions {
    self.collect_options_with(None, None)
  }

  /// Configured options, with `Some(..)` values taking precedence.
  pub fn collect_options_with(&self, ignore_staged: Option<bool>, ignore_unstaged: Option<bool>) -> CollectOptions {
    CollectOptions {
      ignore_staged:   ignore_staged.or(self.ignore_staged).unwrap_or(false),
      ignore_unstaged: ignore_unstaged.or(self.ignore_unstaged).unwrap_or(false)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_without_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = App::load(Some(&dir.path().join("missing.ini"))).unwrap();
    assert_eq!(app.compare_branch(), "origin/master");
    assert_eq!(app.collect_options(), CollectOptions::default());
  }

  #[test]
  fn test_reads_ini_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("config.ini");
    std::fs::write(&file, "compare_branch = upstream/main\nignore_unstaged = true\n").unwrap();

    let app = App::load(Some(&file)).unwrap();
    assert_eq!(app.compare_branch(), "upstream/main");
    assert_eq!(app.collect_options(), CollectOptions { ignore_staged: false, ignore_unstaged: true });
  }

  #[test]
  fn test_explicit_options_override_config() {
    let app = App { ignore_staged: Some(true), ignore_unstaged: Some(true), ..App::default() };
    assert_eq!(app.collect_options_with(None, None), CollectOptions { ignore_staged: true, ignore_unstaged: true });
    assert_eq!(app.collect_options_with(Some(false), None), CollectOptions {
      ignore_staged:   false,
      ignore_unstaged: true
    });
    assert_eq!(App::default().collect_options_with(None, Some(true)), CollectOptions {
      ignore_staged:   false,
      ignore_unstaged: true
    });
  }

  #[test]
  fn test_empty_app_falls_back_to_default_branch() {
    assert_eq!(App::default().compare_branch(), DEFAULT_COMPARE_BRANCH);
  }
}
