use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use diff_tool::config::App;
use diff_tool::{collect_diff, DiffSource, GitDiffTool, ProvidedDiffTool, SystemRunner};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the raw output of `git diff` for committed, staged or unstaged changes")]
struct Cli {
  /// Use the diff in this file instead of running git
  #[clap(long, global = true, value_name = "PATH")]
  diff_file: Option<PathBuf>,

  /// Run git inside this directory
  #[clap(short = 'C', long = "repo", global = true, value_name = "DIR")]
  repo: Option<PathBuf>,

  #[clap(subcommand)]
  command: Cmd
}

#[derive(Subcommand, Debug)]
enum Cmd {
  /// Changes committed on HEAD but not yet in the compare branch
  Committed {
    #[clap(long)]
    compare_branch: Option<String>
  },
  /// Working tree changes that are not staged
  Unstaged,
  /// Changes staged for the next commit
  Staged,
  /// Committed, staged and unstaged changes, concatenated
  All {
    #[clap(long)]
    compare_branch: Option<String>,

    /// Leave out staged changes
    #[clap(long, overrides_with = "no_ignore_staged")]
    ignore_staged: bool,

    /// Include staged changes even if the config leaves them out
    #[clap(long, overrides_with = "ignore_staged")]
    no_ignore_staged: bool,

    /// Leave out unstaged changes
    #[clap(long, overrides_with = "no_ignore_unstaged")]
    ignore_unstaged: bool,

    /// Include unstaged changes even if the config leaves them out
    #[clap(long, overrides_with = "ignore_unstaged")]
    no_ignore_unstaged: bool
  }
}

fn source(cli: &Cli) -> Result<Box<dyn DiffSource>> {
  if let Some(path) = &cli.diff_file {
    return Ok(Box::new(ProvidedDiffTool::from_file(path)?));
  }

  let runner = match &cli.repo {
    Some(dir) => SystemRunner::in_dir(dir),
    None => SystemRunner::new()
  };

  Ok(Box::new(GitDiffTool::with_runner(runner)))
}

/// `--ignore-x` / `--no-ignore-x` pair as an override, `None` when neither is given.
fn flag(set: bool, unset: bool) -> Option<bool> {
  match (set, unset) {
    (true, _) => Some(true),
    (_, true) => Some(false),
    _ => None
  }
}

fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  let cli = Cli::parse();
  let app = App::new()?;
  let source = source(&cli)?;

  let diff = match &cli.command {
    Cmd::Committed { compare_branch } => {
      let branch = compare_branch.as_deref().unwrap_or(app.compare_branch());
      source.diff_committed(branch)?
    },
    Cmd::Unstaged => source.diff_unstaged()?,
    Cmd::Staged => source.diff_staged()?,
    Cmd::All { compare_branch, ignore_staged, no_ignore_staged, ignore_unstaged, no_ignore_unstaged } => {
      let branch = compare_branch.as_deref().unwrap_or(app.compare_branch());
      let options = app.collect_options_with(
        flag(*ignore_staged, *no_ignore_staged),
        flag(*ignore_unstaged, *no_ignore_unstaged)
      );
      collect_diff(&source, branch, options)?
    }
  };

  log::info!("Writing {} bytes of diff output", diff.len());

  let mut stdout = std::io::stdout().lock();
  stdout.write_all(diff.as_bytes()).context("Failed to write diff to stdout")?;
  stdout.flush().context("Failed to flush stdout")
}
