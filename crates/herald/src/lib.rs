//! ## Features
//!
//! - Leveled status lines (info, warn, error, debug, success) on stderr
//! - Multi-line message support with a consistent prefix per line
//! - One-call `tracing` subscriber setup for binaries
//!
//! Status lines are meant for people watching the terminal. Library code
//! should emit `tracing` events instead and let [`init`] decide what shows.

use colored::*;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Info,
  Warn,
  Error,
  Debug,
  Success,
}

impl Level {
  pub fn tag(&self) -> &'static str {
    match self {
      Level::Info => "info",
      Level::Warn => "warn",
      Level::Error => "error",
      Level::Debug => "debug",
      Level::Success => "sccs",
    }
  }

  fn color(&self) -> Color {
    match self {
      Level::Info => Color::Blue,
      Level::Warn => Color::Yellow,
      Level::Error => Color::Red,
      Level::Debug => Color::Magenta,
      Level::Success => Color::Green,
    }
  }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
  if verbose {
    "legible=debug,herald=debug,warn"
  } else {
    "warn"
  }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init();
}

/// Format the colored `[tag]` prefix, padded so messages line up
fn format_prefix(level: Level) -> String {
  let tag = level.tag();
  format!("[{}]{:<width$}", tag.color(level.color()).bold(), "", width = 7 - tag.len() - 2)
}

/// Prefix every line of `message` for the given level
pub fn format_lines(level: Level, message: &str) -> Vec<String> {
  let prefix = format_prefix(level);
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

/// Write a message to stderr, one prefixed line per input line
pub fn log(level: Level, message: &str) {
  for line in format_lines(level, message) {
    eprintln!("{line}");
  }
}

/// General information
pub fn info(message: &str) {
  log(Level::Info, message);
}

/// Something needs attention
pub fn warn(message: &str) {
  log(Level::Warn, message);
}

/// Something went wrong
pub fn error(message: &str) {
  log(Level::Error, message);
}

/// Diagnostic detail
pub fn debug(message: &str) {
  log(Level::Debug, message);
}

/// Something completed successfully
pub fn success(message: &str) {
  log(Level::Success, message);
}

/// Macros for coverage-excluded logging - these expand with LCOV_EXCL_LINE at call sites
#[macro_export]
macro_rules! info {
  ($msg:expr) => {
    $crate::info($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! warn {
  ($msg:expr) => {
    $crate::warn($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! error {
  ($msg:expr) => {
    $crate::error($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! debug {
  ($msg:expr) => {
    $crate::debug($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! success {
  ($msg:expr) => {
    $crate::success($msg); // LCOV_EXCL_LINE
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_lines_prefixes_every_line() {
    colored::control::set_override(false);
    let lines = format_lines(Level::Info, "first\nsecond");
    assert_eq!(lines, vec!["[info]  first", "[info]  second"]);
  }

  #[test]
  fn test_tags_fit_prefix_width() {
    for level in [Level::Info, Level::Warn, Level::Error, Level::Debug, Level::Success] {
      assert!(level.tag().len() <= 5, "{:?} tag too long", level);
    }
  }

  #[test]
  fn test_default_filter() {
    assert_eq!(default_filter(false), "warn");
    assert!(default_filter(true).contains("legible=debug"));
  }
}
