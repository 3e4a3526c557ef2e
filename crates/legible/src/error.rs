use thiserror::Error;

use crate::grammar::GrammarError;

/// Errors surfaced to the user. Each message already embeds its cause, so
/// variants carry no `source` and error chains print once.
#[derive(Error, Debug)]
pub enum LegibleError {
  #[error("Please enter some text to proofread.")]
  EmptyInput,

  #[error("Error analyzing text: {0}")]
  Grammar(GrammarError),

  #[error("I/O error: {0}")]
  Io(std::io::Error),

  #[error("Invalid config file {path}: {message}")]
  Config { path: String, message: String },
}

impl LegibleError {
  pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Config { path: path.into(), message: message.into() }
  }
}

impl From<GrammarError> for LegibleError {
  fn from(err: GrammarError) -> Self {
    Self::Grammar(err)
  }
}

impl From<std::io::Error> for LegibleError {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}

pub type Result<T> = std::result::Result<T, LegibleError>;
