//! Proofreading flow
//!
//! Runs a grammar check through the injected [`GrammarChecker`], turns the
//! matches into displayable issues, then scores readability locally.

use serde::Serialize;

use crate::error::{LegibleError, Result};
use crate::grammar::{Context, GrammarChecker, GrammarMatch};
use crate::scoring::{analyze_readability, ReadabilityResult};

/// Settings for a proofreading run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofreadOptions {
  pub language: String,
  pub max_suggestions: usize,
}

impl Default for ProofreadOptions {
  fn default() -> Self {
    Self { language: "en-US".to_string(), max_suggestions: 3 }
  }
}

/// A grammar issue ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
  pub message: String,
  pub offset: usize,
  pub length: usize,
  pub suggestions: Vec<String>,
  pub context: Context,
}

impl Issue {
  pub fn from_match(grammar_match: &GrammarMatch, text: &str, max_suggestions: usize) -> Self {
    Self {
      message: grammar_match.message.clone(),
      offset: grammar_match.offset,
      length: grammar_match.length,
      suggestions: grammar_match.suggestions(max_suggestions),
      context: grammar_match.context(text),
    }
  }
}

/// Everything shown for one piece of text.
///
/// `issues` is `None` when no grammar check was run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofreadReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issues: Option<Vec<Issue>>,
  pub readability: ReadabilityResult,
}

impl ProofreadReport {
  /// Report with readability only, no grammar section
  pub fn readability_only(text: &str) -> Self {
    Self { issues: None, readability: analyze_readability(text) }
  }

  pub fn issue_count(&self) -> usize {
    self.issues.as_ref().map_or(0, Vec::len)
  }
}

pub struct Proofreader<C: GrammarChecker> {
  checker: C,
  options: ProofreadOptions,
}

impl<C: GrammarChecker> Proofreader<C> {
  pub fn new(checker: C, options: ProofreadOptions) -> Self {
    Self { checker, options }
  }

  /// Check `text` for grammar issues and score its readability.
  ///
  /// Blank text is rejected before any request is made.
  pub async fn proofread(&self, text: &str) -> Result<ProofreadReport> {
    if text.trim().is_empty() {
      return Err(LegibleError::EmptyInput);
    }

    let matches = self.checker.check(text, &self.options.language).await?;
    tracing::info!(issues = matches.len(), language = %self.options.language, "grammar check finished");

    let issues = matches
      .iter()
      .map(|m| Issue::from_match(m, text, self.options.max_suggestions))
      .collect();

    Ok(ProofreadReport { issues: Some(issues), readability: analyze_readability(text) })
  }
}
