//! Grammar checking port
//!
//! The grammar service is an external collaborator. Everything the rest of
//! the crate needs from it goes through [`GrammarChecker`], so the
//! proofreading flow can be exercised without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod languagetool;

pub use languagetool::{ClientConfig, LanguageToolClient};

/// Shown when a match carries no replacements
pub const NO_SUGGESTIONS: &str = "No suggestions available";

#[derive(Error, Debug)]
pub enum GrammarError {
  #[error("request to grammar service failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("grammar service returned HTTP {status}: {body}")]
  Status { status: u16, body: String },

  #[error("failed to parse grammar service response: {message}")]
  Parse { message: String },
}

impl GrammarError {
  pub fn status(status: u16, body: impl Into<String>) -> Self {
    Self::Status { status, body: body.into() }
  }

  pub fn parse(message: impl Into<String>) -> Self {
    Self::Parse { message: message.into() }
  }
}

/// A proposed replacement for a flagged span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
  pub value: String,
}

/// One issue reported by the grammar service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarMatch {
  pub message: String,
  /// Start of the flagged span, in UTF-16 code units
  pub offset: usize,
  /// Length of the flagged span, in UTF-16 code units
  pub length: usize,
  #[serde(default)]
  pub replacements: Vec<Replacement>,
}

/// Body of a check response. Only `matches` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckResponse {
  pub matches: Vec<GrammarMatch>,
}

/// Input text split around a flagged span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
  pub before: String,
  pub issue: String,
  pub after: String,
}

impl GrammarMatch {
  /// Up to `limit` replacement values, in service order
  pub fn suggestions(&self, limit: usize) -> Vec<String> {
    self.replacements.iter().take(limit).map(|r| r.value.clone()).collect()
  }

  /// Split `text` around this match's span.
  ///
  /// Offsets past the end of the text clamp to it.
  pub fn context(&self, text: &str) -> Context {
    let start = byte_index(text, self.offset);
    let end = byte_index(text, self.offset.saturating_add(self.length));

    Context {
      before: text[..start].to_string(),
      issue: text[start..end].to_string(),
      after: text[end..].to_string(),
    }
  }
}

/// Join suggestions for display, falling back to [`NO_SUGGESTIONS`]
pub fn format_suggestions(suggestions: &[String]) -> String {
  if suggestions.is_empty() {
    NO_SUGGESTIONS.to_string()
  } else {
    suggestions.join(", ")
  }
}

/// Byte index of the first char boundary at or after `utf16_offset` code units
fn byte_index(text: &str, utf16_offset: usize) -> usize {
  let mut units = 0;
  for (index, ch) in text.char_indices() {
    if units >= utf16_offset {
      return index;
    }
    units += ch.len_utf16();
  }
  text.len()
}

/// Anything that can check text for grammar and spelling issues
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrammarChecker: Send + Sync {
  async fn check(&self, text: &str, language: &str) -> Result<Vec<GrammarMatch>, GrammarError>;
}

#[cfg(test)]
mod tests {
  use super::*;

  fn grammar_match(offset: usize, length: usize, replacements: &[&str]) -> GrammarMatch {
    GrammarMatch {
      message: "Possible spelling mistake found.".to_string(),
      offset,
      length,
      replacements: replacements.iter().map(|v| Replacement { value: v.to_string() }).collect(),
    }
  }

  #[test]
  fn test_suggestions_capped() {
    let m = grammar_match(0, 1, &["a", "b", "c", "d", "e"]);
    assert_eq!(m.suggestions(3), vec!["a", "b", "c"]);
    assert_eq!(format_suggestions(&m.suggestions(3)), "a, b, c");
  }

  #[test]
  fn test_no_suggestions() {
    let m = grammar_match(0, 1, &[]);
    assert!(m.suggestions(3).is_empty());
    assert_eq!(format_suggestions(&m.suggestions(3)), NO_SUGGESTIONS);
  }

  #[test]
  fn test_context_ascii() {
    let m = grammar_match(4, 5, &[]);
    let context = m.context("The quikc fox");
    assert_eq!(context.before, "The ");
    assert_eq!(context.issue, "quikc");
    assert_eq!(context.after, " fox");
  }

  #[test]
  fn test_context_counts_utf16_units() {
    // "é" is one UTF-16 unit but two bytes; the emoji is two units and four bytes
    let text = "café 😀 teh end";
    let m = grammar_match(8, 3, &["the"]);
    let context = m.context(text);
    assert_eq!(context.before, "café 😀 ");
    assert_eq!(context.issue, "teh");
    assert_eq!(context.after, " end");
  }

  #[test]
  fn test_context_out_of_range_clamps() {
    let m = grammar_match(10, 4, &[]);
    let context = m.context("short");
    assert_eq!(context.before, "short");
    assert_eq!(context.issue, "");
    assert_eq!(context.after, "");

    let m = grammar_match(2, 100, &[]);
    let context = m.context("short");
    assert_eq!(context.before, "sh");
    assert_eq!(context.issue, "ort");
    assert_eq!(context.after, "");
  }

  #[test]
  fn test_deserialize_match_ignores_extra_fields() {
    let json = r#"{
      "matches": [{
        "message": "Use \"an\" instead of \"a\".",
        "shortMessage": "Wrong article",
        "offset": 8,
        "length": 1,
        "replacements": [{"value": "an"}],
        "rule": {"id": "EN_A_VS_AN"}
      }, {
        "message": "Missing replacements field",
        "offset": 0,
        "length": 2
      }],
      "language": {"code": "en-US"}
    }"#;

    let response: CheckResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.matches.len(), 2);
    assert_eq!(response.matches[0].suggestions(3), vec!["an"]);
    assert!(response.matches[1].replacements.is_empty());
  }
}
