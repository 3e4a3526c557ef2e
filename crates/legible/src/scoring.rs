//! Readability scoring
//!
//! Applies the Flesch reading-ease formula to extracted text metrics and
//! maps the result onto a short qualitative comment. Higher is easier.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::metrics::TextMetrics;

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const WORD_LENGTH_WEIGHT: f64 = 84.6;

/// Score reported when there is nothing to measure
pub const EMPTY_SCORE: f64 = 100.0;

const DIFFICULT_BELOW: f64 = 30.0;
const CHALLENGING_BELOW: f64 = 60.0;

/// Qualitative band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readability {
  TooShort,
  VeryDifficult,
  Challenging,
  VeryEasy,
}

impl Readability {
  /// Band for an already clipped score. Boundaries are strict less-than,
  /// so exactly 30 is `Challenging` and exactly 60 is `VeryEasy`.
  pub fn from_score(score: f64) -> Self {
    if score < DIFFICULT_BELOW {
      Readability::VeryDifficult
    } else if score < CHALLENGING_BELOW {
      Readability::Challenging
    } else {
      Readability::VeryEasy
    }
  }

  pub fn comment(&self) -> &'static str {
    match self {
      Readability::TooShort => "Too short or empty to analyze",
      Readability::VeryDifficult => "Very difficult to read",
      Readability::Challenging => "Challenging to read",
      Readability::VeryEasy => "Very easy to read",
    }
  }
}

impl fmt::Display for Readability {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.comment())
  }
}

impl Serialize for Readability {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.comment())
  }
}

/// Score plus its comment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityResult {
  pub score: f64,
  pub comment: Readability,
}

impl ReadabilityResult {
  /// Score rounded to one decimal, halves rounding up.
  ///
  /// `{:.1}` already rounds the exact binary value correctly except on exact
  /// ties, which it sends to even. A double can only sit exactly on a
  /// `x.x5` tie when its fraction is a multiple of 0.25.
  pub fn display_score(&self) -> String {
    let scaled = self.score * 10.0;
    if scaled.fract() == 0.5 && (self.score * 4.0).fract() == 0.0 {
      format!("{:.1}", scaled.ceil() / 10.0)
    } else {
      format!("{:.1}", self.score)
    }
  }
}

/// Unclipped Flesch reading ease. Callers must ensure both divisors are non-zero.
fn flesch(metrics: &TextMetrics) -> f64 {
  let words_per_sentence = metrics.words as f64 / metrics.sentences as f64;
  let syllables_per_word = metrics.syllables as f64 / metrics.words as f64;

  BASE - SENTENCE_LENGTH_WEIGHT * words_per_sentence - WORD_LENGTH_WEIGHT * syllables_per_word
}

/// Score a set of counts. Never negative; no upper clip.
pub fn score(metrics: &TextMetrics) -> ReadabilityResult {
  if metrics.sentences == 0 || metrics.words == 0 {
    return ReadabilityResult { score: EMPTY_SCORE, comment: Readability::TooShort };
  }

  let clipped = flesch(metrics).max(0.0);
  ReadabilityResult { score: clipped, comment: Readability::from_score(clipped) }
}

/// Extract metrics from `text` and score them
pub fn analyze_readability(text: &str) -> ReadabilityResult {
  let metrics = TextMetrics::extract(text);
  tracing::debug!(
    sentences = metrics.sentences,
    words = metrics.words,
    syllables = metrics.syllables,
    "extracted text metrics"
  );
  score(&metrics)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
  }

  #[test]
  fn test_zero_counts_are_too_short() {
    for metrics in [
      TextMetrics::new(0, 0, 0),
      TextMetrics::new(0, 12, 20),
      TextMetrics::new(3, 0, 5),
    ] {
      let result = score(&metrics);
      assert_eq!(result.score, 100.0);
      assert_eq!(result.comment, Readability::TooShort);
      assert_eq!(result.comment.comment(), "Too short or empty to analyze");
    }
  }

  #[test]
  fn test_easy_text() {
    let result = score(&TextMetrics::new(1, 10, 15));
    assert_close(result.score, 69.785);
    assert_eq!(result.comment, Readability::VeryEasy);
  }

  #[test]
  fn test_difficult_text() {
    let result = score(&TextMetrics::new(1, 10, 20));
    assert_close(result.score, 27.485);
    assert_eq!(result.comment, Readability::VeryDifficult);
  }

  #[test]
  fn test_challenging_text() {
    // 206.835 - 10.15 - 84.6 * 1.7 = 52.865
    let result = score(&TextMetrics::new(1, 10, 17));
    assert_close(result.score, 52.865);
    assert_eq!(result.comment, Readability::Challenging);
  }

  #[test]
  fn test_score_is_clipped_at_zero() {
    let result = score(&TextMetrics::new(1, 100, 1000));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.comment, Readability::VeryDifficult);
  }

  #[test]
  fn test_no_upper_clip() {
    // one word, no syllables: 206.835 - 1.015
    let result = score(&TextMetrics::new(1, 1, 0));
    assert_close(result.score, 205.82);
    assert_eq!(result.comment, Readability::VeryEasy);
  }

  #[test]
  fn test_boundaries_resolve_to_easier_band() {
    assert_eq!(Readability::from_score(29.999), Readability::VeryDifficult);
    assert_eq!(Readability::from_score(30.0), Readability::Challenging);
    assert_eq!(Readability::from_score(59.999), Readability::Challenging);
    assert_eq!(Readability::from_score(60.0), Readability::VeryEasy);
    assert_eq!(Readability::from_score(0.0), Readability::VeryDifficult);
  }

  #[test]
  fn test_analyze_empty_text() {
    let result = analyze_readability("");
    assert_eq!(result.score, 100.0);
    assert_eq!(result.comment, Readability::TooShort);

    let result = analyze_readability("   \n ");
    assert_eq!(result.comment, Readability::TooShort);
  }

  #[test]
  fn test_analyze_never_negative() {
    let samples = [
      "Aaaaeeeeiiiioooouuuuyyyy aaaaeeeeiiiioooouuuuyyyy aaaaeeeeiiiioooouuuuyyyy",
      "!!!",
      "a",
      "Supercalifragilisticexpialidocious antidisestablishmentarianism",
    ];
    for text in samples {
      assert!(analyze_readability(text).score >= 0.0, "negative score for {text:?}");
    }
  }

  #[test]
  fn test_display_score_has_one_decimal() {
    let result = score(&TextMetrics::new(1, 10, 15));
    assert_eq!(result.display_score(), "69.8");
    assert_eq!(score(&TextMetrics::default()).display_score(), "100.0");
  }

  #[test]
  fn test_display_score_rounds_exact_ties_up() {
    // 206.835 - 1.015 * 19 - 84.6 * 0.5 is exactly 145.25
    assert_eq!(score(&TextMetrics::new(2, 38, 19)).display_score(), "145.3");
    assert_eq!(score(&TextMetrics::new(2, 70, 77)).display_score(), "78.3");
    assert_eq!(score(&TextMetrics::new(1, 39, 65)).display_score(), "26.3");

    let tie = ReadabilityResult { score: 128.75, comment: Readability::VeryEasy };
    assert_eq!(tie.display_score(), "128.8");
  }

  #[test]
  fn test_display_score_near_ties_follow_stored_value() {
    // 1.45 is stored just below the tie, 0.05 just above it
    let below = ReadabilityResult { score: 1.45, comment: Readability::VeryDifficult };
    assert_eq!(below.display_score(), "1.4");
    let above = ReadabilityResult { score: 0.05, comment: Readability::VeryDifficult };
    assert_eq!(above.display_score(), "0.1");
    let whole = ReadabilityResult { score: 0.0, comment: Readability::VeryDifficult };
    assert_eq!(whole.display_score(), "0.0");
  }

  #[test]
  fn test_comment_serializes_as_text() {
    let json = serde_json::to_value(score(&TextMetrics::new(1, 10, 20))).unwrap();
    assert_eq!(json["comment"], "Very difficult to read");
  }
}
