//! Text metrics extraction
//!
//! Counts sentences, words and syllable-like vowel runs. These are cheap
//! heuristics, not linguistic analysis: a sentence is whatever sits between
//! runs of terminal punctuation, and a syllable is one or two adjacent
//! vowels (with `y` counted as a vowel).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_BREAK: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

// ECMAScript whitespace plus line terminators. Unlike Unicode White_Space it
// includes U+FEFF and leaves out U+0085.
static WORD_BREAK: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+")
    .expect("word pattern is valid")
});

static SYLLABLE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)[aeiouy]{1,2}").expect("syllable pattern is valid"));

/// Raw counts feeding the readability formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
  pub sentences: usize,
  pub words: usize,
  pub syllables: usize,
}

impl TextMetrics {
  pub fn new(sentences: usize, words: usize, syllables: usize) -> Self {
    Self { sentences, words, syllables }
  }

  /// Extract all three counts from raw text
  pub fn extract(text: &str) -> Self {
    Self {
      sentences: count_sentences(text),
      words: count_words(text),
      syllables: count_syllables(text),
    }
  }
}

/// Non-empty segments between runs of `.`, `!` and `?`.
///
/// Whitespace-only segments still count, so `"Hi. "` has two.
pub fn count_sentences(text: &str) -> usize {
  SENTENCE_BREAK.split(text).filter(|segment| !segment.is_empty()).count()
}

/// Non-empty segments between runs of whitespace
pub fn count_words(text: &str) -> usize {
  WORD_BREAK.split(text).filter(|word| !word.is_empty()).count()
}

/// Greedy, non-overlapping matches of one or two vowels, case-insensitive
pub fn count_syllables(text: &str) -> usize {
  SYLLABLE.find_iter(text).count()
}
