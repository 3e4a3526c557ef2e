//! Grammar checking and readability scoring for plain text
//!
//! Grammar checking is delegated to a LanguageTool-compatible service behind
//! the [`grammar::GrammarChecker`] trait. Readability is computed locally with
//! the Flesch reading-ease formula.

pub mod cli;
pub mod config;
pub mod error;
pub mod grammar;
pub mod metrics;
pub mod proofread;
pub mod report;
pub mod scoring;

pub use cli::{run, Cli};
pub use error::{LegibleError, Result};
pub use metrics::TextMetrics;
pub use proofread::{ProofreadOptions, ProofreadReport, Proofreader};
pub use report::OutputFormat;
pub use scoring::{analyze_readability, Readability, ReadabilityResult};
