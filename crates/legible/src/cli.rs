// CLI functionality lives here rather than in main.rs for testability
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::grammar::LanguageToolClient;
use crate::proofread::{ProofreadReport, Proofreader};
use crate::report::{format_report, get_exit_code, OutputFormat};

/// Legible - grammar checking and readability scoring for plain text
#[derive(Parser, Debug)]
#[command(name = "legible")]
#[command(about = "Check text for grammar issues and estimate how easy it is to read")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), ", courtesy of Kernelle Software"))]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value = "pretty")]
  pub format: OutputFormat,

  /// Configuration file path
  #[arg(short, long, global = true)]
  pub config: Option<PathBuf>,

  /// Enable debug logging on stderr
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// Where the text comes from
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
  /// File to read; `-` or nothing reads stdin
  #[arg(value_name = "PATH")]
  pub path: Option<PathBuf>,

  /// Text to analyze, instead of a file
  #[arg(short, long, conflicts_with = "path")]
  pub text: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Check grammar with the remote service and score readability
  Check {
    #[command(flatten)]
    input: InputArgs,
    /// Language code sent to the grammar service
    #[arg(short, long, env = "LEGIBLE_LANGUAGE")]
    language: Option<String>,
    /// Base URL of a LanguageTool-compatible service
    #[arg(long, env = "LEGIBLE_API_URL")]
    api_url: Option<String>,
    /// Exit with status 1 when any issue is found
    #[arg(long)]
    strict: bool,
  },
  /// Score readability only, without contacting the grammar service.
  /// No configuration is read.
  Readability {
    #[command(flatten)]
    input: InputArgs,
  },
}

/// Explicit config path, or discovery, or defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => Config::load_from_file(path)
      .with_context(|| format!("failed to load config from {}", path.display())),
    None => Ok(Config::load()?),
  }
}

/// Resolve the text to analyze from `input`, falling back to `stdin`
pub fn read_input<R: Read>(input: &InputArgs, mut stdin: R) -> Result<String> {
  if let Some(text) = &input.text {
    return Ok(text.clone());
  }

  match &input.path {
    Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display())),
    _ => {
      let mut buffer = String::new();
      stdin.read_to_string(&mut buffer).context("failed to read stdin")?;
      Ok(buffer)
    }
  }
}

/// Run a parsed command line and return the process exit code
pub async fn run(cli: Cli) -> Result<i32> {
  match cli.command {
    Command::Check { input, language, api_url, strict } => {
      let config = load_config(cli.config.as_deref())?.with_overrides(language, api_url);
      let text = read_input(&input, std::io::stdin())?;

      tracing::debug!(api_url = %config.api_url, language = %config.language, "resolved settings");
      let client = LanguageToolClient::with_config(config.client_config())?;
      let proofreader = Proofreader::new(client, config.proofread_options());
      let report = proofreader.proofread(&text).await?;

      println!("{}", format_report(&report, cli.format));
      Ok(get_exit_code(&report, strict))
    }
    Command::Readability { input } => {
      let text = read_input(&input, std::io::stdin())?;
      if text.trim().is_empty() {
        herald::warn!("No text to analyze");
      }
      let report = ProofreadReport::readability_only(&text);

      println!("{}", format_report(&report, cli.format));
      Ok(0)
    }
  }
}
