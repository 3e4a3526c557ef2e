//! Configuration management for legible
//!
//! Settings come from a JSON file with per-field defaults. Command-line
//! flags and environment variables are applied on top by the CLI.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{LegibleError, Result};
use crate::grammar::languagetool::DEFAULT_API_URL;
use crate::grammar::ClientConfig;
use crate::proofread::ProofreadOptions;

/// File names searched in the working directory, in order
const LOCAL_CONFIG_FILES: [&str; 2] = [".legible.json", "legible.json"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
  /// Base URL of the grammar service
  #[serde(default = "default_api_url")]
  pub api_url: String,
  /// Language code sent with every check
  #[serde(default = "default_language")]
  pub language: String,
  /// Replacements shown per issue
  #[serde(default = "default_max_suggestions")]
  pub max_suggestions: usize,
  /// Request timeout; unset waits for the service indefinitely
  #[serde(default)]
  pub timeout_secs: Option<u64>,
}

fn default_api_url() -> String {
  DEFAULT_API_URL.to_string()
}
fn default_language() -> String {
  "en-US".to_string()
}
fn default_max_suggestions() -> usize {
  3
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_url: default_api_url(),
      language: default_language(),
      max_suggestions: default_max_suggestions(),
      timeout_secs: None,
    }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
      .map_err(|e| LegibleError::config(path.display().to_string(), e.to_string()))
  }

  /// Load the first config found in the working directory or user config dir, or defaults
  pub fn load() -> Result<Self> {
    match Self::discover(Path::new("."), dirs::config_dir().as_deref()) {
      Some(path) => {
        tracing::debug!(path = %path.display(), "loading config");
        Self::load_from_file(path)
      }
      None => Ok(Config::default()),
    }
  }

  /// Find a config file under `cwd`, then under `config_dir/legible`
  pub fn discover(cwd: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    LOCAL_CONFIG_FILES
      .iter()
      .map(|name| cwd.join(name))
      .chain(config_dir.map(|dir| dir.join("legible").join("config.json")))
      .find(|path| path.is_file())
  }

  /// Apply values given on the command line or through the environment
  pub fn with_overrides(mut self, language: Option<String>, api_url: Option<String>) -> Self {
    if let Some(language) = language {
      self.language = language;
    }
    if let Some(api_url) = api_url {
      self.api_url = api_url;
    }
    self
  }

  pub fn client_config(&self) -> ClientConfig {
    ClientConfig { base_url: self.api_url.clone(), timeout_secs: self.timeout_secs }
  }

  pub fn proofread_options(&self) -> ProofreadOptions {
    ProofreadOptions { language: self.language.clone(), max_suggestions: self.max_suggestions }
  }
}
