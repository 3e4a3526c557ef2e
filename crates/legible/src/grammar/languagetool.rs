//! HTTP client for LanguageTool-compatible grammar services

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{CheckResponse, GrammarChecker, GrammarError, GrammarMatch};

pub const DEFAULT_API_URL: &str = "https://api.languagetool.org/v2";

/// Configuration for the grammar service client
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL of the service; `/check` is appended
  pub base_url: String,
  /// Request timeout in seconds. `None` waits indefinitely.
  pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_API_URL.to_string(), timeout_secs: None }
  }
}

/// Grammar checker backed by the LanguageTool `/check` endpoint
pub struct LanguageToolClient {
  client: Client,
  config: ClientConfig,
}

impl LanguageToolClient {
  /// Create a client with custom configuration
  pub fn with_config(config: ClientConfig) -> Result<Self, GrammarError> {
    let mut builder = Client::builder().user_agent(concat!("legible/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(Self { client: builder.build()?, config })
  }

  pub fn check_url(&self) -> String {
    format!("{}/check", self.config.base_url.trim_end_matches('/'))
  }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
  async fn check(&self, text: &str, language: &str) -> Result<Vec<GrammarMatch>, GrammarError> {
    let url = self.check_url();
    tracing::debug!(%url, language, chars = text.chars().count(), "sending grammar check");

    let response =
      self.client.post(&url).form(&[("text", text), ("language", language)]).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(GrammarError::status(status.as_u16(), body));
    }

    let body = response.text().await?;
    let parsed: CheckResponse =
      serde_json::from_str(&body).map_err(|e| GrammarError::parse(e.to_string()))?;

    tracing::debug!(matches = parsed.matches.len(), "grammar check complete");
    Ok(parsed.matches)
  }
}
