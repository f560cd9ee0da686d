//! Configuration module for the sentiment client.
//!
//! Provides the inference endpoint, the credentials for the inference and
//! news APIs, and the request timeout. Credentials are optional at build
//! time: a call that needs a missing credential fails with a configuration
//! error before any request is sent.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::{SentimentError, SentimentResult};

/// Default sentiment model endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

/// Default base URL for the news API.
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";

/// Default request timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the inference API token.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Environment variable holding the news API key.
pub const NEWS_KEY_ENV_VAR: &str = "NEWS_API_KEY";

/// Configuration for the sentiment client.
#[derive(Clone)]
pub struct SentimentConfig {
    /// Bearer token for the inference endpoint.
    pub(crate) api_token: Option<SecretString>,
    /// API key for the news service.
    pub(crate) news_api_key: Option<SecretString>,
    /// Sentiment model endpoint.
    pub endpoint: Url,
    /// Base URL of the news API.
    pub news_base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
}

impl SentimentConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> SentimentConfigBuilder {
        SentimentConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HF_TOKEN`: inference API token
    /// - `NEWS_API_KEY`: news API key
    /// - `SENTIMENT_ENDPOINT` (optional): custom model endpoint
    /// - `NEWS_BASE_URL` (optional): custom news API base URL
    /// - `SENTIMENT_TIMEOUT` (optional): request timeout in seconds
    ///
    /// Missing credentials are not an error here; they surface on the first
    /// call that needs them.
    pub fn from_env() -> SentimentResult<Self> {
        let mut builder = SentimentConfigBuilder::new();

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            builder = builder.api_token(token);
        }

        if let Ok(key) = std::env::var(NEWS_KEY_ENV_VAR) {
            builder = builder.news_api_key(key);
        }

        if let Ok(endpoint) = std::env::var("SENTIMENT_ENDPOINT") {
            builder = builder.endpoint(endpoint);
        }

        if let Ok(base_url) = std::env::var("NEWS_BASE_URL") {
            builder = builder.news_base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("SENTIMENT_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        builder.build()
    }

    /// Returns the inference token, or a configuration error if it is
    /// missing or empty.
    pub(crate) fn require_api_token(&self) -> SentimentResult<&SecretString> {
        require_secret(self.api_token.as_ref(), TOKEN_ENV_VAR)
    }

    /// Returns the news API key, or a configuration error if it is missing
    /// or empty.
    pub(crate) fn require_news_api_key(&self) -> SentimentResult<&SecretString> {
        require_secret(self.news_api_key.as_ref(), NEWS_KEY_ENV_VAR)
    }

    /// Returns true if an inference token is configured.
    pub fn has_api_token(&self) -> bool {
        self.require_api_token().is_ok()
    }

    /// Returns the token hint (last 4 characters) for debugging.
    pub fn api_token_hint(&self) -> String {
        match &self.api_token {
            Some(token) => secret_hint(token),
            None => "<unset>".to_string(),
        }
    }
}

fn require_secret<'a>(
    secret: Option<&'a SecretString>,
    name: &str,
) -> SentimentResult<&'a SecretString> {
    match secret {
        Some(value) if !value.expose_secret().trim().is_empty() => Ok(value),
        _ => Err(SentimentError::configuration(format!(
            "{name} is not set"
        ))),
    }
}

pub(crate) fn secret_hint(secret: &SecretString) -> String {
    let key = secret.expose_secret();
    if key.chars().count() > 4 {
        let tail: String = key.chars().skip(key.chars().count() - 4).collect();
        format!("...{tail}")
    } else {
        "****".to_string()
    }
}

impl std::fmt::Debug for SentimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |s: &Option<SecretString>| if s.is_some() { "[REDACTED]" } else { "<unset>" };
        f.debug_struct("SentimentConfig")
            .field("api_token", &redacted(&self.api_token))
            .field("news_api_key", &redacted(&self.news_api_key))
            .field("endpoint", &self.endpoint.as_str())
            .field("news_base_url", &self.news_base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for `SentimentConfig`.
#[derive(Default)]
pub struct SentimentConfigBuilder {
    api_token: Option<String>,
    news_api_key: Option<String>,
    endpoint: Option<String>,
    news_base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SentimentConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inference API token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the news API key.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Sets the sentiment model endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the news API base URL.
    pub fn news_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.news_base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SentimentResult<SentimentConfig> {
        let endpoint = parse_http_url(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        // Trailing slash so that relative joins keep any base path.
        let news_base_url = parse_http_url(&format!(
            "{}/",
            self.news_base_url
                .as_deref()
                .unwrap_or(DEFAULT_NEWS_BASE_URL)
                .trim_end_matches('/')
        ))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(SentimentError::configuration("Timeout must be non-zero"));
        }

        if endpoint.scheme() != "https" {
            tracing::warn!(endpoint = %endpoint, "Sentiment endpoint does not use HTTPS");
        }

        Ok(SentimentConfig {
            api_token: self.api_token.map(SecretString::new),
            news_api_key: self.news_api_key.map(SecretString::new),
            endpoint,
            news_base_url,
            timeout,
        })
    }
}

fn parse_http_url(raw: &str) -> SentimentResult<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SentimentError::configuration(format!(
            "Unsupported URL scheme '{other}' in {raw}"
        ))),
    }
}
