//! Client interface for the sentiment and news services.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::config::{SentimentConfig, SentimentConfigBuilder};
use crate::errors::SentimentResult;
use crate::report::SentimentReport;
use crate::services::{
    NewsService, NewsServiceImpl, SentimentService, SentimentServiceImpl,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{ClassificationResult, Headline};

/// The sentiment client.
///
/// Holds immutable configuration and a pooled HTTP transport; every call is
/// an independent request.
///
/// # Example
///
/// ```rust,no_run
/// use sentiment_client::SentimentClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SentimentClient::new("hf_your_token")?;
///
///     let result = client.classify("The new product launch was a huge success.").await?;
///     println!("{} ({:.2})", result.label, result.score);
///     Ok(())
/// }
/// ```
pub struct SentimentClient {
    config: Arc<SentimentConfig>,
    transport: Arc<dyn HttpTransport>,
    sentiment_service: OnceCell<Arc<dyn SentimentService>>,
    news_service: OnceCell<Arc<dyn NewsService>>,
}

impl SentimentClient {
    /// Creates a new client builder.
    pub fn builder() -> SentimentClientBuilder {
        SentimentClientBuilder::new()
    }

    /// Creates a client authenticated with `api_token` and default settings.
    pub fn new(api_token: impl Into<String>) -> SentimentResult<Self> {
        SentimentClientBuilder::new().api_token(api_token).build()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`SentimentConfig::from_env`].
    pub fn from_env() -> SentimentResult<Self> {
        SentimentClientBuilder::from_config(SentimentConfig::from_env()?).build()
    }

    /// Returns the sentiment service.
    pub fn sentiment(&self) -> Arc<dyn SentimentService> {
        self.sentiment_service
            .get_or_init(|| {
                Arc::new(SentimentServiceImpl::from_config(
                    Arc::clone(&self.transport),
                    &self.config,
                )) as Arc<dyn SentimentService>
            })
            .clone()
    }

    /// Returns the news service.
    pub fn news(&self) -> Arc<dyn NewsService> {
        self.news_service
            .get_or_init(|| {
                Arc::new(NewsServiceImpl::from_config(
                    Arc::clone(&self.transport),
                    &self.config,
                )) as Arc<dyn NewsService>
            })
            .clone()
    }

    /// Classifies `text` and returns the highest-confidence label.
    pub async fn classify(&self, text: &str) -> SentimentResult<ClassificationResult> {
        self.sentiment().classify(text).await
    }

    /// Fetches the most relevant headline for `query`.
    pub async fn top_headline(&self, query: &str) -> SentimentResult<Option<Headline>> {
        self.news().top_headline(query).await
    }

    /// Builds the headline sentiment report for `ticker`.
    pub async fn headline_report(&self, ticker: Option<&str>) -> SentimentReport {
        let news = self.news();
        let sentiment = self.sentiment();
        SentimentReport::build(news.as_ref(), sentiment.as_ref(), ticker).await
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }
}

impl std::fmt::Debug for SentimentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the sentiment client.
#[derive(Default)]
pub struct SentimentClientBuilder {
    config_builder: SentimentConfigBuilder,
    config: Option<SentimentConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SentimentClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from an existing configuration.
    ///
    /// Setting options on the builder afterwards has no effect on the
    /// supplied configuration.
    pub fn from_config(config: SentimentConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    /// Sets the inference API token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_token(token);
        self
    }

    /// Sets the news API key.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.news_api_key(key);
        self
    }

    /// Sets the sentiment model endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.endpoint(endpoint);
        self
    }

    /// Sets the news API base URL.
    pub fn news_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.news_base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> SentimentResult<SentimentClient> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(config.timeout)?),
        };

        tracing::debug!(
            endpoint = %config.endpoint,
            token = %config.api_token_hint(),
            "Sentiment client created"
        );

        Ok(SentimentClient {
            config: Arc::new(config),
            transport,
            sentiment_service: OnceCell::new(),
            news_service: OnceCell::new(),
        })
    }
}
