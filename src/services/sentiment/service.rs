//! Sentiment service implementation.

use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::auth::{AuthManager, BearerAuthManager};
use crate::config::SentimentConfig;
use crate::errors::{SentimentError, SentimentResult};
use crate::services::status_error;
use crate::transport::HttpTransport;
use crate::types::{ClassificationRequest, ClassificationResponse, ClassificationResult};

/// Sentiment service trait for testability
#[async_trait]
pub trait SentimentService: Send + Sync {
    /// Classify a text, returning the highest-confidence label.
    async fn classify(&self, text: &str) -> SentimentResult<ClassificationResult>;
}

/// Error body of the inference API, e.g. while a model is loading.
#[derive(Debug, Deserialize)]
struct InferenceErrorBody {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

/// Implementation of the Sentiment service
pub struct SentimentServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Option<Arc<dyn AuthManager>>,
    endpoint: Url,
}

impl SentimentServiceImpl {
    /// Create a new Sentiment service. With no auth manager every call fails
    /// with a configuration error.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Option<Arc<dyn AuthManager>>,
        endpoint: Url,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            endpoint,
        }
    }

    /// Create a service authenticated with the configured token, if any.
    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &SentimentConfig) -> Self {
        let auth_manager = config
            .require_api_token()
            .ok()
            .map(|token| Arc::new(BearerAuthManager::new(token.clone())) as Arc<dyn AuthManager>);
        Self::new(transport, auth_manager, config.endpoint.clone())
    }

    /// Returns the model endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn error_detail(body: &[u8]) -> Option<String> {
        let parsed: InferenceErrorBody = serde_json::from_slice(body).ok()?;
        Some(match parsed.estimated_time {
            Some(secs) => format!("{} (estimated time {secs:.0}s)", parsed.error),
            None => parsed.error,
        })
    }
}

#[async_trait]
impl SentimentService for SentimentServiceImpl {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn classify(&self, text: &str) -> SentimentResult<ClassificationResult> {
        let auth_manager = self.auth_manager.as_ref().ok_or_else(|| {
            warn!("Inference token not configured; skipping request");
            SentimentError::configuration("HF_TOKEN is not set")
        })?;
        let headers = auth_manager.get_headers()?;

        let body = serde_json::to_vec(&ClassificationRequest::new(text))?;

        let response = self
            .transport
            .send(Method::POST, self.endpoint.clone(), headers, Some(Bytes::from(body)))
            .await?;

        if !response.is_success() {
            let error = status_error(&response, Self::error_detail(&response.body));
            warn!(status = response.status, error = %error, "Classification request rejected");
            return Err(error);
        }

        let result = ClassificationResponse::from_slice(&response.body)?.into_top()?;
        debug!(
            endpoint = %self.endpoint,
            label = %result.label,
            score = result.score,
            "Classification complete"
        );

        Ok(result)
    }
}

impl std::fmt::Debug for SentimentServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentServiceImpl")
            .field("endpoint", &self.endpoint.as_str())
            .field("authenticated", &self.auth_manager.is_some())
            .finish()
    }
}
