//! News service implementation.

use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::config::SentimentConfig;
use crate::errors::{SentimentError, SentimentResult};
use crate::services::status_error;
use crate::transport::{HttpTransport, TransportResponse};
use crate::types::{EverythingResponse, Headline, NewsErrorResponse};

/// Path of the article search endpoint, relative to the news base URL.
pub const EVERYTHING_PATH: &str = "v2/everything";

/// News service trait for testability
#[async_trait]
pub trait NewsService: Send + Sync {
    /// Fetch the most relevant English-language headline for a query.
    ///
    /// Returns `Ok(None)` when the search has no results.
    async fn top_headline(&self, query: &str) -> SentimentResult<Option<Headline>>;
}

/// Implementation of the News service
pub struct NewsServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Option<Arc<dyn AuthManager>>,
    base_url: Url,
}

impl NewsServiceImpl {
    /// Create a new News service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Option<Arc<dyn AuthManager>>,
        base_url: Url,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
        }
    }

    /// Create a service authenticated with the configured key, if any.
    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &SentimentConfig) -> Self {
        let auth_manager = config
            .require_news_api_key()
            .ok()
            .map(|key| Arc::new(ApiKeyAuthManager::new(key.clone())) as Arc<dyn AuthManager>);
        Self::new(transport, auth_manager, config.news_base_url.clone())
    }

    /// Build the search URL for a query
    fn everything_url(&self, query: &str) -> SentimentResult<Url> {
        let mut url = self.base_url.join(EVERYTHING_PATH)?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("language", "en")
            .append_pair("sortBy", "relevancy")
            .append_pair("pageSize", "1");
        Ok(url)
    }

    fn api_error_message(body: &[u8]) -> Option<String> {
        let error: NewsErrorResponse = serde_json::from_slice(body).ok()?;
        match (error.code, error.message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (code, message) => message.or(code),
        }
    }

    fn parse_response(response: &TransportResponse) -> SentimentResult<Option<Headline>> {
        if !response.is_success() {
            return Err(status_error(response, Self::api_error_message(&response.body)));
        }

        match serde_json::from_slice::<EverythingResponse>(&response.body) {
            Ok(search) => Ok(search.articles.into_iter().find_map(Headline::from_article)),
            Err(e) => match serde_json::from_slice::<NewsErrorResponse>(&response.body) {
                Ok(error) if error.status == "error" => Err(SentimentError::transport(format!(
                    "News API error: {}",
                    Self::api_error_message(&response.body)
                        .unwrap_or_else(|| "unknown error".to_string())
                ))),
                _ => Err(SentimentError::parse(format!(
                    "Unexpected news search response: {e}"
                ))),
            },
        }
    }
}

#[async_trait]
impl NewsService for NewsServiceImpl {
    #[instrument(skip(self))]
    async fn top_headline(&self, query: &str) -> SentimentResult<Option<Headline>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SentimentError::validation("News query cannot be empty"));
        }

        let auth_manager = self
            .auth_manager
            .as_ref()
            .ok_or_else(|| SentimentError::configuration("NEWS_API_KEY is not set"))?;
        let headers = auth_manager.get_headers()?;

        let url = self.everything_url(query)?;
        let response = self.transport.send(Method::GET, url, headers, None).await?;

        let headline = Self::parse_response(&response).map_err(|e| {
            warn!(error = %e, "News search failed");
            e
        })?;
        debug!(found = headline.is_some(), "News search complete");

        Ok(headline)
    }
}

impl std::fmt::Debug for NewsServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsServiceImpl")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.auth_manager.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::fixtures;
    use crate::mocks::{MockAuthManager, MockHttpTransport, MockResponse};
    use pretty_assertions::assert_eq;

    fn create_service(transport: Arc<MockHttpTransport>) -> NewsServiceImpl {
        NewsServiceImpl::new(
            transport,
            Some(Arc::new(MockAuthManager::new())),
            Url::parse("https://news.example.com/").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_top_headline() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::json(&fixtures::news_response(&[
            "Apple unveils new chip",
        ])));
        let service = create_service(transport.clone());

        let headline = service.top_headline("AAPL").await.unwrap().unwrap();

        assert_eq!(headline.title, "Apple unveils new chip");
        assert_eq!(headline.source.as_deref(), Some("Example Wire"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://news.example.com/v2/everything?q=AAPL&language=en&sortBy=relevancy&pageSize=1"
        );
    }

    #[tokio::test]
    async fn test_query_is_encoded() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::json(&fixtures::news_response(&["x"])));
        let service = create_service(transport.clone());

        service.top_headline("BRK B&co").await.unwrap();

        let url = transport.last_request().unwrap().url;
        assert!(url.contains("q=BRK+B%26co"), "{url}");
    }

    #[tokio::test]
    async fn test_no_articles() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::json(&fixtures::news_response(&[])));
        let service = create_service(transport);

        assert_eq!(service.top_headline("ZZZZ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_without_request() {
        let transport = Arc::new(MockHttpTransport::new());
        let service = create_service(transport.clone());

        let err = service.top_headline("  ").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let transport = Arc::new(MockHttpTransport::new());
        let config = SentimentConfig::builder().build().unwrap();
        let service = NewsServiceImpl::from_config(transport.clone(), &config);

        let err = service.top_headline("AAPL").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(transport.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_carries_api_message() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::raw(401, fixtures::NEWS_KEY_INVALID));
        let service = create_service(transport);

        let err = service.top_headline("AAPL").await.unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert!(err.to_string().contains("apiKeyInvalid"));
    }

    #[tokio::test]
    async fn test_error_status_in_ok_response() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::raw(200, fixtures::NEWS_KEY_INVALID));
        let service = create_service(transport);

        let err = service.top_headline("AAPL").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.add_response(MockResponse::raw(200, "[]"));
        let service = create_service(transport);

        let err = service.top_headline("AAPL").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
