//! Authentication for the inference and news APIs.

use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::config::secret_hint;
use crate::errors::{SentimentError, SentimentResult};

/// Trait for managing authentication headers.
pub trait AuthManager: Send + Sync {
    /// Get the authentication headers for a request.
    fn get_headers(&self) -> SentimentResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        self.add_auth_headers(&mut headers)?;
        Ok(headers)
    }

    /// Add authentication headers to an existing header map.
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> SentimentResult<()>;
}

fn user_agent() -> HeaderValue {
    HeaderValue::from_static(concat!("sentiment-client/", env!("CARGO_PKG_VERSION")))
}

fn sensitive_value(value: &str) -> SentimentResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        SentimentError::configuration("Credential contains characters not allowed in a header")
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Bearer token authentication for the inference endpoint.
pub struct BearerAuthManager {
    token: SecretString,
}

impl BearerAuthManager {
    /// Create a new bearer authentication manager.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}

impl AuthManager for BearerAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> SentimentResult<()> {
        let auth_value = format!("Bearer {}", self.token.expose_secret());
        headers.insert(AUTHORIZATION, sensitive_value(&auth_value)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent());
        Ok(())
    }
}

impl std::fmt::Debug for BearerAuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuthManager")
            .field("token", &"[REDACTED]")
            .field("token_hint", &secret_hint(&self.token))
            .finish()
    }
}

/// `X-Api-Key` authentication for the news API.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
}

impl ApiKeyAuthManager {
    /// Header carrying the key.
    pub const HEADER: &'static str = "x-api-key";

    /// Create a new API key authentication manager.
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl AuthManager for ApiKeyAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> SentimentResult<()> {
        headers.insert(
            HeaderName::from_static(Self::HEADER),
            sensitive_value(self.api_key.expose_secret())?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent());
        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuthManager")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_auth_headers() {
        let manager = BearerAuthManager::new(SecretString::new("hf_test_token_12345".to_string()));

        let headers = manager.get_headers().unwrap();

        assert_eq!(
            headers.get("authorization").unwrap(),
            "Bearer hf_test_token_12345"
        );
        assert!(headers.get("authorization").unwrap().is_sensitive());
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert!(headers
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("sentiment-client/"));
    }

    #[test]
    fn test_add_auth_headers_keeps_existing() {
        let manager = BearerAuthManager::new(SecretString::new("hf_test_token".to_string()));

        let mut headers = HeaderMap::new();
        headers.insert("x-custom-header", "custom-value".parse().unwrap());
        manager.add_auth_headers(&mut headers).unwrap();

        assert_eq!(headers.get("x-custom-header").unwrap(), "custom-value");
        assert!(headers.get("authorization").is_some());
    }

    #[test]
    fn test_invalid_token_characters() {
        let manager = BearerAuthManager::new(SecretString::new("bad\ntoken".to_string()));
        let err = manager.get_headers().unwrap_err();
        assert!(matches!(err, SentimentError::Configuration { .. }));
    }

    #[test]
    fn test_api_key_auth_headers() {
        let manager = ApiKeyAuthManager::new(SecretString::new("news-key-123".to_string()));

        let headers = manager.get_headers().unwrap();

        assert_eq!(headers.get("x-api-key").unwrap(), "news-key-123");
        assert!(headers.get("authorization").is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let bearer = BearerAuthManager::new(SecretString::new("hf_secret_token".to_string()));
        let debug_str = format!("{:?}", bearer);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("hf_secret_token"));

        let api_key = ApiKeyAuthManager::new(SecretString::new("news_secret".to_string()));
        assert!(!format!("{:?}", api_key).contains("news_secret"));
    }
}
