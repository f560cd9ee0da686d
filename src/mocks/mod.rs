//! Mock implementations for testing.
//!
//! Provides a recording HTTP transport and a fixed-header auth manager so
//! services can be exercised without making real requests.

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;
use url::Url;

use crate::auth::AuthManager;
use crate::errors::{SentimentError, SentimentResult};
use crate::transport::{HttpTransport, TransportResponse};

/// A mock response to return
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(data).unwrap(),
        }
    }

    /// Create a response with a raw body
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
        }
    }
}

/// A recorded request
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// HTTP method
    pub method: Method,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Vec<u8>>,
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    outcomes: Mutex<VecDeque<SentimentResult<MockResponse>>>,
    requests: Mutex<Vec<MockRequest>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a response to return
    pub fn add_response(&self, response: MockResponse) {
        self.outcomes.lock().push_back(Ok(response));
    }

    /// Add a transport failure to return
    pub fn add_failure(&self, error: SentimentError) {
        self.outcomes.lock().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn get_requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Get the last request
    pub fn last_request(&self) -> Option<MockRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
    ) -> SentimentResult<TransportResponse> {
        self.requests.lock().push(MockRequest {
            method,
            url: url.to_string(),
            headers,
            body: body.map(|b| b.to_vec()),
        });

        let response = self
            .outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MockResponse::raw(500, "No mock response configured")))?;

        Ok(TransportResponse {
            status: response.status,
            body: Bytes::from(response.body),
        })
    }
}

/// Mock auth manager
pub struct MockAuthManager {
    headers: HeaderMap,
}

impl MockAuthManager {
    /// Create a new mock auth manager
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer mock-api-token"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        Self { headers }
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> SentimentResult<()> {
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_records_and_replays() {
        let transport = MockHttpTransport::new();
        transport.add_response(MockResponse::raw(200, "[]"));
        transport.add_failure(SentimentError::transport("reset"));

        let url = Url::parse("https://api.example.com/models/x").unwrap();
        let first = transport
            .send(Method::POST, url.clone(), HeaderMap::new(), Some(Bytes::from("{}")))
            .await
            .unwrap();
        assert_eq!(first.status, 200);

        let second = transport.send(Method::POST, url.clone(), HeaderMap::new(), None).await;
        assert!(second.is_err());

        let third = transport.send(Method::POST, url, HeaderMap::new(), None).await.unwrap();
        assert_eq!(third.status, 500);

        let requests = transport.get_requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].body.as_deref(), Some(b"{}".as_slice()));
    }

    #[test]
    fn test_mock_auth_manager() {
        let auth = MockAuthManager::new();
        let headers = auth.get_headers().unwrap();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer mock-api-token");
    }
}
