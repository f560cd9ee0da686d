//! Service implementations.
//!
//! - `sentiment` - text classification against the inference endpoint
//! - `news` - most relevant headline lookup

pub mod news;
pub mod sentiment;

pub use news::{NewsService, NewsServiceImpl};
pub use sentiment::{SentimentService, SentimentServiceImpl};

use crate::errors::SentimentError;
use crate::transport::TransportResponse;

/// Longest slice of an error body carried into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Builds the transport error for a non-success response.
pub(crate) fn status_error(response: &TransportResponse, detail: Option<String>) -> SentimentError {
    let detail = detail.unwrap_or_else(|| {
        let text = response.text();
        let text = text.trim();
        if text.is_empty() {
            "no response body".to_string()
        } else {
            text.chars().take(MAX_ERROR_BODY_CHARS).collect()
        }
    });
    SentimentError::http_status(response.status, format!("HTTP {}: {}", response.status, detail))
}
