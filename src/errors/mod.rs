//! Error types for the sentiment client.
//!
//! Every failure a call can produce is returned as a [`SentimentError`]
//! value. Nothing is retried and nothing panics past the client boundary.

use thiserror::Error;

/// Result type alias for sentiment client operations.
pub type SentimentResult<T> = Result<T, SentimentError>;

/// Error type for sentiment client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SentimentError {
    /// Configuration error (missing credential, invalid endpoint, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Network or HTTP failure.
    #[error("Transport error: {message}")]
    Transport {
        /// Error message, including the underlying cause.
        message: String,
        /// HTTP status code, when the server answered.
        status: Option<u16>,
    },

    /// The response body did not have the expected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Error message describing the decoding failure.
        message: String,
    },

    /// Caller input rejected before any request was made.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the invalid input.
        message: String,
    },
}

/// Discriminant of a [`SentimentError`], for callers that only branch on
/// the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SentimentError::Configuration`].
    Configuration,
    /// See [`SentimentError::Transport`].
    Transport,
    /// See [`SentimentError::Parse`].
    Parse,
    /// See [`SentimentError::Validation`].
    Validation,
}

impl SentimentError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        SentimentError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a transport error with no HTTP status.
    pub fn transport(message: impl Into<String>) -> Self {
        SentimentError::Transport {
            message: message.into(),
            status: None,
        }
    }

    /// Creates a transport error for a non-success HTTP status.
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        SentimentError::Transport {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        SentimentError::Parse {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SentimentError::Validation {
            message: message.into(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SentimentError::Configuration { .. } => ErrorKind::Configuration,
            SentimentError::Transport { .. } => ErrorKind::Transport,
            SentimentError::Parse { .. } => ErrorKind::Parse,
            SentimentError::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SentimentError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SentimentError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            format!("Request timed out: {err}")
        } else if err.is_connect() {
            format!("Connection failed: {err}")
        } else {
            format!("Request failed: {err}")
        };
        SentimentError::Transport { message, status }
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for SentimentError {
    fn from(err: url::ParseError) -> Self {
        SentimentError::Configuration {
            message: format!("Invalid URL: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            SentimentError::configuration("HF_TOKEN not set").kind(),
            ErrorKind::Configuration
        );
        assert_eq!(SentimentError::transport("reset").kind(), ErrorKind::Transport);
        assert_eq!(SentimentError::parse("bad body").kind(), ErrorKind::Parse);
        assert_eq!(
            SentimentError::validation("empty query").kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_status_code() {
        let error = SentimentError::http_status(503, "Service unavailable");
        assert_eq!(error.status_code(), Some(503));
        assert_eq!(SentimentError::transport("refused").status_code(), None);
        assert_eq!(SentimentError::parse("x").status_code(), None);
    }

    #[test]
    fn test_from_serde_json_error_is_parse() {
        let err = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let error: SentimentError = err.into();
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_from_url_error_is_configuration() {
        let err = url::Url::parse("not a url").unwrap_err();
        let error: SentimentError = err.into();
        assert!(matches!(error, SentimentError::Configuration { message } if message.contains("Invalid URL")));
    }

    #[test]
    fn test_display() {
        let error = SentimentError::http_status(401, "HTTP 401: invalid token");
        assert_eq!(error.to_string(), "Transport error: HTTP 401: invalid token");
    }
}
