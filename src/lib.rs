//! Sentiment Client Library
//!
//! A Rust client for hosted sentiment-inference models. Classifies a piece
//! of text (typically a news headline) and returns the highest-confidence
//! label, and can look up the latest headline for a ticker to classify.
//!
//! # Features
//!
//! - **Classification**: one POST per call, top label chosen by score
//! - **Typed failures**: configuration, transport and parse errors as values
//! - **News lookup**: most relevant headline for a ticker
//! - **Reports**: the dashboard status line for a ticker, never failing
//! - **Secure credentials**: tokens held as `SecretString`, redacted in logs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sentiment_client::SentimentClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SentimentClient::new("hf_your_token")?;
//!
//!     let result = client.classify("Shares jump after strong guidance").await?;
//!     println!("{}: {:.0}%", result.label, result.score * 100.0);
//!     Ok(())
//! }
//! ```
//!
//! # Headline Report
//!
//! ```rust,no_run
//! use sentiment_client::SentimentClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SentimentClient::builder()
//!         .api_token("hf_your_token")
//!         .news_api_key("your_news_key")
//!         .build()?;
//!
//!     println!("{}", client.headline_report(Some("AAPL")).await);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod report;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
pub(crate) mod mocks;

// Re-exports for convenience
pub use client::{SentimentClient, SentimentClientBuilder};
pub use config::{SentimentConfig, SentimentConfigBuilder};
pub use errors::{ErrorKind, SentimentError, SentimentResult};
pub use report::SentimentReport;
pub use services::{NewsService, SentimentService};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{ClassificationRequest, ClassificationResponse, ClassificationResult, Headline};
