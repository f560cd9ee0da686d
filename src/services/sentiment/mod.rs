//! Sentiment service for text classification.

mod service;

pub use service::{SentimentService, SentimentServiceImpl};
