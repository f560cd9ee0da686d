//! User-facing sentiment status line.
//!
//! [`SentimentReport`] is what a dashboard shows next to a ticker: either the
//! latest headline with its sentiment, or a fixed fallback message. Failures
//! of any kind collapse into the fallback; the underlying error is logged,
//! not shown.

use std::fmt;

use crate::errors::SentimentError;
use crate::services::{NewsService, SentimentService};
use crate::types::{ClassificationResult, Headline};

/// Label that gets the positive indicator.
const POSITIVE_LABEL: &str = "Positive";

/// Outcome of the headline-sentiment pipeline for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentReport {
    /// No ticker was entered.
    AwaitingTicker,
    /// The news lookup failed.
    NewsUnavailable,
    /// The news search returned nothing for the ticker.
    NoNews {
        /// Ticker as entered.
        ticker: String,
    },
    /// The headline could not be classified.
    AnalysisFailed {
        /// The headline that was sent for classification.
        headline: Headline,
    },
    /// The headline was classified.
    Scored {
        /// The analysed headline.
        headline: Headline,
        /// Its top classification.
        result: ClassificationResult,
    },
}

impl SentimentReport {
    /// Runs the pipeline: look up the top headline for `ticker`, classify
    /// it, and summarize the outcome. Never fails.
    pub async fn build(
        news: &dyn NewsService,
        sentiment: &dyn SentimentService,
        ticker: Option<&str>,
    ) -> Self {
        let ticker = match ticker.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return SentimentReport::AwaitingTicker,
        };

        let headline = match news.top_headline(ticker).await {
            Ok(Some(headline)) => headline,
            Ok(None) => {
                return SentimentReport::NoNews {
                    ticker: ticker.to_string(),
                }
            }
            Err(e) => {
                log_failure("news", ticker, &e);
                return SentimentReport::NewsUnavailable;
            }
        };

        match sentiment.classify(&headline.title).await {
            Ok(result) => SentimentReport::Scored { headline, result },
            Err(e) => {
                log_failure("sentiment", ticker, &e);
                SentimentReport::AnalysisFailed { headline }
            }
        }
    }

    /// Returns the classification, if there is one.
    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            SentimentReport::Scored { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Returns true if a classification was produced.
    pub fn is_scored(&self) -> bool {
        self.result().is_some()
    }
}

fn log_failure(stage: &'static str, ticker: &str, error: &SentimentError) {
    tracing::warn!(stage, ticker, kind = ?error.kind(), error = %error, "Sentiment report degraded");
}

impl fmt::Display for SentimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentReport::AwaitingTicker => {
                f.write_str("Enter a ticker to get ML sentiment on the latest news.")
            }
            SentimentReport::NewsUnavailable => f.write_str("Could not fetch news."),
            SentimentReport::NoNews { ticker } => {
                write!(f, "No recent news found for {}.", ticker.to_uppercase())
            }
            SentimentReport::AnalysisFailed { .. } => f.write_str("ML sentiment analysis failed."),
            SentimentReport::Scored { headline, result } => {
                let label = result.display_label();
                let emoji = if label == POSITIVE_LABEL { "😊" } else { "😞" };
                write!(
                    f,
                    "Latest Headline: '{}' | ML Sentiment: {} {} (Confidence: {}%)",
                    headline.title,
                    label,
                    emoji,
                    result.confidence_percent()
                )
            }
        }
    }
}
