//! Types for the news search endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Source identifier, when the API knows one.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A single article from the `everything` search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Publishing source.
    #[serde(default)]
    pub source: Option<ArticleSource>,
    /// Article URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication time.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Success body of `GET /v2/everything`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    /// `ok` on success.
    pub status: String,
    /// Total number of matches.
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Matching articles, most relevant first.
    pub articles: Vec<Article>,
}

/// Error body returned by the news API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsErrorResponse {
    /// `error`.
    pub status: String,
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// The headline picked for sentiment analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    /// Headline text.
    pub title: String,
    /// Source display name.
    pub source: Option<String>,
    /// Article URL.
    pub url: Option<String>,
    /// Publication time.
    pub published_at: Option<DateTime<Utc>>,
}

impl Headline {
    /// Builds a headline from an article; `None` when it has no title.
    pub fn from_article(article: Article) -> Option<Self> {
        let title = article.title.filter(|t| !t.trim().is_empty())?;
        Some(Self {
            title,
            source: article.source.and_then(|s| s.name),
            url: article.url,
            published_at: article.published_at,
        })
    }
}
