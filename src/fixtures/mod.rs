//! Canned response bodies for tests.

use serde_json::{json, Value};

/// Endpoint used by service tests.
pub const ENDPOINT: &str = "https://api-inference.example.com/models/sst2";

/// Flat body whose top label is `POSITIVE` at 0.9.
pub const FLAT_POSITIVE: &str =
    r#"[{"label":"NEGATIVE","score":0.2},{"label":"POSITIVE","score":0.9}]"#;

/// Nested body, as the hosted API returns it, whose top label is `NEGATIVE`.
pub const NESTED_NEGATIVE: &str =
    r#"[[{"label":"NEGATIVE","score":0.9871},{"label":"POSITIVE","score":0.0129}]]"#;

/// Body returned while the model is cold.
pub const MODEL_LOADING: &str = r#"{"error":"Model distilbert-base-uncased-finetuned-sst-2-english is currently loading","estimated_time":20.0}"#;

/// News API error body for a bad key.
pub const NEWS_KEY_INVALID: &str =
    r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid or incorrect."}"#;

/// News search body with one article per title.
pub fn news_response(titles: &[&str]) -> Value {
    let articles: Vec<Value> = titles
        .iter()
        .map(|title| {
            json!({
                "source": {"id": null, "name": "Example Wire"},
                "author": "Newsroom",
                "title": title,
                "description": "Summary",
                "url": "https://news.example.com/story",
                "publishedAt": "2024-05-03T14:30:00Z",
                "content": "Body"
            })
        })
        .collect();

    json!({
        "status": "ok",
        "totalResults": titles.len(),
        "articles": articles
    })
}
