//! Types for the sentiment classification endpoint.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::errors::{SentimentError, SentimentResult};

/// Range a classification score must fall in.
pub const SCORE_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Classification request body: `{"inputs": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Text to classify. Passed through verbatim.
    pub inputs: String,
}

impl ClassificationRequest {
    /// Create a request for a single text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            inputs: text.into(),
        }
    }
}

/// A label with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Class label, e.g. `POSITIVE` or `NEGATIVE`.
    pub label: String,
    /// Confidence score in `[0, 1]`.
    pub score: f64,
}

impl ClassificationResult {
    /// Create a new result.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Label with the first letter upper-cased and the rest lower-cased,
    /// e.g. `POSITIVE` becomes `Positive`.
    pub fn display_label(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Score as a whole percentage, rounding halves to even (`0.625` is
    /// `62`). Scores outside [`SCORE_RANGE`] are clamped to it.
    pub fn confidence_percent(&self) -> i64 {
        let score = self.score.clamp(*SCORE_RANGE.start(), *SCORE_RANGE.end());
        #[allow(clippy::cast_possible_truncation)]
        let percent = (score * 100.0).round_ties_even() as i64;
        percent
    }
}

/// Success body of the classification endpoint.
///
/// The hosted inference API wraps the scores for a single input in an outer
/// list (`[[{..}, {..}]]`); other deployments return the flat list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassificationResponse {
    /// `[{"label": .., "score": ..}, ..]`
    Flat(Vec<ClassificationResult>),
    /// `[[{"label": .., "score": ..}, ..], ..]`
    Nested(Vec<Vec<ClassificationResult>>),
}

impl ClassificationResponse {
    /// Decodes a response body.
    pub fn from_slice(body: &[u8]) -> SentimentResult<Self> {
        serde_json::from_slice(body).map_err(|e| {
            SentimentError::parse(format!(
                "Expected a JSON array of {{label, score}} objects: {e}"
            ))
        })
    }

    /// Returns the highest-scoring candidate. Ties go to the entry listed
    /// first.
    pub fn into_top(self) -> SentimentResult<ClassificationResult> {
        let candidates = match self {
            ClassificationResponse::Flat(results) => results,
            ClassificationResponse::Nested(batches) => {
                batches.into_iter().next().unwrap_or_default()
            }
        };
        select_top(candidates)
    }
}

/// Picks the entry with the maximum score, keeping the first on ties.
///
/// Fails if there are no entries or any score is outside [`SCORE_RANGE`].
pub fn select_top(
    candidates: impl IntoIterator<Item = ClassificationResult>,
) -> SentimentResult<ClassificationResult> {
    let mut best: Option<ClassificationResult> = None;
    for candidate in candidates {
        if !SCORE_RANGE.contains(&candidate.score) {
            return Err(SentimentError::parse(format!(
                "Score {} for label '{}' is outside [0, 1]",
                candidate.score, candidate.label
            )));
        }
        best = match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        };
    }
    best.ok_or_else(|| SentimentError::parse("Response contained no classifications"))
}
