//! Request and response types.

pub mod classification;
pub mod news;

pub use classification::{ClassificationRequest, ClassificationResponse, ClassificationResult};
pub use news::{Article, ArticleSource, EverythingResponse, Headline, NewsErrorResponse};
