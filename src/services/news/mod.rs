//! News service for headline lookup.

mod service;

pub use service::{NewsService, NewsServiceImpl, EVERYTHING_PATH};
