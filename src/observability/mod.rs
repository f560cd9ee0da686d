//! Observability module.
//!
//! The library itself only emits `tracing` events; applications install a
//! subscriber with [`LoggingConfig::init`].

mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
