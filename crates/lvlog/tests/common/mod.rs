//! Shared helpers for lvlog integration tests.

use std::sync::Arc;

use lvlog::{Config, LineLogger, Logger, SharedBuffer, Timestamp};

/// Builds a logger over an untimestamped in-memory sink.
#[allow(dead_code)]
pub fn capture(prefix: &str, config: Config) -> (Logger, SharedBuffer) {
    capture_shared(prefix, Arc::new(config))
}

/// Like [`capture`] but reuses an existing shared config.
#[allow(dead_code)]
pub fn capture_shared(prefix: &str, config: Arc<Config>) -> (Logger, SharedBuffer) {
    let output = SharedBuffer::new();
    let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
    (Logger::with_writer(prefix, config, Arc::new(sink)), output)
}
