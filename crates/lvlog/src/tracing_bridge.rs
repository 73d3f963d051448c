//! crates/lvlog/src/tracing_bridge.rs
//! Bridge from the tracing crate into a [`Logger`].
//!
//! Libraries instrumented with `tracing` can share the leveled logger's output
//! stream and level configuration. [`LoggerLayer`] is a tracing-subscriber
//! layer that converts each event into one logger line:
//!
//! - `ERROR` and `WARN` map to [`LogLevel::Error`], `INFO` to
//!   [`LogLevel::Info`], `DEBUG` and `TRACE` to [`LogLevel::Debug`]
//! - the logger's [`Config`](crate::Config) decides whether the line is emitted
//! - optionally, the event target becomes the line's prefix, so per-component
//!   overrides can be keyed by tracing target
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lvlog::{Config, LogLevel, Logger, init_tracing};
//!
//! let logger = Logger::new("", Arc::new(Config::new(LogLevel::Info)));
//! init_tracing(logger);
//!
//! tracing::info!(port = 8080, "listening");
//! ```

use std::fmt::{self, Write};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::level::LogLevel;
use crate::logger::Logger;

/// A tracing layer that writes events through a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Logger,
    target_prefix: bool,
}

impl LoggerLayer {
    /// Creates a layer emitting every event under `logger`'s own prefix.
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            target_prefix: false,
        }
    }

    /// Uses each event's target (for example `app::db`) as the line prefix.
    #[must_use]
    pub fn with_target_prefix(mut self, enabled: bool) -> Self {
        self.target_prefix = enabled;
        self
    }

    /// Returns the logger events are written to.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a tracing level to a log level.
    const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR | Level::WARN => LogLevel::Error,
            Level::INFO => LogLevel::Info,
            Level::DEBUG | Level::TRACE => LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        let prefix = if self.target_prefix {
            metadata.target()
        } else {
            self.logger.prefix()
        };

        if !self.logger.config().can_log(prefix, level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let line = visitor.into_line();

        if self.target_prefix && prefix != self.logger.prefix() {
            self.logger.with_prefix(prefix).emit_literal(level, &line);
        } else {
            self.logger.emit_literal(level, &line);
        }
    }
}

/// Collects an event's message followed by its other fields as `key=value`.
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl EventVisitor {
    fn into_line(self) -> String {
        let Self {
            mut message,
            fields,
        } = self;
        if message.is_empty() {
            return fields;
        }
        if !fields.is_empty() {
            message.push(' ');
            message.push_str(&fields);
        }
        message
    }

    fn field_separator(&mut self) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
    }
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.field_separator();
            let _ = write!(self.fields, "{}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.field_separator();
            let _ = write!(self.fields, "{}={value}", field.name());
        }
    }
}

/// Install a [`LoggerLayer`] as the global default subscriber.
///
/// Panics if a global subscriber has already been set; see
/// [`try_init_tracing`] for a fallible variant.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use lvlog::{Config, Logger, init_tracing};
///
/// init_tracing(Logger::new("", Arc::new(Config::default())));
/// tracing::error!(target: "db", "connection lost");
/// ```
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}

/// Install a [`LoggerLayer`] as the global default subscriber, reporting
/// failure instead of panicking.
pub fn try_init_tracing(
    logger: Logger,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}

/// Install a [`LoggerLayer`] behind an additional filter layer.
///
/// This allows combining the logger's level configuration with standard
/// tracing filters, for example to drop noisy dependencies by target.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use lvlog::{Config, Logger, init_tracing_with_filter};
/// use tracing_subscriber::filter::{LevelFilter, Targets};
///
/// let logger = Logger::new("", Arc::new(Config::default()));
/// let filter = Targets::new()
///     .with_target("hyper", LevelFilter::WARN)
///     .with_default(LevelFilter::TRACE);
/// init_tracing_with_filter(logger, filter);
/// ```
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::new(logger))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_level() {
        assert_eq!(LoggerLayer::map_level(&Level::ERROR), LogLevel::Error);
        assert_eq!(LoggerLayer::map_level(&Level::WARN), LogLevel::Error);
        assert_eq!(LoggerLayer::map_level(&Level::INFO), LogLevel::Info);
        assert_eq!(LoggerLayer::map_level(&Level::DEBUG), LogLevel::Debug);
        assert_eq!(LoggerLayer::map_level(&Level::TRACE), LogLevel::Debug);
    }

    #[test]
    fn visitor_line_without_fields_is_message() {
        let visitor = EventVisitor {
            message: "ready".to_owned(),
            fields: String::new(),
        };
        assert_eq!(visitor.into_line(), "ready");
    }

    #[test]
    fn visitor_line_appends_fields() {
        let visitor = EventVisitor {
            message: "ready".to_owned(),
            fields: "port=8080 tls=true".to_owned(),
        };
        assert_eq!(visitor.into_line(), "ready port=8080 tls=true");
    }

    #[test]
    fn visitor_line_without_message_is_fields() {
        let visitor = EventVisitor {
            message: String::new(),
            fields: "port=8080".to_owned(),
        };
        assert_eq!(visitor.into_line(), "port=8080");
    }
}
