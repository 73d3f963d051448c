//! crates/lvlog/src/logger.rs
//! The leveled, prefix-aware logging facade.

use std::fmt;
use std::sync::Arc;

use lvlog_sink::{LineLogger, LineWriter, RawWriter};

use crate::config::Config;
use crate::level::LogLevel;

/// Leveled logger carrying an optional component prefix.
///
/// A `Logger` is a cheap handle: the [`Config`] and the underlying
/// [`LineWriter`] are shared through `Arc`s, so cloning or deriving a logger
/// with [`with_prefix`](Self::with_prefix) never copies configuration. Every
/// logger derived from one root observes the same level changes.
///
/// Each emitted line has the layout
/// `<timestamp> [<tag>] [<prefix>] <message>`, where the prefix segment is
/// omitted entirely for an empty prefix and `<tag>` is `inf`, `err` or `dbg`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lvlog::{Config, LineLogger, LogLevel, Logger, SharedBuffer, Timestamp};
///
/// let output = SharedBuffer::new();
/// let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
/// let config = Arc::new(Config::new(LogLevel::Info));
/// let root = Logger::with_writer("", config, Arc::new(sink));
///
/// root.info("start");
/// root.debug("skipped");
/// root.with_prefix("db").error_fmt(format_args!("connection lost after {}s", 3));
///
/// assert_eq!(output.lines(), vec!["[inf] start", "[err] [db] connection lost after 3s"]);
/// ```
#[derive(Clone)]
pub struct Logger {
    prefix: String,
    config: Arc<Config>,
    base: Arc<dyn LineWriter>,
}

impl Logger {
    /// Creates a root logger writing timestamped lines to standard error.
    #[must_use]
    pub fn new(prefix: impl Into<String>, config: Arc<Config>) -> Self {
        Self::with_writer(prefix, config, Arc::new(LineLogger::stderr()))
    }

    /// Creates a root logger over an arbitrary [`LineWriter`].
    #[must_use]
    pub fn with_writer(
        prefix: impl Into<String>,
        config: Arc<Config>,
        base: Arc<dyn LineWriter>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            config,
            base,
        }
    }

    /// Derives a logger with a different prefix, sharing config and writer.
    ///
    /// The prefix is not validated; an empty prefix means "no prefix".
    #[must_use]
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            config: Arc::clone(&self.config),
            base: Arc::clone(&self.base),
        }
    }

    /// Returns this logger's prefix (possibly empty).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns the underlying line writer.
    #[must_use]
    pub fn line_writer(&self) -> &Arc<dyn LineWriter> {
        &self.base
    }

    /// Copies the global level of `config` into the shared configuration.
    ///
    /// Only the global level changes: existing per-component overrides stay in
    /// place and the shared [`Config`] itself is not replaced, so the update is
    /// visible to every logger sharing it.
    pub fn set_config(&self, config: &Config) {
        self.config.set_level(config.level());
    }

    /// Reports whether a message at `level` would be emitted by this logger.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.can_log(&self.prefix, level)
    }

    /// Returns an [`std::io::Write`] handle onto the underlying output stream.
    ///
    /// Bytes written through the handle bypass level filtering, tags and
    /// timestamps.
    #[must_use]
    pub fn writer(&self) -> RawWriter {
        RawWriter::new(Arc::clone(&self.base))
    }

    /// Logs `message` verbatim at `level`.
    pub fn log(&self, level: LogLevel, message: &str) {
        if self.is_enabled(level) {
            self.emit_literal(level, message);
        }
    }

    /// Logs pre-formatted arguments at `level`.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.emit_fmt(level, args);
        }
    }

    /// Logs `message` verbatim at [`LogLevel::Info`].
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs `message` verbatim at [`LogLevel::Error`].
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Logs `message` verbatim at [`LogLevel::Debug`].
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs formatted arguments at [`LogLevel::Info`].
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    /// Logs formatted arguments at [`LogLevel::Error`].
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    /// Logs formatted arguments at [`LogLevel::Debug`].
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    /// Writes a literal line without consulting the level. Used by the logging macros.
    #[doc(hidden)]
    pub fn emit_literal(&self, level: LogLevel, message: &str) {
        let mut line =
            String::with_capacity(level.tag().len() + self.prefix.len() + message.len() + 6);
        line.push('[');
        line.push_str(level.tag());
        line.push_str("] ");
        if !self.prefix.is_empty() {
            line.push('[');
            line.push_str(&self.prefix);
            line.push_str("] ");
        }
        line.push_str(message);
        // Logging never fails the caller; sink errors are dropped.
        let _ = self.base.write_literal(&line);
    }

    /// Writes a formatted line without consulting the level. Used by the logging macros.
    #[doc(hidden)]
    pub fn emit_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let _ = if self.prefix.is_empty() {
            self.base
                .write_formatted(format_args!("[{}] {}", level.tag(), args))
        } else {
            self.base
                .write_formatted(format_args!("[{}] [{}] {}", level.tag(), self.prefix, args))
        };
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvlog_sink::{SharedBuffer, Timestamp};

    fn capture(level: LogLevel) -> (Logger, SharedBuffer) {
        let output = SharedBuffer::new();
        let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
        let logger = Logger::with_writer("", Arc::new(Config::new(level)), Arc::new(sink));
        (logger, output)
    }

    #[test]
    fn literal_line_without_prefix() {
        let (logger, output) = capture(LogLevel::Debug);
        logger.debug("hello");
        assert_eq!(output.contents(), "[dbg] hello\n");
    }

    #[test]
    fn literal_line_with_prefix() {
        let (logger, output) = capture(LogLevel::Debug);
        logger.with_prefix("db").info("hello");
        assert_eq!(output.contents(), "[inf] [db] hello\n");
    }

    #[test]
    fn formatted_line_with_prefix() {
        let (logger, output) = capture(LogLevel::Debug);
        logger
            .with_prefix("api")
            .error_fmt(format_args!("status {}", 503));
        assert_eq!(output.contents(), "[err] [api] status 503\n");
    }

    #[test]
    fn suppressed_calls_write_nothing() {
        let (logger, output) = capture(LogLevel::Error);
        logger.info("no");
        logger.debug_fmt(format_args!("no {}", 1));
        assert!(output.is_empty());
    }

    #[test]
    fn with_prefix_shares_config_and_writer() {
        let (root, _output) = capture(LogLevel::Info);
        let child = root.with_prefix("db");

        assert!(Arc::ptr_eq(root.config(), child.config()));
        assert!(Arc::ptr_eq(root.line_writer(), child.line_writer()));
        assert_eq!(child.prefix(), "db");
        assert_eq!(root.prefix(), "");
    }

    #[test]
    fn set_config_copies_only_global_level() {
        let (root, _output) = capture(LogLevel::Info);
        root.config().set_component_level("db", LogLevel::Debug);

        let replacement = Config::new(LogLevel::Error).with_component_level("db", LogLevel::Error);
        root.set_config(&replacement);

        assert_eq!(root.config().level(), LogLevel::Error);
        assert_eq!(root.config().component_level("db"), Some(LogLevel::Debug));
    }

    #[test]
    fn debug_output_omits_writer() {
        let (logger, _output) = capture(LogLevel::Info);
        let rendered = format!("{:?}", logger.with_prefix("db"));
        assert!(rendered.starts_with("Logger { prefix: \"db\""));
        assert!(rendered.ends_with(".. }"));
    }
}
