//! crates/lvlog/src/macros.rs
//! Level-checked logging macros.
//!
//! The macros test the logger's effective level before building anything, so
//! the arguments of a suppressed call are never evaluated. A call with only a
//! pattern writes it verbatim; braces in it are not format placeholders.

/// Shared expansion behind the level macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __lvlog_emit {
    ($logger:expr, $level:expr, $pattern:literal $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($level) {
            logger.emit_literal($level, $pattern);
        }
    }};
    ($logger:expr, $level:expr, $pattern:literal, $($arg:tt)+) => {{
        let logger = &$logger;
        if logger.is_enabled($level) {
            logger.emit_fmt($level, ::std::format_args!($pattern, $($arg)+));
        }
    }};
    ($logger:expr, $level:expr, $message:expr $(,)?) => {{
        let logger = &$logger;
        if logger.is_enabled($level) {
            logger.emit_literal($level, ::core::convert::AsRef::<str>::as_ref(&$message));
        }
    }};
}

/// Logs at [`LogLevel::Info`](crate::LogLevel::Info).
///
/// ```
/// use std::sync::Arc;
/// use lvlog::{info_log, Config, LineLogger, LogLevel, Logger, SharedBuffer, Timestamp};
///
/// let output = SharedBuffer::new();
/// let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
/// let logger = Logger::with_writer("db", Arc::new(Config::default()), Arc::new(sink));
///
/// info_log!(logger, "pool ready: {} connections", 8);
/// info_log!(logger, "100% {literal}");
///
/// assert_eq!(output.lines(), vec!["[inf] [db] pool ready: 8 connections", "[inf] [db] 100% {literal}"]);
/// ```
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__lvlog_emit!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

/// Logs at [`LogLevel::Error`](crate::LogLevel::Error).
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__lvlog_emit!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

/// Logs at [`LogLevel::Debug`](crate::LogLevel::Debug).
///
/// ```
/// use std::sync::Arc;
/// use lvlog::{debug_log, Config, LineLogger, LogLevel, Logger, SharedBuffer, Timestamp};
///
/// let output = SharedBuffer::new();
/// let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
/// let logger = Logger::with_writer("", Arc::new(Config::new(LogLevel::Info)), Arc::new(sink));
///
/// let mut evaluated = false;
/// debug_log!(logger, "expensive: {}", { evaluated = true; 42 });
///
/// assert!(!evaluated);
/// assert!(output.is_empty());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__lvlog_emit!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}
