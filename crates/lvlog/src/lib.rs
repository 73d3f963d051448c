#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lvlog` is a leveled logging facade. A [`Logger`] wraps an underlying line
//! writer, tags each line with its severity and an optional component prefix,
//! and drops calls below the configured threshold. Thresholds live in a shared
//! [`Config`]: one global [`LogLevel`] plus per-component overrides keyed by
//! exact prefix.
//!
//! # Design
//!
//! - Loggers hold an explicit `Arc<Config>`; there is no global logger state.
//!   [`Logger::with_prefix`] derives a new logger sharing the same config and
//!   writer, so level changes made through any of them are seen by all.
//! - Output goes through the [`LineWriter`] trait from `lvlog-sink`. The
//!   default is a [`LineLogger`] on standard error that prefixes each line
//!   with a `YYYY/MM/DD HH:MM:SS` timestamp; tests typically use a
//!   [`SharedBuffer`] instead.
//! - Calls carrying only a pattern write it verbatim. Calls with arguments go
//!   through `format_args!`. The [`info_log!`], [`error_log!`] and
//!   [`debug_log!`] macros pick the right path and skip argument evaluation
//!   entirely when the level is disabled.
//!
//! # Invariants
//!
//! - Output lines have the layout `<timestamp> [<tag>] [<prefix>] <message>`;
//!   the prefix segment is absent when the prefix is empty.
//! - The effective threshold for a logger is the override registered for its
//!   exact prefix, or the global level otherwise. An empty prefix always uses
//!   the global level.
//! - Logging calls never fail or panic; sink errors are discarded.
//!
//! # Errors
//!
//! Only setup can fail: [`ParseLevelError`] for unknown level names and
//! [`ConfigError`] for malformed directives or (with the `serde` feature)
//! JSON configuration.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use lvlog::{Config, LineLogger, LogLevel, Logger, SharedBuffer, Timestamp, debug_log, info_log};
//!
//! let output = SharedBuffer::new();
//! let sink = LineLogger::new(output.clone()).with_timestamp(Timestamp::Disabled);
//! let config = Arc::new(Config::new(LogLevel::Error).with_component_level("db", LogLevel::Debug));
//!
//! let root = Logger::with_writer("", Arc::clone(&config), Arc::new(sink));
//! let db = root.with_prefix("db");
//! let api = root.with_prefix("api");
//!
//! debug_log!(db, "query took {}ms", 12);
//! debug_log!(api, "not shown");
//! info_log!(root, "not shown either");
//!
//! config.set_level(LogLevel::Info);
//! info_log!(api, "serving");
//!
//! assert_eq!(output.lines(), vec!["[dbg] [db] query took 12ms", "[inf] [api] serving"]);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`ConfigSnapshot`] and load configs from JSON.
//! - `tracing`: forward `tracing` events into a logger via `LoggerLayer`, and
//!   report config changes as `tracing` debug events under `lvlog::config`.

mod config;
mod level;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{Config, ConfigError, ConfigSnapshot};
pub use level::{LogLevel, ParseLevelError};
pub use logger::Logger;
pub use lvlog_sink::{LineLogger, LineMode, LineWriter, RawWriter, SharedBuffer, Timestamp};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter, try_init_tracing};
