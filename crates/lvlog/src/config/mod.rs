//! crates/lvlog/src/config/mod.rs
//! Shared level configuration: a global threshold plus per-component overrides.
//!
//! # Data Flow
//! ```text
//! Config::new / directives / JSON snapshot
//!     → Arc<Config> handed to the root Logger
//!     → shared by every Logger derived through with_prefix
//!     → set_level / set_component_level visible to all of them
//! ```
//!
//! # Design Decisions
//! - The global level is one atomic byte, so readers never see a torn value
//! - Overrides live in a concurrent map and match prefixes exactly
//! - An empty prefix always resolves to the global level

mod directives;
mod snapshot;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU8, Ordering};

use dashmap::DashMap;

use crate::level::{LogLevel, ParseLevelError};

pub use snapshot::ConfigSnapshot;

/// Error type for building or updating a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A `name=level` directive had an empty component name.
    #[error("invalid directive {directive:?}: component name is empty")]
    EmptyComponent {
        /// The offending directive.
        directive: String,
    },

    /// A directive named a level that does not exist.
    #[error("invalid directive {directive:?}: {source}")]
    UnknownLevel {
        /// The offending directive.
        directive: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },

    /// A JSON configuration document could not be decoded.
    #[cfg(feature = "serde")]
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[cfg(feature = "serde")]
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Level configuration shared by every logger derived from one root.
///
/// # Examples
///
/// ```
/// use lvlog::{Config, LogLevel};
///
/// let config = Config::new(LogLevel::Error).with_component_level("db", LogLevel::Debug);
///
/// assert_eq!(config.effective_level("db"), LogLevel::Debug);
/// assert_eq!(config.effective_level("api"), LogLevel::Error);
/// assert_eq!(config.effective_level(""), LogLevel::Error);
/// ```
#[derive(Debug)]
pub struct Config {
    level: AtomicU8,
    component_level: DashMap<String, LogLevel>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Config {
    /// Creates a configuration with the given global level and no overrides.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level.as_u8()),
            component_level: DashMap::new(),
        }
    }

    /// Adds a per-component override, replacing any previous one for `prefix`.
    #[must_use]
    pub fn with_component_level(self, prefix: impl Into<String>, level: LogLevel) -> Self {
        self.component_level.insert(prefix.into(), level);
        self
    }

    /// Returns the global level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire))
    }

    /// Replaces the global level. Per-component overrides are untouched.
    pub fn set_level(&self, level: LogLevel) {
        let previous = LogLevel::from_u8(self.level.swap(level.as_u8(), Ordering::AcqRel));
        if previous != level {
            events::level_changed(previous, level);
        }
    }

    /// Returns the override registered for exactly `prefix`, if any.
    #[must_use]
    pub fn component_level(&self, prefix: &str) -> Option<LogLevel> {
        self.component_level.get(prefix).map(|entry| *entry.value())
    }

    /// Registers or replaces the override for `prefix`.
    pub fn set_component_level(&self, prefix: impl Into<String>, level: LogLevel) {
        let prefix = prefix.into();
        events::component_set(&prefix, level);
        self.component_level.insert(prefix, level);
    }

    /// Removes the override for `prefix`, returning it if one was registered.
    pub fn remove_component_level(&self, prefix: &str) -> Option<LogLevel> {
        let removed = self.component_level.remove(prefix).map(|(_, level)| level);
        if removed.is_some() {
            events::component_removed(prefix);
        }
        removed
    }

    /// Returns a sorted copy of all per-component overrides.
    #[must_use]
    pub fn component_levels(&self) -> BTreeMap<String, LogLevel> {
        self.component_level
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Resolves the threshold applied to a logger with `prefix`.
    ///
    /// An empty prefix uses the global level. Otherwise an override registered
    /// for exactly `prefix` wins; any other prefix falls back to the global
    /// level. There is no hierarchical matching: an override for `"db"` does not
    /// apply to `"db.pool"`.
    #[must_use]
    pub fn effective_level(&self, prefix: &str) -> LogLevel {
        if prefix.is_empty() {
            return self.level();
        }
        self.component_level(prefix).unwrap_or_else(|| self.level())
    }

    /// Reports whether a message at `level` from a logger with `prefix` is emitted.
    #[must_use]
    pub fn can_log(&self, prefix: &str, level: LogLevel) -> bool {
        self.effective_level(prefix).can_log(level)
    }
}

#[cfg(feature = "tracing")]
mod events {
    use crate::level::LogLevel;

    const TARGET: &str = "lvlog::config";

    pub(super) fn level_changed(from: LogLevel, to: LogLevel) {
        tracing::debug!(target: TARGET, %from, %to, "global log level changed");
    }

    pub(super) fn component_set(component: &str, level: LogLevel) {
        tracing::debug!(target: TARGET, component, %level, "component log level set");
    }

    pub(super) fn component_removed(component: &str) {
        tracing::debug!(target: TARGET, component, "component log level removed");
    }
}

#[cfg(not(feature = "tracing"))]
mod events {
    use crate::level::LogLevel;

    pub(super) const fn level_changed(_from: LogLevel, _to: LogLevel) {}

    pub(super) const fn component_set(_component: &str, _level: LogLevel) {}

    pub(super) const fn component_removed(_component: &str) {}
}
