//! crates/lvlog/src/config/snapshot.rs
//! Plain-data view of a [`Config`] for serialization and bulk construction.

use std::collections::BTreeMap;

use super::Config;
#[cfg(feature = "serde")]
use super::ConfigError;
use crate::level::LogLevel;

/// Owned, point-in-time copy of a [`Config`].
///
/// With the `serde` feature enabled the snapshot (de)serializes as
/// `{"level": "info", "component_level": {"db": "debug"}}`; the field names
/// `Level` and `ComponentLevel` are accepted as aliases. Missing fields take
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigSnapshot {
    /// Global level.
    #[cfg_attr(feature = "serde", serde(alias = "Level"))]
    pub level: LogLevel,
    /// Per-component overrides keyed by exact prefix.
    #[cfg_attr(feature = "serde", serde(alias = "ComponentLevel"))]
    pub component_level: BTreeMap<String, LogLevel>,
}

impl Config {
    /// Copies the current global level and overrides.
    #[must_use]
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            level: self.level(),
            component_level: self.component_levels(),
        }
    }

    /// Builds a configuration from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: ConfigSnapshot) -> Self {
        snapshot
            .component_level
            .into_iter()
            .fold(Self::new(snapshot.level), |config, (prefix, level)| {
                config.with_component_level(prefix, level)
            })
    }

    /// Decodes a configuration from a JSON document.
    ///
    /// ```
    /// use lvlog::{Config, LogLevel};
    ///
    /// let config = Config::from_json_str(r#"{"Level": "error", "ComponentLevel": {"db": "debug"}}"#)?;
    /// assert_eq!(config.level(), LogLevel::Error);
    /// assert_eq!(config.component_level("db"), Some(LogLevel::Debug));
    /// # Ok::<(), lvlog::ConfigError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let snapshot: ConfigSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Decodes a configuration from a JSON stream.
    #[cfg(feature = "serde")]
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, ConfigError> {
        let snapshot: ConfigSnapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Reads and decodes a JSON configuration file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl From<ConfigSnapshot> for Config {
    fn from(snapshot: ConfigSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_config() {
        let mut component_level = BTreeMap::new();
        component_level.insert("db".to_owned(), LogLevel::Debug);
        component_level.insert("api".to_owned(), LogLevel::Error);
        let snapshot = ConfigSnapshot {
            level: LogLevel::Info,
            component_level,
        };

        let config = Config::from(snapshot.clone());
        assert_eq!(config.snapshot(), snapshot);
    }

    #[test]
    fn snapshot_is_detached_from_config() {
        let config = Config::new(LogLevel::Info);
        let snapshot = config.snapshot();
        config.set_level(LogLevel::Error);
        config.set_component_level("db", LogLevel::Debug);

        assert_eq!(snapshot.level, LogLevel::Info);
        assert!(snapshot.component_level.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_accepts_snake_case_fields() {
        let config =
            Config::from_json_str(r#"{"level": "debug", "component_level": {"api": "err"}}"#)
                .unwrap();
        assert_eq!(config.level(), LogLevel::Debug);
        assert_eq!(config.component_level("api"), Some(LogLevel::Error));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_missing_fields_use_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config.snapshot(), ConfigSnapshot::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_rejects_unknown_level() {
        let err = Config::from_json_str(r#"{"level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_serializes_lowercase_levels() {
        let config = Config::new(LogLevel::Error).with_component_level("db", LogLevel::Debug);
        let json = serde_json::to_string(&config.snapshot()).unwrap();
        assert_eq!(json, r#"{"level":"error","component_level":{"db":"debug"}}"#);
    }
}
