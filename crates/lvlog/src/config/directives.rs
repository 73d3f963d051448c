//! crates/lvlog/src/config/directives.rs
//! Textual level directives such as `info,db=debug,api=error`.

use std::str::FromStr;

use super::{Config, ConfigError};
use crate::level::LogLevel;

#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    Global(LogLevel),
    Component(&'a str, LogLevel),
}

fn parse_level(directive: &str, name: &str) -> Result<LogLevel, ConfigError> {
    name.parse().map_err(|source| ConfigError::UnknownLevel {
        directive: directive.to_owned(),
        source,
    })
}

/// Parse a single token (e.g., "debug", "db=debug").
fn parse_directive(token: &str) -> Result<Directive<'_>, ConfigError> {
    match token.split_once('=') {
        None => parse_level(token, token).map(Directive::Global),
        Some((component, level)) => {
            let component = component.trim();
            if component.is_empty() {
                return Err(ConfigError::EmptyComponent {
                    directive: token.to_owned(),
                });
            }
            Ok(Directive::Component(component, parse_level(token, level)?))
        }
    }
}

fn parse_directives(directives: &str) -> Result<Vec<Directive<'_>>, ConfigError> {
    directives
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_directive)
        .collect()
}

impl Config {
    /// Applies a comma-separated list of level directives.
    ///
    /// A bare level (`info`) sets the global level; `name=level` sets the
    /// override for component `name`. Tokens are trimmed and empty tokens are
    /// ignored. Every token is validated before anything is applied, so a
    /// malformed list leaves the configuration unchanged. Later tokens win
    /// over earlier ones.
    ///
    /// ```
    /// use lvlog::{Config, LogLevel};
    ///
    /// let config = Config::default();
    /// config.apply_directives("error, db=debug")?;
    ///
    /// assert_eq!(config.level(), LogLevel::Error);
    /// assert_eq!(config.component_level("db"), Some(LogLevel::Debug));
    /// assert!(config.apply_directives("db=loud").is_err());
    /// # Ok::<(), lvlog::ConfigError>(())
    /// ```
    pub fn apply_directives(&self, directives: &str) -> Result<(), ConfigError> {
        for directive in parse_directives(directives)? {
            match directive {
                Directive::Global(level) => self.set_level(level),
                Directive::Component(component, level) => {
                    self.set_component_level(component, level);
                }
            }
        }
        Ok(())
    }

    /// Builds a configuration from directives on top of [`Config::default`].
    pub fn from_directives(directives: &str) -> Result<Self, ConfigError> {
        let config = Self::default();
        config.apply_directives(directives)?;
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_directives(s)
    }
}
