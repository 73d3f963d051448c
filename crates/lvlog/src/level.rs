//! crates/lvlog/src/level.rs
//! Severity levels and the threshold predicate.

use std::fmt;
use std::str::FromStr;

/// Ordered message severity, `Debug < Info < Error`.
///
/// A level doubles as a threshold: a logger configured at [`LogLevel::Info`]
/// emits `Info` and `Error` messages and suppresses `Debug`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose diagnostics for developers.
    #[cfg_attr(feature = "serde", serde(alias = "dbg", alias = "DEBUG", alias = "Debug"))]
    Debug = 0,
    /// Routine operational messages.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "inf", alias = "INFO", alias = "Info"))]
    Info = 1,
    /// Failures that need attention.
    #[cfg_attr(feature = "serde", serde(alias = "err", alias = "ERROR", alias = "Error"))]
    Error = 2,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [Self; 3] = [Self::Debug, Self::Info, Self::Error];

    /// Reports whether a message at `target` passes a threshold of `self`.
    ///
    /// ```
    /// use lvlog::LogLevel;
    ///
    /// assert!(LogLevel::Info.can_log(LogLevel::Error));
    /// assert!(LogLevel::Info.can_log(LogLevel::Info));
    /// assert!(!LogLevel::Info.can_log(LogLevel::Debug));
    /// ```
    #[must_use]
    pub const fn can_log(self, target: Self) -> bool {
        target as u8 >= self as u8
    }

    /// Three-letter tag rendered in output lines (`dbg`, `inf`, `err`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "dbg",
            Self::Info => "inf",
            Self::Error => "err",
        }
    }

    /// Lowercase level name (`debug`, `info`, `error`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Values above the highest level saturate to [`LogLevel::Error`].
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?} (expected debug, info or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name or tag, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| {
                name.eq_ignore_ascii_case(level.as_str()) || name.eq_ignore_ascii_case(level.tag())
            })
            .ok_or_else(|| ParseLevelError(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);
        let mut shuffled = [LogLevel::Error, LogLevel::Debug, LogLevel::Info];
        shuffled.sort();
        assert_eq!(shuffled, LogLevel::ALL);
    }

    #[test]
    fn debug_threshold_logs_everything() {
        for level in LogLevel::ALL {
            assert!(LogLevel::Debug.can_log(level));
        }
    }

    #[test]
    fn error_threshold_logs_only_errors() {
        assert!(!LogLevel::Error.can_log(LogLevel::Debug));
        assert!(!LogLevel::Error.can_log(LogLevel::Info));
        assert!(LogLevel::Error.can_log(LogLevel::Error));
    }

    #[test]
    fn tags_match_output_format() {
        assert_eq!(LogLevel::Debug.tag(), "dbg");
        assert_eq!(LogLevel::Info.tag(), "inf");
        assert_eq!(LogLevel::Error.tag(), "err");
    }

    #[test]
    fn parse_accepts_names_and_tags() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("INF".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" Error ".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert_eq!("err".parse::<LogLevel>(), Ok(LogLevel::Error));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "warn".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLevelError("warn".to_owned()));
        assert_eq!(
            err.to_string(),
            "unknown log level: \"warn\" (expected debug, info or error)"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn u8_conversion_saturates() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level.as_u8()), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
