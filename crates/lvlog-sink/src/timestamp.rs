//! crates/lvlog-sink/src/timestamp.rs
//! Timestamp prefixes rendered at the start of every line.

use std::io::Write;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const SECONDS_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

const MICROSECONDS_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:6]"
);

/// Selects the timestamp a [`LineLogger`](crate::LineLogger) prepends to each line.
///
/// The default, [`Timestamp::Seconds`], renders `YYYY/MM/DD HH:MM:SS` followed
/// by a single space, the conventional layout of process log lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Timestamp {
    /// Do not prefix lines with a timestamp.
    Disabled,
    /// `YYYY/MM/DD HH:MM:SS`.
    #[default]
    Seconds,
    /// `YYYY/MM/DD HH:MM:SS.uuuuuu`.
    Microseconds,
}

impl Timestamp {
    /// Renders the current time into `line`, followed by a separating space.
    ///
    /// Local time is used unless `utc` is set. When the local offset cannot be
    /// determined (for example in a multi-threaded process on some Unix
    /// platforms) the timestamp falls back to UTC.
    pub(crate) fn render_now(self, utc: bool, line: &mut Vec<u8>) {
        if self == Self::Disabled {
            return;
        }
        let now = if utc {
            OffsetDateTime::now_utc()
        } else {
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
        };
        self.render_at(now, line);
    }

    pub(crate) fn render_at(self, at: OffsetDateTime, line: &mut Vec<u8>) {
        let format = match self {
            Self::Disabled => return,
            Self::Seconds => SECONDS_FORMAT,
            Self::Microseconds => MICROSECONDS_FORMAT,
        };
        // Formatting a complete date into a Vec cannot fail; an error would only
        // drop the timestamp, never the line.
        if at.format_into(line, format).is_ok() {
            let _ = line.write_all(b" ");
        }
    }
}
