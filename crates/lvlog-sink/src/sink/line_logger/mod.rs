use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;
use crate::timestamp::Timestamp;

/// Timestamping line logger over an [`std::io::Write`] target.
///
/// The logger owns the writer together with a reusable line buffer, both
/// guarded by one mutex. Each line is rendered into the buffer (timestamp,
/// message, terminator) and then handed to the writer with a single
/// `write_all`, so lines from concurrent callers never interleave.
///
/// # Examples
///
/// ```
/// use lvlog_sink::{LineLogger, LineWriter, SharedBuffer, Timestamp};
///
/// let buffer = SharedBuffer::new();
/// let sink = LineLogger::new(buffer.clone()).with_timestamp(Timestamp::Disabled);
/// sink.write_formatted(format_args!("{} + {} = {}", 1, 2, 3))?;
///
/// assert_eq!(buffer.contents(), "1 + 2 = 3\n");
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Lines that already end with a newline are not terminated twice:
///
/// ```
/// use lvlog_sink::{LineLogger, LineWriter, SharedBuffer, Timestamp};
///
/// let buffer = SharedBuffer::new();
/// let sink = LineLogger::new(buffer.clone()).with_timestamp(Timestamp::Disabled);
/// sink.write_literal("done\n")?;
///
/// assert_eq!(buffer.contents(), "done\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineLogger<W> {
    state: Mutex<LineState<W>>,
    timestamp: Timestamp,
    utc: bool,
    line_mode: LineMode,
}

struct LineState<W> {
    writer: W,
    line: Vec<u8>,
}

mod constructors;
mod mapping;
mod writing;

impl<W> LineLogger<W> {
    fn lock(&self) -> MutexGuard<'_, LineState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the configured [`Timestamp`].
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Reports whether timestamps are rendered in UTC instead of local time.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.utc
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }
}

impl<W> fmt::Debug for LineLogger<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("LineLogger")
            .field("writer", &state.writer)
            .field("timestamp", &self.timestamp)
            .field("utc", &self.utc)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
