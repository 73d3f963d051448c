use std::io;
use std::sync::Mutex;

use super::{LineLogger, LineState};
use crate::line_mode::LineMode;
use crate::timestamp::Timestamp;

impl<W> LineLogger<W> {
    /// Creates a logger with second-resolution local timestamps that
    /// terminates every line with a newline.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            state: Mutex::new(LineState {
                writer,
                line: Vec::new(),
            }),
            timestamp: Timestamp::default(),
            utc: false,
            line_mode: LineMode::default(),
        }
    }

    /// Selects the timestamp prepended to each line.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Renders timestamps in UTC instead of local time.
    #[must_use]
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Selects the newline policy applied to each line.
    #[must_use]
    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }
}

impl LineLogger<io::Stderr> {
    /// Creates a logger over the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> Default for LineLogger<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
