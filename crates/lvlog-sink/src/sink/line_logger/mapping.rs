use std::mem;
use std::sync::PoisonError;

use super::LineLogger;

impl<W> LineLogger<W> {
    /// Replaces the underlying writer, returning the previous one.
    ///
    /// The swap happens under the sink's lock, so a line is written either
    /// entirely to the old destination or entirely to the new one. The reusable
    /// line buffer is kept.
    #[must_use = "the returned writer may hold output produced before the replacement"]
    pub fn replace_writer(&self, writer: W) -> W {
        let mut state = self.lock();
        mem::replace(&mut state.writer, writer)
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut state = self.lock();
        f(&mut state.writer)
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}
