//! crates/lvlog-sink/src/writer.rs
//! The line-writer capability and a raw `io::Write` handle over it.

use std::fmt;
use std::io;
use std::sync::Arc;

/// Destination for complete log lines.
///
/// Implementors receive either pre-formatted [`fmt::Arguments`] or a literal
/// string and are responsible for adding any line decoration (timestamps,
/// terminators) and for serializing concurrent callers. The trait is object
/// safe so loggers can share a single `Arc<dyn LineWriter>`.
pub trait LineWriter: Send + Sync {
    /// Renders `args` as one line.
    fn write_formatted(&self, args: fmt::Arguments<'_>) -> io::Result<()>;

    /// Writes `line` verbatim as one line.
    ///
    /// The default forwards through [`write_formatted`](Self::write_formatted);
    /// the text is inserted as a display argument, so it is never interpreted
    /// as a format string.
    fn write_literal(&self, line: &str) -> io::Result<()> {
        self.write_formatted(format_args!("{line}"))
    }

    /// Writes raw bytes to the underlying stream without line decoration.
    fn write_raw(&self, bytes: &[u8]) -> io::Result<()>;

    /// Flushes the underlying stream.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<T> LineWriter for Arc<T>
where
    T: LineWriter + ?Sized,
{
    fn write_formatted(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        (**self).write_formatted(args)
    }

    fn write_literal(&self, line: &str) -> io::Result<()> {
        (**self).write_literal(line)
    }

    fn write_raw(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_raw(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// [`io::Write`] handle that streams bytes straight into a shared [`LineWriter`].
///
/// This lets other consumers (a subprocess's captured output, a third-party
/// logger expecting a `Write`) share the same output stream as the leveled
/// logger. Bytes are forwarded without timestamps or newline handling, but each
/// `write` call is serialized with line writes.
#[derive(Clone)]
pub struct RawWriter {
    inner: Arc<dyn LineWriter>,
}

impl RawWriter {
    /// Wraps a shared line writer.
    #[must_use]
    pub fn new(inner: Arc<dyn LineWriter>) -> Self {
        Self { inner }
    }

    /// Returns the shared line writer backing this handle.
    #[must_use]
    pub fn line_writer(&self) -> &Arc<dyn LineWriter> {
        &self.inner
    }
}

impl fmt::Debug for RawWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawWriter").finish_non_exhaustive()
    }
}

impl io::Write for RawWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_raw(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
