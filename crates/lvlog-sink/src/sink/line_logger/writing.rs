use std::fmt;
use std::io::{self, Write};

use super::{LineLogger, LineState};
use crate::writer::LineWriter;

/// Inserted when a `Display` implementation fails partway through a line.
const BAD_FORMAT_MARKER: &[u8] = b"%!(BADFMT)";

/// Line buffers that grew past this capacity are released after the write.
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// `fmt::Write` view of the line buffer.
///
/// Formatting errors from `Display` impls surface as `Err` here instead of the
/// panic `io::Write::write_fmt` raises when the sink itself did not fail.
struct LineBuf<'a>(&'a mut Vec<u8>);

impl fmt::Write for LineBuf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl<W> LineLogger<W>
where
    W: Write,
{
    fn emit(&self, render: impl FnOnce(&mut Vec<u8>)) -> io::Result<()> {
        let mut state = self.lock();
        let LineState { writer, line } = &mut *state;

        line.clear();
        self.timestamp.render_now(self.utc, line);
        render(line);
        self.line_mode.terminate(line);

        let result = writer.write_all(line);
        if line.capacity() > MAX_RETAINED_CAPACITY {
            *line = Vec::new();
        }
        result
    }
}

impl<W> LineWriter for LineLogger<W>
where
    W: Write + Send,
{
    fn write_formatted(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.emit(|line| {
            if fmt::write(&mut LineBuf(line), args).is_err() {
                line.extend_from_slice(BAD_FORMAT_MARKER);
            }
        })
    }

    fn write_literal(&self, text: &str) -> io::Result<()> {
        self.emit(|line| line.extend_from_slice(text.as_bytes()))
    }

    fn write_raw(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock().writer.write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_mode::LineMode;
    use crate::shared_buffer::SharedBuffer;
    use crate::timestamp::Timestamp;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("half")?;
            Err(fmt::Error)
        }
    }

    fn plain(buffer: &SharedBuffer) -> LineLogger<SharedBuffer> {
        LineLogger::new(buffer.clone()).with_timestamp(Timestamp::Disabled)
    }

    #[test]
    fn formatted_line_is_terminated() {
        let buffer = SharedBuffer::new();
        plain(&buffer)
            .write_formatted(format_args!("value={}", 7))
            .expect("write succeeds");
        assert_eq!(buffer.contents(), "value=7\n");
    }

    #[test]
    fn failing_display_leaves_marker() {
        let buffer = SharedBuffer::new();
        plain(&buffer)
            .write_formatted(format_args!("[err] {}", Failing))
            .expect("write succeeds");
        assert_eq!(buffer.contents(), "[err] half%!(BADFMT)\n");
    }

    #[test]
    fn failing_display_does_not_poison_sink() {
        let buffer = SharedBuffer::new();
        let sink = plain(&buffer);
        sink.write_formatted(format_args!("{}", Failing))
            .expect("write succeeds");
        sink.write_formatted(format_args!("next {}", 1))
            .expect("write succeeds");

        assert!(!sink.state.is_poisoned());
        assert_eq!(buffer.lines(), vec!["half%!(BADFMT)", "next 1"]);
    }

    #[test]
    fn with_writer_grants_exclusive_access() {
        let sink = LineLogger::new(Vec::new()).with_timestamp(Timestamp::Disabled);
        sink.write_literal("first").expect("write succeeds");

        let len = sink.with_writer(|writer| {
            writer.extend_from_slice(b"inline\n");
            writer.len()
        });
        sink.write_literal("second").expect("write succeeds");

        assert_eq!(len, "first\ninline\n".len());
        assert_eq!(sink.into_inner(), b"first\ninline\nsecond\n");
    }

    #[test]
    fn without_newline_mode_leaves_line_open() {
        let buffer = SharedBuffer::new();
        let sink = plain(&buffer).with_line_mode(LineMode::WithoutNewline);
        sink.write_literal("a").expect("write succeeds");
        sink.write_literal("b").expect("write succeeds");
        assert_eq!(buffer.contents(), "ab");
    }

    #[test]
    fn raw_bytes_skip_timestamp_and_terminator() {
        let buffer = SharedBuffer::new();
        let sink = LineLogger::new(buffer.clone());
        sink.write_raw(b"raw").expect("write succeeds");
        assert_eq!(buffer.contents(), "raw");
    }

    #[test]
    fn timestamp_precedes_message() {
        let buffer = SharedBuffer::new();
        let sink = LineLogger::new(buffer.clone()).with_utc(true);
        sink.write_literal("[inf] start").expect("write succeeds");

        let output = buffer.contents();
        assert!(output.ends_with(" [inf] start\n"));
        assert_eq!(output.len(), "YYYY/MM/DD HH:MM:SS ".len() + "[inf] start\n".len());
    }

    #[test]
    fn oversized_buffer_is_released() {
        let buffer = SharedBuffer::new();
        let sink = plain(&buffer);
        let big = "x".repeat(MAX_RETAINED_CAPACITY * 2);
        sink.write_literal(&big).expect("write succeeds");

        assert_eq!(buffer.to_vec().len(), big.len() + 1);
        assert_eq!(sink.lock().line.capacity(), 0);
    }

    #[test]
    fn replace_writer_redirects_subsequent_lines() {
        let first = SharedBuffer::new();
        let second = SharedBuffer::new();
        let sink = plain(&first);

        sink.write_literal("before").expect("write succeeds");
        let previous = sink.replace_writer(second.clone());
        sink.write_literal("after").expect("write succeeds");

        assert_eq!(previous.contents(), "before\n");
        assert_eq!(first.contents(), "before\n");
        assert_eq!(second.contents(), "after\n");
    }

    #[test]
    fn into_inner_returns_writer() {
        let sink = LineLogger::new(Vec::new()).with_timestamp(Timestamp::Disabled);
        sink.write_literal("kept").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"kept\n");
    }
}
