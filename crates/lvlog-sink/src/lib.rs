#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/lvlog-sink/src/lib.rs
//!
//! # Overview
//!
//! `lvlog-sink` provides the line-oriented output layer underneath the `lvlog`
//! facade. The facade decides *whether* a message is logged and which tags it
//! carries; this crate decides *how* the finished line reaches the output
//! stream: a timestamp is prepended, a trailing newline is enforced, and the
//! complete line is handed to the underlying [`std::io::Write`] in one call.
//!
//! # Design
//!
//! The capability the facade depends on is the [`LineWriter`] trait, which
//! accepts either pre-formatted [`std::fmt::Arguments`] or a literal string.
//! [`LineLogger`] is the standard implementation: it owns a writer and a
//! reusable line buffer behind a single mutex so concurrent callers never
//! interleave partial lines. Any other type satisfying [`LineWriter`] (for
//! example a test double) can back a logger just as well.
//!
//! # Invariants
//!
//! - Every rendered line is written with exactly one `write_all` call while the
//!   sink's lock is held.
//! - `LineMode::WithNewline` appends `\n` only when the line does not already
//!   end with one.
//! - A poisoned lock is recovered rather than propagated; logging never panics
//!   on behalf of a previous panicking writer.
//!
//! # Errors
//!
//! [`LineWriter`] methods surface [`std::io::Error`] values from the underlying
//! writer unchanged. Callers that treat logging as fire-and-forget may discard
//! them.
//!
//! # Examples
//!
//! ```
//! use lvlog_sink::{LineLogger, LineWriter, SharedBuffer, Timestamp};
//!
//! let buffer = SharedBuffer::new();
//! let sink = LineLogger::new(buffer.clone()).with_timestamp(Timestamp::Disabled);
//!
//! sink.write_literal("[inf] ready").unwrap();
//! sink.write_formatted(format_args!("[err] {} failed", "db")).unwrap();
//!
//! assert_eq!(buffer.contents(), "[inf] ready\n[err] db failed\n");
//! ```

mod line_mode;
mod shared_buffer;
mod sink;
mod timestamp;
mod writer;

pub use line_mode::LineMode;
pub use shared_buffer::SharedBuffer;
pub use sink::LineLogger;
pub use timestamp::Timestamp;
pub use writer::{LineWriter, RawWriter};
