//! Line-indenting writer adapter

use std::io::{self, Write};

use crate::error::ShortWrite;

/// Where the writer is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Nothing of the current line has been forwarded; indent before the next byte
    AtLineStart,
    /// The indent for the current line is already out
    MidLine,
}

/// Wraps a sink and prefixes every line written through it with a fixed
/// byte sequence.
///
/// Writes need not be aligned to lines: a line split across several calls
/// is indented once, before its first byte. A trailing line without a
/// newline is indented as well.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use tracetree::IndentWriter;
///
/// let mut out = IndentWriter::new(Vec::new(), ">> ");
/// write!(out, "a\nb")?;
/// write!(out, "\nc")?;
/// assert_eq!(out.into_inner(), b">> a\n>> b\n>> c");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct IndentWriter<W> {
    inner: W,
    indent: Vec<u8>,
    /// Bytes of the current line's indent already accepted by `inner`
    indent_sent: usize,
    state: LineState,
}

impl<W: Write> IndentWriter<W> {
    /// Wrap `inner`, indenting each line with `indent`.
    pub fn new(inner: W, indent: impl Into<Vec<u8>>) -> Self {
        Self {
            inner,
            indent: indent.into(),
            indent_sent: 0,
            state: LineState::AtLineStart,
        }
    }

    /// Forward `data`, indenting as needed.
    ///
    /// Returns the number of input bytes forwarded; the indentation itself
    /// is not counted. A short write by the inner sink ends the call early
    /// with the short count. An error from the inner sink ends the call
    /// with a [`ShortWrite`] carrying both the count so far and the error.
    /// Bytes already forwarded stay forwarded.
    ///
    /// Errors are never retried here, [`io::ErrorKind::Interrupted`]
    /// included. If the inner sink fails partway through an indent, the
    /// next call sends only the part of the indent still missing.
    pub fn write_chunk(&mut self, mut data: &[u8]) -> Result<usize, ShortWrite> {
        let mut written = 0;

        while !data.is_empty() {
            if self.state == LineState::AtLineStart {
                self.write_indent()
                    .map_err(|source| ShortWrite { written, source })?;
            }

            let newline = data.iter().position(|&b| b == b'\n');
            let (line, rest) = match newline {
                Some(pos) => data.split_at(pos + 1),
                None => (data, &data[data.len()..]),
            };

            let n = self
                .inner
                .write(line)
                .map_err(|source| ShortWrite { written, source })?;
            written += n;
            if n < line.len() {
                return Ok(written);
            }

            if newline.is_some() {
                self.state = LineState::AtLineStart;
            }
            data = rest;
        }

        Ok(written)
    }

    /// Send the rest of the current line's indent, one `write` at a time.
    fn write_indent(&mut self) -> io::Result<()> {
        while self.indent_sent < self.indent.len() {
            match self.inner.write(&self.indent[self.indent_sent..])? {
                0 => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write indent",
                    ))
                }
                n => self.indent_sent += n,
            }
        }
        self.indent_sent = 0;
        self.state = LineState::MidLine;
        Ok(())
    }

    /// The indentation prepended to each line.
    pub fn indent(&self) -> &[u8] {
        &self.indent
    }

    /// Returns `true` if the next byte written starts a new line.
    pub fn is_at_line_start(&self) -> bool {
        self.state == LineState::AtLineStart
    }

    /// Borrow the inner sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the inner sink.
    ///
    /// Writing to it directly bypasses indentation and line tracking.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for IndentWriter<W> {
    /// Follows the `io::Write` contract: a failure after some input was
    /// forwarded is reported as that partial count, and the error
    /// surfaces on the next call. Use [`IndentWriter::write_chunk`] to get
    /// both at once.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.write_chunk(buf) {
            Ok(n) => Ok(n),
            Err(ShortWrite { written: 0, source }) => Err(source),
            Err(ShortWrite { written, .. }) => Ok(written),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
