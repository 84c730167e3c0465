//! # Line Reader
//!
//! Sequential, rewindable access to the input as [`RawLine`]s. The resolver
//! and the loader each make one full pass, so the reader rewinds to the
//! start before every pass instead of buffering the whole file.
//!
//! Lines are read into a single growable buffer; there is no line length
//! limit.

use super::line::RawLine;
use std::io::{self, BufRead, Seek};

pub struct LineReader<R> {
    inner: R,
    comment: char,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead + Seek> LineReader<R> {
    pub fn new(inner: R, comment: char) -> Self {
        Self {
            inner,
            comment,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Moves back to the first line.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.inner.rewind()?;
        self.line_number = 0;
        Ok(())
    }

    /// Reads the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<RawLine>> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        Ok(Some(RawLine::classify(&self.buf, self.line_number, self.comment)))
    }
}
