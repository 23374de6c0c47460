use std::io::{self, ErrorKind, Read};
use std::mem;
use std::ops::Range;

use memchr::memchr;
use tracing::debug;

use crate::config::FilterConfig;

/// One unit handed from the segmenter to the rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A whole line: bytes up to and including `\n`, or the unterminated
    /// remainder at end of stream
    Line(&'a [u8]),
    /// The first window of a line longer than the scan window
    Head(&'a [u8]),
    /// Further bytes of an oversized line, ending with its `\n` (if any)
    Continuation(&'a [u8]),
}

impl<'a> Segment<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        match *self {
            Segment::Line(b) | Segment::Head(b) | Segment::Continuation(b) => b,
        }
    }

    /// Whether timestamps in this segment should be rewritten
    pub fn is_scannable(&self) -> bool {
        !matches!(self, Segment::Continuation(_))
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Line,
    Head,
    Continuation,
}

/// Splits a byte stream into lines using a bounded, growable read buffer
///
/// Lines that fit in `max_line_bytes` are yielded whole. A longer line is
/// yielded as one [`Segment::Head`] of exactly `max_line_bytes` followed by
/// [`Segment::Continuation`] chunks, so memory stays bounded no matter how
/// long a line gets. The line after it is recognized normally.
///
/// This is a lending reader rather than an `Iterator`: each segment borrows
/// the internal buffer until the next call.
pub struct LineSegmenter<R> {
    reader: R,
    buf: Vec<u8>,
    max_len: usize,
    start: usize,
    end: usize,
    eof: bool,
    done: bool,
    oversized: bool,
}

impl<R: Read> LineSegmenter<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, FilterConfig::default())
    }

    /// Build a segmenter from `config`; sizes are clamped to at least one byte
    pub fn with_config(reader: R, config: FilterConfig) -> Self {
        let max_len = config.max_line_bytes.max(1);
        let initial = config.initial_buffer_bytes.clamp(1, max_len);
        Self {
            reader,
            buf: vec![0; initial],
            max_len,
            start: 0,
            end: 0,
            eof: false,
            done: false,
            oversized: false,
        }
    }

    /// Yield the next segment, `Ok(None)` at end of stream
    ///
    /// Complete lines already buffered are yielded before a read error is
    /// reported. After an error or end of stream every call returns `Ok(None)`.
    pub fn next_segment(&mut self) -> io::Result<Option<Segment<'_>>> {
        if self.done {
            return Ok(None);
        }

        loop {
            if let Some(i) = memchr(b'\n', &self.buf[self.start..self.end]) {
                let range = self.start..self.start + i + 1;
                let kind = self.finish_line();
                self.start = range.end;
                return Ok(Some(self.segment(kind, range)));
            }

            let pending = self.end - self.start;

            if self.eof {
                self.done = true;
                if pending == 0 {
                    return Ok(None);
                }
                let range = self.start..self.end;
                let kind = self.finish_line();
                self.start = self.end;
                return Ok(Some(self.segment(kind, range)));
            }

            if self.oversized && pending > 0 {
                let range = self.start..self.end;
                self.start = self.end;
                return Ok(Some(self.segment(Kind::Continuation, range)));
            }

            if pending >= self.max_len {
                debug!(
                    "Line exceeds {} byte scan window; remainder passes through unconverted",
                    self.max_len
                );
                self.oversized = true;
                let range = self.start..self.end;
                self.start = self.end;
                return Ok(Some(self.segment(Kind::Head, range)));
            }

            self.fill()?;
        }
    }

    fn finish_line(&mut self) -> Kind {
        if mem::take(&mut self.oversized) { Kind::Continuation } else { Kind::Line }
    }

    fn segment(&self, kind: Kind, range: Range<usize>) -> Segment<'_> {
        let bytes = &self.buf[range];
        match kind {
            Kind::Line => Segment::Line(bytes),
            Kind::Head => Segment::Head(bytes),
            Kind::Continuation => Segment::Continuation(bytes),
        }
    }

    /// Compact pending bytes to the front, grow if full, then read once
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        // pending < max_len here, so a full buffer is still below the window
        if self.end == self.buf.len() {
            let grown = (self.buf.len() * 2).min(self.max_len);
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }
        }
    }
}
