//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::{self, ErrorKind, Read, Write};

use chrono::FixedOffset;
use utc2local::{FilterConfig, Rewriter, filter, filter_with};

pub const DEFAULT_WINDOW: usize = utc2local::config::DEFAULT_MAX_LINE_BYTES;

/// UTC+9, the zone the examples in the docs are written for
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

/// Run the default filter over `src` in UTC+9 and return the output as text
pub fn filter_str(src: &str) -> String {
    let mut dst = Vec::new();
    filter(src.as_bytes(), &mut dst, jst()).expect("in-memory filter cannot fail");
    String::from_utf8(dst).expect("output is valid UTF-8")
}

/// Same as [`filter_str`] with a custom scan window
pub fn filter_str_window(src: &str, max_line_bytes: usize) -> String {
    let mut dst = Vec::new();
    let config = FilterConfig::with_max_line_bytes(max_line_bytes);
    filter_with(src.as_bytes(), &mut dst, &Rewriter::new(jst()), config)
        .expect("in-memory filter cannot fail");
    String::from_utf8(dst).expect("output is valid UTF-8")
}

/// Digit run of at least `len` bytes, built from decimal counters so that it
/// contains no timestamp shape
pub fn digit_run(len: usize) -> String {
    let mut s = String::with_capacity(len + 20);
    let mut n: u64 = 1_000_003;
    while s.len() < len {
        s.push_str(&n.to_string());
        n = n.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407) >> 1;
    }
    s
}

/// Reader that yields `data`, then fails with `kind`
pub struct FailAfter {
    pub data: Vec<u8>,
    pub pos: usize,
    pub kind: ErrorKind,
}

impl FailAfter {
    pub fn new(data: &[u8], kind: ErrorKind) -> Self {
        Self { data: data.to_vec(), pos: 0, kind }
    }
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(self.kind, "injected read failure"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Writer that accepts `budget` write calls, then fails with `kind`
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub budget: usize,
    pub kind: ErrorKind,
    pub flushed: bool,
}

impl FailingWriter {
    pub fn new(budget: usize, kind: ErrorKind) -> Self {
        Self { written: Vec::new(), budget, kind, flushed: false }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(self.kind, "injected write failure"));
        }
        self.budget -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed = true;
        Ok(())
    }
}
