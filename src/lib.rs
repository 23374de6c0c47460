//! utc2local - rewrite UTC timestamps in a text stream to local time
//!
//! This library is the core of the `utc2local` filter. It reads a byte stream
//! line by line and replaces every `YYYY-MM-DDTHH:MM:SS[.fff]Z` timestamp with
//! the same instant in a chosen zone, e.g. `2017-02-22T23:33:23.973+09:00`.
//! It provides:
//!
//! - Bounded-memory line segmentation ([`LineSegmenter`])
//! - Per-line candidate detection and strict conversion ([`Rewriter`])
//! - The streaming pass tying both to a writer ([`filter`], [`filter_with`])
//!
//! Lines longer than [`FilterConfig::max_line_bytes`] are only scanned within
//! their first window; the rest of such a line is copied through unchanged.
//!
//! # Example
//!
//! ```
//! use chrono::FixedOffset;
//! use utc2local::filter;
//!
//! let zone = FixedOffset::east_opt(9 * 3600).unwrap();
//! let mut out = Vec::new();
//! filter(&b"started 2017-02-22T14:33:23.973Z\n"[..], &mut out, zone)?;
//! assert_eq!(out, b"started 2017-02-22T23:33:23.973+09:00\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod rewrite;
pub mod segment;

// Re-export commonly used types
pub use config::FilterConfig;
pub use pipeline::{FilterStats, filter, filter_with};
pub use rewrite::{Candidate, Rewriter};
pub use segment::{LineSegmenter, Segment};
