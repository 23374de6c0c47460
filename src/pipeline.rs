use std::fmt::Display;
use std::io::{self, ErrorKind, Read, Write};

use chrono::TimeZone;

use crate::config::FilterConfig;
use crate::rewrite::Rewriter;
use crate::segment::{LineSegmenter, Segment};

/// Counters for one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Logical lines seen, counting an oversized line once
    pub lines: u64,
    /// Timestamps rewritten
    pub converted: u64,
    /// Lines longer than the scan window
    pub oversized_lines: u64,
}

/// Copy `reader` to `writer`, converting UTC timestamps to `zone`
///
/// Uses [`FilterConfig::default`]. Read and write errors are returned as they
/// were raised; output already written stays written.
pub fn filter<R, W, Tz>(reader: R, writer: W, zone: Tz) -> io::Result<()>
where
    R: Read,
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    filter_with(reader, writer, &Rewriter::new(zone), FilterConfig::default()).map(|_| ())
}

/// Streaming pass with an explicit rewriter and buffer configuration
///
/// Each segment is rewritten and handed to `writer` before the next one is
/// read. `writer` is flushed once the input is exhausted.
pub fn filter_with<R, W, Tz>(
    reader: R,
    mut writer: W,
    rewriter: &Rewriter<Tz>,
    config: FilterConfig,
) -> io::Result<FilterStats>
where
    R: Read,
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    config.validate().map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;

    let mut segmenter = LineSegmenter::with_config(reader, config);
    let mut stats = FilterStats::default();
    let mut out = Vec::new();

    while let Some(segment) = segmenter.next_segment()? {
        if !segment.is_scannable() {
            writer.write_all(segment.bytes())?;
            continue;
        }

        stats.lines += 1;
        if matches!(segment, Segment::Head(_)) {
            stats.oversized_lines += 1;
        }
        out.clear();
        stats.converted += rewriter.rewrite_into(segment.bytes(), &mut out) as u64;
        writer.write_all(&out)?;
    }

    writer.flush()?;
    Ok(stats)
}
