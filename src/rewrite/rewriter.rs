use std::fmt::Display;

use chrono::TimeZone;

use super::candidate::convert;
use super::pattern::candidate_regex;

/// Rewrites UTC timestamps in a line to wall time in a fixed zone
///
/// The zone is injected once and never re-read, so a rewriter built with a
/// [`chrono::FixedOffset`] is fully deterministic. No state is carried from
/// one line to the next.
#[derive(Debug, Clone)]
pub struct Rewriter<Tz: TimeZone> {
    zone: Tz,
}

impl<Tz> Rewriter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Append `line` to `out` with every convertible candidate replaced
    ///
    /// Returns how many candidates were converted. Bytes outside candidates,
    /// and candidates that fail to parse, are copied unchanged.
    pub fn rewrite_into(&self, line: &[u8], out: &mut Vec<u8>) -> usize {
        let mut last = 0;
        let mut converted = 0;

        for m in candidate_regex().find_iter(line) {
            let candidate = convert(m.as_bytes(), &self.zone);
            if candidate.is_converted() {
                converted += 1;
            }
            out.extend_from_slice(&line[last..m.start()]);
            out.extend_from_slice(candidate.as_ref());
            last = m.end();
        }

        out.extend_from_slice(&line[last..]);
        converted
    }
}
