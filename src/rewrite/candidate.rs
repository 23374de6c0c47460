use std::fmt::Display;

use chrono::{DateTime, Datelike, Offset, TimeZone};

/// Length of `YYYY-MM-DDTHH:MM:SS`, where the optional fraction starts
const SECONDS_END: usize = 19;

/// Outcome of handling one timestamp candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Parsed and rendered in the target zone
    Converted(String),
    /// Not a valid UTC timestamp; the original bytes pass through
    Unchanged(&'a [u8]),
}

impl Candidate<'_> {
    pub fn is_converted(&self) -> bool {
        matches!(self, Candidate::Converted(_))
    }
}

impl AsRef<[u8]> for Candidate<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            Candidate::Converted(text) => text.as_bytes(),
            Candidate::Unchanged(bytes) => bytes,
        }
    }
}

/// Convert a `YYYY-MM-DDTHH:MM:SS[.f]Z` candidate to wall time in `zone`
///
/// The rendering keeps the source fraction digits verbatim and replaces `Z`
/// with a `±HH:MM` offset, or `±HH:MM:SS` when the zone's offset has a
/// seconds part (historic local mean time). Anything that is not a valid
/// calendar timestamp in exactly that form comes back as
/// [`Candidate::Unchanged`], as does a conversion whose local year no longer
/// fits in four digits. A `:60` second is only accepted at 23:59 UTC.
pub fn convert<'a, Tz>(text: &'a [u8], zone: &Tz) -> Candidate<'a>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_utc(text) {
        Some((instant, fraction)) => {
            let local = instant.with_timezone(zone);
            if (0..=9999).contains(&local.year()) {
                Candidate::Converted(render(&local, fraction))
            } else {
                Candidate::Unchanged(text)
            }
        }
        None => Candidate::Unchanged(text),
    }
}

/// Strictly parse a `Z`-suffixed RFC 3339 timestamp, returning the instant
/// and its fraction text (including the dot, empty when absent)
fn parse_utc(text: &[u8]) -> Option<(DateTime<chrono::FixedOffset>, &str)> {
    let text = std::str::from_utf8(text).ok()?;
    let body = text.strip_suffix('Z')?;

    // parse_from_rfc3339 also allows `t` or a space as the separator
    if body.as_bytes().get(10) != Some(&b'T') {
        return None;
    }

    let instant = DateTime::parse_from_rfc3339(text).ok()?;

    // chrono takes `:60` at any minute; a leap second only ends 23:59 UTC
    let clock = body.get(11..SECONDS_END)?;
    if clock.ends_with(":60") && !clock.starts_with("23:59") {
        return None;
    }

    let fraction = body.get(SECONDS_END..)?;
    Some((instant, fraction))
}

fn render<Tz>(local: &DateTime<Tz>, fraction: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let offset = if local.offset().fix().local_minus_utc() % 60 == 0 { "%:z" } else { "%::z" };
    format!("{}{}{}", local.format("%Y-%m-%dT%H:%M:%S"), fraction, local.format(offset))
}
