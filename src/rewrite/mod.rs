//! Timestamp detection and conversion for a single line.
//!
//! A line is swept left to right for candidates matching
//! [`pattern::CANDIDATE_PATTERN`]. Each candidate is strictly parsed as a
//! `Z`-suffixed RFC 3339 timestamp and, on success, rendered in the target
//! zone with the same fraction digits. Failures are not errors: the candidate
//! is written back as it was.

pub mod candidate;
pub mod pattern;
pub mod rewriter;

pub use candidate::{Candidate, convert};
pub use rewriter::Rewriter;
