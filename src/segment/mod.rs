//! Line segmentation of an input byte stream.
//!
//! [`LineSegmenter`] pulls from any [`std::io::Read`] and yields [`Segment`]s
//! borrowed from a buffer that never grows past the configured scan window.

pub mod segmenter;

pub use segmenter::{LineSegmenter, Segment};
