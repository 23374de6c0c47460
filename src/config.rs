use anyhow::{Result, bail};

/// Initial size of the segmenter's read buffer: 4KB
pub const DEFAULT_INITIAL_BUFFER_BYTES: usize = 4 * 1024;

/// Largest window of a single line that is scanned for timestamps: 64KB
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024;

/// Tunables for one filtering pass
///
/// The read buffer starts at `initial_buffer_bytes` and doubles while a line
/// needs more room, up to `max_line_bytes`. Bytes of a line beyond that window
/// are streamed through without being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub initial_buffer_bytes: usize,
    pub max_line_bytes: usize,
}

impl FilterConfig {
    /// Config with a custom line window and the default starting buffer,
    /// clamped so the starting buffer never exceeds the window
    pub fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self {
            initial_buffer_bytes: DEFAULT_INITIAL_BUFFER_BYTES.min(max_line_bytes),
            max_line_bytes,
        }
    }

    /// Check that the buffer sizes describe a usable segmenter
    pub fn validate(&self) -> Result<()> {
        if self.max_line_bytes == 0 {
            bail!("max_line_bytes must be greater than zero");
        }
        if self.initial_buffer_bytes == 0 {
            bail!("initial_buffer_bytes must be greater than zero");
        }
        if self.initial_buffer_bytes > self.max_line_bytes {
            bail!(
                "initial_buffer_bytes ({}) exceeds max_line_bytes ({})",
                self.initial_buffer_bytes,
                self.max_line_bytes
            );
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            initial_buffer_bytes: DEFAULT_INITIAL_BUFFER_BYTES,
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}
