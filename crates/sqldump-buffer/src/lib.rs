//! Input plumbing for the dump tokenizer.
//!
//! [`StreamBuffer`] pulls bytes lazily from any [`std::io::Read`] and keeps
//! only a working window in memory, releasing data behind a monotonically
//! advancing discard offset. [`ScanCursor`] hides the difference between that
//! streaming window and input that is already fully in memory.

pub mod cursor;
pub mod stream;

pub use cursor::{ScanCursor, SliceCursor, StreamCursor};
pub use stream::{BufferRange, StreamBuffer, UNBOUNDED_LEN};

/// Default initial window capacity in bytes.
pub const DEFAULT_INITIAL_CAPACITY: usize = 0x10000;

/// Default refill chunk and minimum discard span in bytes.
pub const DEFAULT_STEP: usize = 0x8000;

/// Sizing of a [`StreamBuffer`] window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Capacity reserved up front for the retained window.
    pub initial_capacity: usize,
    /// Bytes requested per read, and the discardable span that must
    /// accumulate before the window is shifted.
    pub step: usize,
}

impl BufferConfig {
    /// Create an explicit configuration.
    ///
    /// Returns `None` when either value is zero.
    #[must_use]
    pub const fn new(initial_capacity: usize, step: usize) -> Option<Self> {
        if initial_capacity == 0 || step == 0 {
            None
        } else {
            Some(Self {
                initial_capacity,
                step,
            })
        }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            step: DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero() {
        assert!(BufferConfig::new(0, 16).is_none());
        assert!(BufferConfig::new(32, 0).is_none());
        assert_eq!(
            BufferConfig::new(32, 16),
            Some(BufferConfig {
                initial_capacity: 32,
                step: 16
            })
        );
    }

    #[test]
    fn config_default() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity, 0x10000);
        assert_eq!(config.step, 0x8000);
    }
}
