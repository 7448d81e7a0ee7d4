// Streaming byte window over a pull-based source.
//
// Addressing is absolute: index 0 is the first byte ever read from the
// source. Bytes below the discard offset (the "floor") have been released
// and are no longer accessible.

use std::io::{ErrorKind, Read};

use sqldump_error::{DumpError, Result};
use tracing::trace;

use crate::BufferConfig;

/// Length reported by [`StreamBuffer::len`] on top of the buffered bytes
/// while the source has not been drained yet.
pub const UNBOUNDED_LEN: usize = usize::MAX / 2;

/// Detached handle to a byte range of a [`StreamBuffer`].
///
/// Stays resolvable until a discard moves the floor past `start`; after that
/// [`StreamBuffer::resolve`] fails with [`DumpError::StaleRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRange {
    pub start: usize,
    pub end: usize,
}

impl BufferRange {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A growable window of bytes pulled lazily from a reader.
pub struct StreamBuffer<R> {
    /// The underlying source.
    reader: R,
    /// Bytes requested per read; also the minimum discardable span.
    step: usize,
    /// Retained bytes; `window[0]` sits at absolute offset `floor`.
    window: Vec<u8>,
    /// Discard offset. Never decreases.
    floor: usize,
    /// Whether the reader reported end of input.
    exhausted: bool,
}

impl<R: Read> StreamBuffer<R> {
    /// Create a buffer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, BufferConfig::default())
    }

    /// Create a buffer with an explicit configuration.
    pub fn with_config(reader: R, config: BufferConfig) -> Self {
        Self {
            reader,
            step: config.step.max(1),
            window: Vec::with_capacity(config.initial_capacity),
            floor: 0,
            exhausted: false,
        }
    }

    /// Absolute offset one past the last buffered byte.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.floor + self.window.len()
    }

    /// Absolute offset below which data has been discarded.
    #[must_use]
    pub const fn discard_offset(&self) -> usize {
        self.floor
    }

    /// Whether the source has been drained.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Refill step in bytes.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// The retained bytes, starting at [`Self::discard_offset`].
    #[must_use]
    pub fn buffered_window(&self) -> &[u8] {
        &self.window
    }

    /// Length of the sequence.
    ///
    /// Until the source is drained this is a sentinel larger than any real
    /// input, so callers can probe forward without reading everything first.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.exhausted {
            self.buffered()
        } else {
            self.buffered().saturating_add(UNBOUNDED_LEN)
        }
    }

    /// Whether the source is drained and held no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exhausted && self.buffered() == 0
    }

    /// Make sure bytes up to `position` (exclusive) are buffered.
    ///
    /// Returns `false` only when the source ended before `position`.
    pub fn ensure_buffered_to(&mut self, position: usize) -> Result<bool> {
        while self.buffered() < position {
            if self.exhausted {
                return Ok(false);
            }

            let remaining = position - self.buffered();
            let filled = self.window.len();

            if self.window.capacity() - filled < remaining.min(self.step) {
                let grow = self.window.capacity().max(self.step);
                self.window.reserve(grow);
                trace!(
                    capacity = self.window.capacity(),
                    floor = self.floor,
                    "stream buffer grown"
                );
            }

            let chunk = (self.window.capacity() - filled).min(self.step);
            self.window.resize(filled + chunk, 0);

            let read = loop {
                match self.reader.read(&mut self.window[filled..]) {
                    Ok(n) => break n,
                    Err(err) if err.kind() == ErrorKind::Interrupted => {}
                    Err(err) => {
                        self.window.truncate(filled);
                        return Err(err.into());
                    }
                }
            };

            self.window.truncate(filled + read);
            if read == 0 {
                self.exhausted = true;
            }
        }

        Ok(true)
    }

    /// Byte at absolute `index`, or `None` past the end of input.
    pub fn byte_at(&mut self, index: usize) -> Result<Option<u8>> {
        self.check_floor(index)?;
        if !self.ensure_buffered_to(index + 1)? {
            return Ok(None);
        }
        Ok(Some(self.window[index - self.floor]))
    }

    /// Bytes in the absolute range `start..end`.
    ///
    /// The returned slice borrows the buffer, so no discard can happen while
    /// it is alive. Use [`Self::range`] for a handle that outlives a borrow.
    pub fn slice(&mut self, start: usize, end: usize) -> Result<&[u8]> {
        let range = self.range(start, end)?;
        Ok(&self.window[range.start - self.floor..range.end - self.floor])
    }

    /// Validate `start..end` and return a detached handle to it.
    pub fn range(&mut self, start: usize, end: usize) -> Result<BufferRange> {
        self.check_floor(start)?;
        if start > end || !self.ensure_buffered_to(end)? {
            return Err(DumpError::InvalidRange { start, end });
        }
        Ok(BufferRange { start, end })
    }

    /// Bytes of a handle obtained from [`Self::range`].
    pub fn resolve(&self, range: &BufferRange) -> Result<&[u8]> {
        if range.start < self.floor {
            return Err(DumpError::StaleRange {
                start: range.start,
                floor: self.floor,
            });
        }
        self.window
            .get(range.start - self.floor..range.end - self.floor)
            .ok_or(DumpError::InvalidRange {
                start: range.start,
                end: range.end,
            })
    }

    /// Release data before `position`.
    ///
    /// Only shifts the window once more than one step of data can be
    /// released; `position` becomes the new floor.
    pub fn discard_before(&mut self, position: usize) -> Result<()> {
        self.ensure_buffered_to(position)?;

        if position <= self.floor + self.step {
            return Ok(());
        }

        let new_floor = position.min(self.buffered());
        self.window.drain(..new_floor - self.floor);
        trace!(
            from = self.floor,
            to = new_floor,
            retained = self.window.len(),
            "stream buffer discarded"
        );
        self.floor = new_floor;
        Ok(())
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn check_floor(&self, position: usize) -> Result<()> {
        if position < self.floor {
            return Err(DumpError::DiscardedRegion {
                position,
                floor: self.floor,
            });
        }
        Ok(())
    }
}
