// Scan cursors: one position-tracking interface over in-memory input and
// over a discard-as-you-go stream.
//
// All offsets taken by cursor methods are relative to the current position.

use std::io::Read;

use memchr::{memchr2, memmem};
use sqldump_error::{DumpError, Result};

use crate::{BufferConfig, StreamBuffer};

/// Forward-only reader over dump bytes with bounded lookahead.
pub trait ScanCursor {
    /// Absolute offset of the cursor from the start of input.
    fn position(&self) -> usize;

    /// Bytes left after the cursor. May be a large sentinel while a
    /// streaming source is not drained.
    fn remaining(&self) -> usize;

    /// Byte at `offset` past the cursor, `None` past the end of input.
    fn peek(&mut self, offset: usize) -> Result<Option<u8>>;

    /// Move the cursor forward by `count` bytes.
    fn advance(&mut self, count: usize) -> Result<()>;

    /// Bytes between two offsets past the cursor.
    fn slice(&mut self, start: usize, end: usize) -> Result<&[u8]>;

    /// Offset of the first occurrence of `needle` at or after `from`.
    fn find(&mut self, needle: &[u8], from: usize) -> Result<Option<usize>>;

    /// Offset of the first `a` or `b` at or after `from`.
    fn find_byte2(&mut self, a: u8, b: u8, from: usize) -> Result<Option<usize>>;

    /// Move the cursor to the end of input.
    fn skip_rest(&mut self) -> Result<()>;

    /// Whether the cursor sits at the end of input.
    fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.peek(0)?.is_none())
    }

    /// Offset of the first byte at or after `from` that fails `pred`, or of
    /// the end of input.
    fn scan_while<P>(&mut self, from: usize, pred: P) -> Result<usize>
    where
        P: Fn(u8) -> bool,
    {
        let mut end = from;
        while let Some(byte) = self.peek(end)? {
            if !pred(byte) {
                break;
            }
            end += 1;
        }
        Ok(end)
    }

    /// Up to `len` bytes of upcoming input as text, for diagnostics.
    ///
    /// Read failures just shorten the excerpt.
    fn excerpt(&mut self, len: usize) -> String {
        let mut bytes = Vec::with_capacity(len);
        for i in 0..len {
            match self.peek(i) {
                Ok(Some(byte)) => bytes.push(byte),
                _ => break,
            }
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

// ---------------------------------------------------------------------------
// SliceCursor
// ---------------------------------------------------------------------------

/// Cursor over input that is already entirely in memory.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    #[must_use]
    pub const fn from_bytes(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }
}

impl ScanCursor for SliceCursor<'_> {
    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    fn peek(&mut self, offset: usize) -> Result<Option<u8>> {
        Ok(self.rest().get(offset).copied())
    }

    fn advance(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(DumpError::InvalidRange {
                start: self.pos,
                end: self.pos + count,
            });
        }
        self.pos += count;
        Ok(())
    }

    fn slice(&mut self, start: usize, end: usize) -> Result<&[u8]> {
        let pos = self.pos;
        self.rest().get(start..end).ok_or(DumpError::InvalidRange {
            start: pos + start,
            end: pos + end,
        })
    }

    fn find(&mut self, needle: &[u8], from: usize) -> Result<Option<usize>> {
        let Some(haystack) = self.rest().get(from..) else {
            return Ok(None);
        };
        Ok(memmem::find(haystack, needle).map(|i| from + i))
    }

    fn find_byte2(&mut self, a: u8, b: u8, from: usize) -> Result<Option<usize>> {
        let Some(haystack) = self.rest().get(from..) else {
            return Ok(None);
        };
        Ok(memchr2(a, b, haystack).map(|i| from + i))
    }

    fn skip_rest(&mut self) -> Result<()> {
        self.pos = self.src.len();
        Ok(())
    }

    fn scan_while<P>(&mut self, from: usize, pred: P) -> Result<usize>
    where
        P: Fn(u8) -> bool,
    {
        let rest = self.rest();
        let start = from.min(rest.len());
        Ok(rest[start..]
            .iter()
            .position(|&byte| !pred(byte))
            .map_or(rest.len().max(from), |i| start + i))
    }
}

// ---------------------------------------------------------------------------
// StreamCursor
// ---------------------------------------------------------------------------

/// Cursor over a [`StreamBuffer`] that releases data behind itself.
pub struct StreamCursor<R> {
    buffer: StreamBuffer<R>,
    pos: usize,
}

impl<R: Read> StreamCursor<R> {
    pub fn new(reader: R) -> Self {
        Self::from_buffer(StreamBuffer::new(reader))
    }

    pub fn with_config(reader: R, config: BufferConfig) -> Self {
        Self::from_buffer(StreamBuffer::with_config(reader, config))
    }

    /// Start scanning at the buffer's discard offset.
    pub fn from_buffer(buffer: StreamBuffer<R>) -> Self {
        let pos = buffer.discard_offset();
        Self { buffer, pos }
    }

    /// The underlying buffer.
    pub const fn buffer(&self) -> &StreamBuffer<R> {
        &self.buffer
    }

    pub fn into_buffer(self) -> StreamBuffer<R> {
        self.buffer
    }

    /// Search the buffered window from `from`, pulling more input until
    /// `search` hits or the source runs dry. `overlap` bytes of the previous
    /// window are searched again after a refill so that matches spanning a
    /// refill boundary are found.
    fn search<F>(&mut self, from: usize, overlap: usize, search: F) -> Result<Option<usize>>
    where
        F: Fn(&[u8]) -> Option<usize>,
    {
        let mut start = self.pos + from;
        loop {
            let floor = self.buffer.discard_offset();
            let end = self.buffer.buffered();
            if start < end {
                let window = &self.buffer.buffered_window()[start - floor..];
                if let Some(i) = search(window) {
                    return Ok(Some(start + i - self.pos));
                }
                start = start.max(end.saturating_sub(overlap));
            }
            if !self.buffer.ensure_buffered_to(end + 1)? {
                return Ok(None);
            }
        }
    }
}

impl<R: Read> ScanCursor for StreamCursor<R> {
    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    fn peek(&mut self, offset: usize) -> Result<Option<u8>> {
        self.buffer.byte_at(self.pos + offset)
    }

    fn advance(&mut self, count: usize) -> Result<()> {
        let target = self.pos + count;
        if !self.buffer.ensure_buffered_to(target)? {
            return Err(DumpError::InvalidRange {
                start: self.pos,
                end: target,
            });
        }
        self.pos = target;
        self.buffer.discard_before(target)
    }

    fn slice(&mut self, start: usize, end: usize) -> Result<&[u8]> {
        self.buffer.slice(self.pos + start, self.pos + end)
    }

    fn find(&mut self, needle: &[u8], from: usize) -> Result<Option<usize>> {
        let overlap = needle.len().saturating_sub(1);
        self.search(from, overlap, |window| memmem::find(window, needle))
    }

    fn find_byte2(&mut self, a: u8, b: u8, from: usize) -> Result<Option<usize>> {
        self.search(from, 0, |window| memchr2(a, b, window))
    }

    fn skip_rest(&mut self) -> Result<()> {
        loop {
            let end = self.buffer.buffered();
            if end > self.pos {
                self.pos = end;
                self.buffer.discard_before(end)?;
            }
            if !self.buffer.ensure_buffered_to(end + 1)? {
                return Ok(());
            }
        }
    }
}
