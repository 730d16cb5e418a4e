//! Bounds-checked read and write cursors
//!
//! `ByteCursor` is the single point where out-of-bounds reads are detected;
//! everything above it consumes bytes through these methods and can assume
//! a returned slice is in range. Each cursor remembers the absolute offset
//! of its view within the top-level buffer, so errors raised deep inside
//! nested sub-messages still report positions a caller can locate in the
//! original frame.

use crate::error::{ProtocolError, ProtocolResult};

/// Read cursor over a borrowed byte slice
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
    base_offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over a top-level message buffer
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            base_offset: 0,
        }
    }

    /// Bytes consumed from this view so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Absolute offset in the top-level buffer
    pub fn absolute_offset(&self) -> usize {
        self.base_offset + self.position
    }

    /// Bytes left in this view
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// True while unread bytes remain
    pub fn has_remaining(&self) -> bool {
        self.position < self.bytes.len()
    }

    /// Read one byte
    pub fn read_byte(&mut self, context: &'static str) -> ProtocolResult<u8> {
        if self.position >= self.bytes.len() {
            return Err(ProtocolError::truncated_input(
                self.absolute_offset(),
                1,
                0,
                context,
            ));
        }
        let byte = self.bytes[self.position];
        self.position += 1;
        Ok(byte)
    }

    /// Read `len` bytes as a borrowed slice
    pub fn read_bytes(&mut self, len: usize, context: &'static str) -> ProtocolResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(ProtocolError::truncated_input(
                self.absolute_offset(),
                len,
                self.remaining(),
                context,
            ));
        }
        let slice = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    /// Discard `len` bytes
    pub fn skip(&mut self, len: usize, context: &'static str) -> ProtocolResult<()> {
        self.read_bytes(len, context)?;
        Ok(())
    }

    /// Carve a bounded view of the next `len` bytes
    ///
    /// The sub-cursor sees exactly `len` bytes and inherits the absolute
    /// offset of its first byte; this cursor advances past them. A nested
    /// decode therefore cannot read outside its declared extent no matter
    /// what its own length prefixes claim.
    pub fn sub_cursor(&mut self, len: usize, context: &'static str) -> ProtocolResult<ByteCursor<'a>> {
        let base_offset = self.absolute_offset();
        let slice = self.read_bytes(len, context)?;
        Ok(ByteCursor {
            bytes: slice,
            position: 0,
            base_offset,
        })
    }
}

/// Growable write cursor
///
/// Writes cannot fail; the backing buffer grows as needed. The vec can be
/// checked out and back in so callers that pool encode buffers keep their
/// allocations.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a writer with pre-reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Create a writer on top of a caller-owned buffer, clearing it first
    pub fn from_vec(mut buffer: Vec<u8>) -> Self {
        buffer.clear();
        Self { buffer }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True while nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append one byte
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    /// Append a slice
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Take the finished buffer
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }
}
