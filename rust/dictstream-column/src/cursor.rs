//! Bounds-checked reading of serialized value spans.

use dictstream_common::{Result, verify_data};

/// A bounds-checked cursor over a borrowed byte span.
///
/// Every read validates that enough bytes remain before consuming them, so a
/// malformed span surfaces as a decode error rather than an out-of-bounds
/// access. The cursor only ever advances.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    span: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `span`.
    pub fn new(span: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { span, position: 0 }
    }

    /// Returns the current byte position within the span.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.span.len() - self.position
    }

    /// Returns `true` if every byte of the span has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.span.len()
    }

    /// Reads exactly `N` bytes as a fixed-size array and advances the cursor.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        verify_data!(key_span, self.remaining() >= N);
        let mut array = [0u8; N];
        array.copy_from_slice(&self.span[self.position..self.position + N]);
        self.position += N;
        Ok(array)
    }

    /// Reads exactly `len` bytes and advances the cursor.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        verify_data!(key_span, self.remaining() >= len);
        let bytes = &self.span[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }
}
