//! A collection of offsets for variable-length data.

use std::ops::Range;

use crate::values::Values;

/// A collection of offsets for variable-length data.
///
/// Stores a sequence of monotonically non-decreasing offsets, where each pair
/// of adjacent offsets defines the byte range of a single item. The first
/// offset is always included, representing the start position of the first
/// item.
#[derive(Debug, Clone)]
pub struct Offsets(Values);

impl Offsets {
    /// Creates a new empty `Offsets` collection.
    ///
    /// The resulting collection will have a single offset at position 0.
    pub fn new() -> Offsets {
        Self::with_capacity(0)
    }

    /// Creates a new `Offsets` collection with the specified item capacity.
    pub fn with_capacity(capacity: usize) -> Offsets {
        let mut buf = Values::with_capacity::<u64>(capacity + 1);
        buf.push(0u64);
        Offsets(buf)
    }

    /// Returns the number of items represented by these offsets.
    ///
    /// This is one less than the number of stored offsets.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.0.len::<u64>() - 1
    }

    /// Returns `true` if the collection contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Returns a reference to the underlying slice of offsets.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        self.0.as_slice()
    }

    /// Returns the last offset, which marks the end of the last item.
    #[inline]
    pub fn last(&self) -> u64 {
        *self.as_slice().last().unwrap()
    }

    /// Returns the byte range of the item at the given logical index.
    #[inline]
    pub fn range_at(&self, index: usize) -> Range<usize> {
        let offsets = self.as_slice();
        offsets[index] as usize..offsets[index + 1] as usize
    }

    /// Adds a new offset by incrementing the last offset by the given length.
    #[inline]
    pub fn push_length(&mut self, len: usize) {
        let last = self.last();
        self.0.push(last + len as u64);
    }

    /// Appends item offsets from a range of another `Offsets` collection.
    ///
    /// The offsets are adjusted to be continuous with the current collection.
    ///
    /// # Arguments
    ///
    /// * `offsets` - The source offsets collection.
    /// * `start` - The starting item index in the source collection.
    /// * `len` - The number of items to append.
    pub fn extend_from_offsets_range(&mut self, offsets: &Offsets, start: usize, len: usize) {
        self.extend_from_offsets_slice(&offsets.as_slice()[start..start + len + 1]);
    }

    /// Appends item offsets from a slice of raw offsets.
    ///
    /// The offsets are adjusted to be continuous with the current collection.
    /// The first offset in the slice is used as the base for adjustment.
    /// Does nothing if the input slice has fewer than 2 elements.
    pub fn extend_from_offsets_slice(&mut self, offsets: &[u64]) {
        if offsets.len() < 2 {
            return;
        }
        let last = self.last();
        let base = offsets[0];
        for offset in &offsets[1..] {
            self.0.push(*offset - base + last);
        }
    }

    /// Clears the collection, leaving only the initial offset at 0.
    pub fn clear(&mut self) {
        self.0.clear();
        self.0.push(0u64);
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::new()
    }
}
