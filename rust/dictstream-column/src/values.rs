//! A collection of values stored as bytes with alignment guarantees.

use dictstream_bytes::AlignedByteVec;

/// A collection of values stored as bytes with alignment guarantees.
///
/// `Values` wraps an [`AlignedByteVec`] and provides methods for safely
/// working with byte representations of typed values.
#[derive(Debug, Clone)]
pub struct Values(AlignedByteVec);

impl Values {
    /// Creates a new, empty `Values` instance.
    pub fn new() -> Values {
        Values(AlignedByteVec::new())
    }

    /// Creates a new `Values` instance filled with zeroed bytes for `len`
    /// elements of type `T`.
    pub fn zeroed<T>(len: usize) -> Values
    where
        T: bytemuck::Zeroable,
    {
        Values(AlignedByteVec::zeroed(len * std::mem::size_of::<T>()))
    }

    /// Creates a new `Values` instance filled with zeroed bytes of the
    /// specified length.
    pub fn zeroed_bytes(bytes_len: usize) -> Values {
        Values(AlignedByteVec::zeroed(bytes_len))
    }

    /// Creates a new `Values` instance with capacity for at least `capacity`
    /// elements of type `T`.
    pub fn with_capacity<T>(capacity: usize) -> Values {
        Values(AlignedByteVec::with_capacity(
            capacity * std::mem::size_of::<T>(),
        ))
    }

    /// Creates a new `Values` instance with a specified byte capacity.
    pub fn with_byte_capacity(capacity: usize) -> Values {
        Values(AlignedByteVec::with_capacity(capacity))
    }

    /// Checks if the `Values` container is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements of type `T` that fit in the current
    /// byte length.
    #[inline]
    pub fn len<T>(&self) -> usize {
        self.0.len() / std::mem::size_of::<T>()
    }

    /// Returns the number of bytes in the container.
    #[inline]
    pub fn bytes_len(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Interprets the underlying bytes as a slice of elements of type `T`.
    #[inline]
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        self.0.typed_data()
    }

    /// Interprets the underlying bytes as a mutable slice of elements of
    /// type `T`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.0.typed_data_mut()
    }

    /// Resizes the container to hold exactly `new_len` elements of type `T`,
    /// filling any additional space with zeroes.
    pub fn resize_zeroed<T>(&mut self, new_len: usize)
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.0.resize_zeroed::<T>(new_len);
    }

    /// Appends a single element of type `T` to the end of the container.
    #[inline]
    pub fn push<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.0.push_typed(value);
    }

    /// Extends the container with the contents of a slice of elements of
    /// type `T`.
    #[inline]
    pub fn extend_from_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        self.0.extend_from_typed_slice(values);
    }

    /// Appends a byte range of another `Values` container.
    pub fn extend_from_byte_range(&mut self, source: &Values, range: std::ops::Range<usize>) {
        self.0.extend_from_slice(&source.as_bytes()[range]);
    }

    /// Clears the container, removing all elements.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Default for Values {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let values = Values::new();
        assert!(values.is_empty());
        assert_eq!(values.as_bytes().len(), 0);
    }

    #[test]
    fn test_zeroed() {
        let values = Values::zeroed::<u32>(5);
        assert_eq!(values.len::<u32>(), 5);
        assert_eq!(values.as_slice::<u32>(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_push_and_slice() {
        let mut values = Values::new();
        values.push(1u32);
        values.push(2u32);
        values.push(3u32);
        assert_eq!(values.as_slice::<u32>(), &[1, 2, 3]);
        assert_eq!(values.len::<u32>(), 3);
        assert_eq!(values.bytes_len(), 12);
    }

    #[test]
    fn test_mutation() {
        let mut values = Values::zeroed::<i64>(3);
        values.as_mut_slice::<i64>()[1] = -7;
        assert_eq!(values.as_slice::<i64>(), &[0, -7, 0]);
    }

    #[test]
    fn test_extend() {
        let mut values = Values::new();
        values.extend_from_slice(&[1u16, 2, 3]);
        values.extend_from_slice(&[4u16, 5]);
        assert_eq!(values.as_slice::<u16>(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_extend_from_byte_range() {
        let mut source = Values::new();
        source.extend_from_slice(&[10u8, 20, 30, 40]);

        let mut dest = Values::new();
        dest.extend_from_byte_range(&source, 1..3);
        assert_eq!(dest.as_bytes(), &[20, 30]);
    }

    #[test]
    fn test_resize_zeroed() {
        let mut values = Values::new();
        values.push(123u32);
        values.resize_zeroed::<u32>(3);
        assert_eq!(values.as_slice::<u32>(), &[123, 0, 0]);
    }
}
