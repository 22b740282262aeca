//! A growable byte vector with an 8-byte-aligned backing store.

/// A growable byte vector whose storage is always aligned to an 8-byte
/// boundary, making it suitable for reinterpretation as slices of any
/// primitive value type used by the column layer (all of which have an
/// alignment of at most 8).
///
/// The buffer is backed by a `Vec<u64>`; the logical byte length is tracked
/// separately. Bytes between the logical length and the end of the backing
/// words are kept zeroed, so growing the buffer never exposes stale data.
#[derive(Clone, Default)]
pub struct AlignedByteVec {
    words: Vec<u64>,
    len: usize,
}

impl AlignedByteVec {
    /// Creates a new, empty buffer.
    pub fn new() -> AlignedByteVec {
        AlignedByteVec {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty buffer with capacity for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> AlignedByteVec {
        AlignedByteVec {
            words: Vec::with_capacity(Self::word_count(capacity)),
            len: 0,
        }
    }

    /// Creates a buffer of `len` zeroed bytes.
    pub fn zeroed(len: usize) -> AlignedByteVec {
        AlignedByteVec {
            words: vec![0u64; Self::word_count(len)],
            len,
        }
    }

    /// Returns the logical length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte capacity of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity() * 8
    }

    /// Returns the buffer contents as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.words)[..self.len]
    }

    /// Returns the buffer contents as a mutable byte slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.words)[..self.len]
    }

    /// Appends the given bytes to the end of the buffer.
    pub fn extend_from_slice(&mut self, s: &[u8]) {
        let old_len = self.len;
        self.grow_zeroed(old_len + s.len());
        let bytes = bytemuck::cast_slice_mut::<u64, u8>(&mut self.words);
        bytes[old_len..old_len + s.len()].copy_from_slice(s);
    }

    /// Resizes the buffer to `new_len` bytes, filling any new space
    /// with `value`.
    pub fn resize(&mut self, new_len: usize, value: u8) {
        if new_len > self.len {
            let old_len = self.len;
            self.grow_zeroed(new_len);
            if value != 0 {
                let bytes = bytemuck::cast_slice_mut::<u64, u8>(&mut self.words);
                bytes[old_len..new_len].fill(value);
            }
        } else {
            self.truncate(new_len);
        }
    }

    /// Shortens the buffer to `new_len` bytes. Has no effect if `new_len`
    /// is not less than the current length.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        self.words.truncate(Self::word_count(new_len));
        // Re-zero the tail of the last kept word to maintain the zeroed-tail
        // invariant.
        let bytes = bytemuck::cast_slice_mut::<u64, u8>(&mut self.words);
        bytes[new_len..].fill(0);
        self.len = new_len;
    }

    /// Removes all bytes from the buffer, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.words.clear();
        self.len = 0;
    }

    fn word_count(byte_len: usize) -> usize {
        byte_len.div_ceil(8)
    }

    /// Grows the backing store so it covers `new_len` bytes, with all newly
    /// revealed bytes zeroed, and sets the logical length.
    fn grow_zeroed(&mut self, new_len: usize) {
        debug_assert!(new_len >= self.len);
        self.words.resize(Self::word_count(new_len), 0);
        self.len = new_len;
    }
}

impl AlignedByteVec {
    /// Appends a single value of type `T` to the buffer.
    #[inline]
    pub fn push_typed<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.extend_from_slice(bytemuck::bytes_of(&value));
    }

    /// Resizes the buffer to hold `new_count` elements of type `T`, filling
    /// any new slots with zeroes.
    pub fn resize_zeroed<T>(&mut self, new_count: usize)
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.resize(new_count * std::mem::size_of::<T>(), 0);
    }

    /// Appends all elements of `values` to the buffer.
    #[inline]
    pub fn extend_from_typed_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        self.extend_from_slice(bytemuck::cast_slice(values));
    }

    /// Reinterprets the buffer contents as a slice of `T`, covering the
    /// maximal whole number of elements.
    #[inline]
    pub fn typed_data<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        let size = std::mem::size_of::<T>();
        let whole = self.len / size * size;
        bytemuck::cast_slice(&self.as_slice()[..whole])
    }

    /// Reinterprets the buffer contents as a mutable slice of `T`, covering
    /// the maximal whole number of elements.
    #[inline]
    pub fn typed_data_mut<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        let size = std::mem::size_of::<T>();
        let whole = self.len / size * size;
        bytemuck::cast_slice_mut(&mut self.as_mut_slice()[..whole])
    }
}

impl std::fmt::Debug for AlignedByteVec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AlignedByteVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_byte_ops() {
        let mut vec = AlignedByteVec::new();
        assert!(vec.is_empty());

        vec.extend_from_slice(&[1, 2, 3]);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);

        vec.extend_from_slice(&[4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_alignment() {
        let mut vec = AlignedByteVec::new();
        vec.extend_from_slice(&[0u8; 24]);
        assert_eq!(vec.as_slice().as_ptr() as usize % 8, 0);
        let _: &[f64] = vec.typed_data();
    }

    #[test]
    fn test_resize_and_truncate() {
        let mut vec = AlignedByteVec::zeroed(4);
        vec.resize(10, 7);
        assert_eq!(vec.as_slice(), &[0, 0, 0, 0, 7, 7, 7, 7, 7, 7]);

        vec.truncate(5);
        assert_eq!(vec.as_slice(), &[0, 0, 0, 0, 7]);

        // Growing again must not resurrect the truncated bytes.
        vec.resize(8, 0);
        assert_eq!(vec.as_slice(), &[0, 0, 0, 0, 7, 0, 0, 0]);
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut vec = AlignedByteVec::new();
        vec.push_typed(0x01020304u32);
        vec.push_typed(0x05060708u32);
        assert_eq!(vec.typed_data::<u32>(), &[0x01020304, 0x05060708]);
        assert_eq!(vec.len(), 8);

        vec.extend_from_typed_slice(&[1u32, 2, 3]);
        assert_eq!(vec.typed_data::<u32>().len(), 5);

        vec.typed_data_mut::<u32>()[0] = 42;
        assert_eq!(vec.typed_data::<u32>()[0], 42);
    }

    #[test]
    fn test_resize_zeroed() {
        let mut vec = AlignedByteVec::new();
        vec.push_typed(-1i64);
        vec.resize_zeroed::<i64>(3);
        assert_eq!(vec.typed_data::<i64>(), &[-1, 0, 0]);

        vec.resize_zeroed::<i64>(1);
        assert_eq!(vec.typed_data::<i64>(), &[-1]);
    }
}
