//! A typed, homogeneous column of values.

use dictstream_common::{Result, error::Error};

use crate::{cursor::ByteCursor, kind::ValueKind, offsets::Offsets, values::Values};

/// A typed, homogeneous column of values.
///
/// This is the unit of materialized dictionary output: fixed-width numeric
/// values are stored directly in the `values` buffer, while `String` values
/// are stored as a concatenated byte buffer accompanied by an offsets table
/// (N+1 offsets; the value at index `i` occupies the byte range
/// `offsets[i]..offsets[i+1]`).
///
/// A column also knows how to move single values across the serialized key
/// wire format: [`deserialize_and_push`](Column::deserialize_and_push)
/// decodes one value at a bounds-checked cursor, and
/// [`serialize_value_into`](Column::serialize_value_into) is its exact
/// inverse. Numeric values travel as fixed-width little-endian; strings as a
/// `u64` little-endian length prefix followed by the UTF-8 bytes.
#[derive(Debug, Clone)]
pub struct Column {
    values: Values,
    offsets: Option<Offsets>,
    kind: ValueKind,
}

impl Column {
    /// Creates an empty column of the given kind.
    pub fn empty(kind: ValueKind) -> Column {
        Column {
            values: Values::new(),
            offsets: kind.requires_offsets().then(Offsets::new),
            kind,
        }
    }

    /// Creates an empty column with space pre-allocated for `capacity`
    /// values.
    pub fn with_capacity(kind: ValueKind, capacity: usize) -> Column {
        let elem_size = kind.primitive_size().unwrap_or(0);
        Column {
            values: Values::with_byte_capacity(capacity * elem_size),
            offsets: kind
                .requires_offsets()
                .then(|| Offsets::with_capacity(capacity)),
            kind,
        }
    }

    /// Creates a fixed-width column of `len` zeroed values, ready to be
    /// filled in place through [`as_mut_slice`](Column::as_mut_slice).
    ///
    /// # Panics
    ///
    /// Panics if the kind is variable-length.
    pub fn zeroed(kind: ValueKind, len: usize) -> Column {
        let elem_size = kind
            .primitive_size()
            .expect("zeroed column requires a fixed-width kind");
        Column {
            values: Values::zeroed_bytes(len * elem_size),
            offsets: None,
            kind,
        }
    }

    /// Returns the kind of the values in this column.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the number of values in the column.
    pub fn len(&self) -> usize {
        match &self.offsets {
            Some(offsets) => offsets.item_count(),
            None => {
                let elem_size = self.kind.primitive_size().expect("fixed-width kind");
                self.values.bytes_len() / elem_size
            }
        }
    }

    /// Returns `true` if the column contains no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a primitive value to the end of the column.
    ///
    /// # Panics
    ///
    /// Panics if the size of `T` does not match the column's primitive size,
    /// or if the column is variable-length.
    pub fn push_value<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        assert_eq!(self.kind.primitive_size(), Some(std::mem::size_of::<T>()));
        assert!(self.offsets.is_none());
        self.values.push(value);
    }

    /// Appends a string value to the end of the column.
    ///
    /// # Panics
    ///
    /// Panics if the column's kind is not `String`.
    pub fn push_str(&mut self, value: &str) {
        assert_eq!(self.kind, ValueKind::String);
        self.offsets.as_mut().unwrap().push_length(value.len());
        self.values.extend_from_slice(value.as_bytes());
    }

    /// Extends the column by appending all elements from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the size of `T` does not match the column's primitive size,
    /// or if the column is variable-length.
    pub fn extend_from_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        assert_eq!(self.kind.primitive_size(), Some(std::mem::size_of::<T>()));
        assert!(self.offsets.is_none());
        self.values.extend_from_slice(values);
    }

    /// Interprets the column contents as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the size of `T` does not match the column's primitive size.
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        assert_eq!(self.kind.primitive_size(), Some(std::mem::size_of::<T>()));
        self.values.as_slice()
    }

    /// Interprets the column contents as a mutable slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the size of `T` does not match the column's primitive size.
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        assert_eq!(self.kind.primitive_size(), Some(std::mem::size_of::<T>()));
        self.values.as_mut_slice()
    }

    /// Returns the bytes of the variable-length value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the column is fixed-width or `index` is out of bounds.
    pub fn binary_at(&self, index: usize) -> &[u8] {
        let offsets = self.offsets.as_ref().expect("missing offsets");
        &self.values.as_bytes()[offsets.range_at(index)]
    }

    /// Returns the string value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the column is fixed-width or `index` is out of bounds.
    pub fn string_at(&self, index: usize) -> &str {
        std::str::from_utf8(self.binary_at(index)).expect("invalid utf8")
    }

    /// Extends this column by appending a range of values from another
    /// column of the same kind.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the source length or the kinds
    /// differ.
    pub fn extend_from_column(&mut self, source: &Column, offset: usize, len: usize) {
        assert!(offset + len <= source.len());
        assert_eq!(self.kind, source.kind);

        match self.kind {
            ValueKind::UInt8 | ValueKind::Int8 => {
                self.append_values::<u8>(&source.values, offset, len)
            }
            ValueKind::UInt16 | ValueKind::Int16 => {
                self.append_values::<u16>(&source.values, offset, len)
            }
            ValueKind::UInt32 | ValueKind::Int32 | ValueKind::Float32 => {
                self.append_values::<u32>(&source.values, offset, len)
            }
            ValueKind::UInt64 | ValueKind::Int64 | ValueKind::Float64 => {
                self.append_values::<u64>(&source.values, offset, len)
            }
            ValueKind::String => {
                let offsets = source.offsets.as_ref().expect("offsets are required");
                let data_start = offsets.as_slice()[offset] as usize;
                let data_end = offsets.as_slice()[offset + len] as usize;
                self.values
                    .extend_from_byte_range(&source.values, data_start..data_end);
                self.offsets
                    .as_mut()
                    .expect("offsets are required")
                    .extend_from_offsets_range(offsets, offset, len);
            }
        }
    }

    /// Returns a freshly allocated copy of the window
    /// `[start, start + len)` of this column.
    pub fn slice(&self, start: usize, len: usize) -> Column {
        let mut column = Column::with_capacity(self.kind, len);
        column.extend_from_column(self, start, len);
        column
    }

    /// Decodes exactly one value starting at the cursor and appends it to
    /// the column, advancing the cursor past the consumed bytes.
    ///
    /// Fails with an invalid-format error if fewer bytes remain than the
    /// value needs, or if a decoded string is not valid UTF-8.
    pub fn deserialize_and_push(&mut self, cursor: &mut ByteCursor) -> Result<()> {
        match self.kind {
            ValueKind::UInt8 => self.push_value(u8::from_le_bytes(cursor.read_array()?)),
            ValueKind::UInt16 => self.push_value(u16::from_le_bytes(cursor.read_array()?)),
            ValueKind::UInt32 => self.push_value(u32::from_le_bytes(cursor.read_array()?)),
            ValueKind::UInt64 => self.push_value(u64::from_le_bytes(cursor.read_array()?)),
            ValueKind::Int8 => self.push_value(i8::from_le_bytes(cursor.read_array()?)),
            ValueKind::Int16 => self.push_value(i16::from_le_bytes(cursor.read_array()?)),
            ValueKind::Int32 => self.push_value(i32::from_le_bytes(cursor.read_array()?)),
            ValueKind::Int64 => self.push_value(i64::from_le_bytes(cursor.read_array()?)),
            ValueKind::Float32 => self.push_value(f32::from_le_bytes(cursor.read_array()?)),
            ValueKind::Float64 => self.push_value(f64::from_le_bytes(cursor.read_array()?)),
            ValueKind::String => {
                let len = u64::from_le_bytes(cursor.read_array()?);
                let bytes = cursor.read_bytes(len as usize)?;
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| Error::invalid_format("key_span", "invalid utf8"))?;
                self.push_str(text);
            }
        }
        Ok(())
    }

    /// Serializes the value at `index` into `out`, producing exactly the
    /// bytes [`deserialize_and_push`](Column::deserialize_and_push) consumes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn serialize_value_into(&self, index: usize, out: &mut Vec<u8>) {
        match self.kind {
            ValueKind::UInt8 => out.extend_from_slice(&self.as_slice::<u8>()[index].to_le_bytes()),
            ValueKind::UInt16 => {
                out.extend_from_slice(&self.as_slice::<u16>()[index].to_le_bytes())
            }
            ValueKind::UInt32 => {
                out.extend_from_slice(&self.as_slice::<u32>()[index].to_le_bytes())
            }
            ValueKind::UInt64 => {
                out.extend_from_slice(&self.as_slice::<u64>()[index].to_le_bytes())
            }
            ValueKind::Int8 => out.extend_from_slice(&self.as_slice::<i8>()[index].to_le_bytes()),
            ValueKind::Int16 => out.extend_from_slice(&self.as_slice::<i16>()[index].to_le_bytes()),
            ValueKind::Int32 => out.extend_from_slice(&self.as_slice::<i32>()[index].to_le_bytes()),
            ValueKind::Int64 => out.extend_from_slice(&self.as_slice::<i64>()[index].to_le_bytes()),
            ValueKind::Float32 => {
                out.extend_from_slice(&self.as_slice::<f32>()[index].to_le_bytes())
            }
            ValueKind::Float64 => {
                out.extend_from_slice(&self.as_slice::<f64>()[index].to_le_bytes())
            }
            ValueKind::String => {
                let bytes = self.binary_at(index);
                out.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
                out.extend_from_slice(bytes);
            }
        }
    }

    fn append_values<T>(&mut self, other: &Values, offset: usize, len: usize)
    where
        T: bytemuck::NoUninit + bytemuck::AnyBitPattern,
    {
        self.values
            .extend_from_slice(&other.as_slice::<T>()[offset..offset + len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_push_and_read() {
        let mut column = Column::empty(ValueKind::Int32);
        column.push_value(100i32);
        column.push_value(-5i32);
        column.push_value(7i32);
        assert_eq!(column.len(), 3);
        assert_eq!(column.as_slice::<i32>(), &[100, -5, 7]);
    }

    #[test]
    fn test_zeroed_fill_in_place() {
        let mut column = Column::zeroed(ValueKind::UInt16, 4);
        assert_eq!(column.len(), 4);
        column.as_mut_slice::<u16>().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(column.as_slice::<u16>(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_string_column() {
        let mut column = Column::empty(ValueKind::String);
        column.push_str("a");
        column.push_str("");
        column.push_str("bb");
        assert_eq!(column.len(), 3);
        assert_eq!(column.string_at(0), "a");
        assert_eq!(column.string_at(1), "");
        assert_eq!(column.string_at(2), "bb");
    }

    #[test]
    fn test_slice_fixed_width() {
        let mut column = Column::empty(ValueKind::UInt64);
        column.extend_from_slice(&[10u64, 20, 30, 40, 50]);
        let window = column.slice(1, 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.as_slice::<u64>(), &[20, 30, 40]);
    }

    #[test]
    fn test_slice_strings() {
        let mut column = Column::empty(ValueKind::String);
        for value in ["x", "yy", "zzz", "w"] {
            column.push_str(value);
        }
        let window = column.slice(1, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window.string_at(0), "yy");
        assert_eq!(window.string_at(1), "zzz");
    }

    #[test]
    fn test_serialize_roundtrip() {
        let mut column = Column::empty(ValueKind::Int16);
        column.push_value(-300i16);
        column.push_value(42i16);

        let mut span = Vec::new();
        column.serialize_value_into(0, &mut span);
        column.serialize_value_into(1, &mut span);
        assert_eq!(span.len(), 4);

        let mut decoded = Column::empty(ValueKind::Int16);
        let mut cursor = ByteCursor::new(&span);
        decoded.deserialize_and_push(&mut cursor).unwrap();
        decoded.deserialize_and_push(&mut cursor).unwrap();
        assert!(cursor.is_exhausted());
        assert_eq!(decoded.as_slice::<i16>(), &[-300, 42]);
    }

    #[test]
    fn test_string_serialize_roundtrip() {
        let mut column = Column::empty(ValueKind::String);
        column.push_str("hello");
        let mut span = Vec::new();
        column.serialize_value_into(0, &mut span);
        assert_eq!(span.len(), 8 + 5);

        let mut decoded = Column::empty(ValueKind::String);
        let mut cursor = ByteCursor::new(&span);
        decoded.deserialize_and_push(&mut cursor).unwrap();
        assert!(cursor.is_exhausted());
        assert_eq!(decoded.string_at(0), "hello");
    }

    #[test]
    fn test_deserialize_insufficient_bytes() {
        let mut column = Column::empty(ValueKind::UInt32);
        let mut cursor = ByteCursor::new(&[1, 2]);
        assert!(column.deserialize_and_push(&mut cursor).is_err());
        assert!(column.is_empty());
    }

    #[test]
    fn test_deserialize_invalid_utf8() {
        let mut span = Vec::new();
        span.extend_from_slice(&2u64.to_le_bytes());
        span.extend_from_slice(&[0xff, 0xfe]);

        let mut column = Column::empty(ValueKind::String);
        let mut cursor = ByteCursor::new(&span);
        assert!(column.deserialize_and_push(&mut cursor).is_err());
    }
}
