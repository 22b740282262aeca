//! Columnar record blocks handed to consumers.

use dictstream_common::{Result, verify_arg};

use crate::column::Column;

/// A named column inside a [`Block`].
#[derive(Debug, Clone)]
pub struct NamedColumn {
    pub name: String,
    pub column: Column,
}

impl NamedColumn {
    pub fn new(name: impl Into<String>, column: Column) -> NamedColumn {
        NamedColumn {
            name: name.into(),
            column,
        }
    }
}

/// An ordered set of equal-length named columns representing one window of
/// produced rows.
///
/// # Guarantees
///
/// 1. Every column has exactly `len` values.
/// 2. Column order is fixed at construction; consumers may rely on it.
///
/// A block with zero columns is valid and still carries its row count, so a
/// caller that requested no columns can observe how many rows the window
/// covered.
#[derive(Debug, Clone)]
pub struct Block {
    /// Columns in output order. Each column must have `len` values.
    pub fields: Vec<NamedColumn>,
    /// Number of logical rows in this block.
    pub len: usize,
}

impl Block {
    /// Creates a new block, validating that every column length equals `len`.
    pub fn try_new(fields: Vec<NamedColumn>, len: usize) -> Result<Block> {
        verify_arg!(
            fields,
            fields.iter().all(|field| field.column.len() == len)
        );
        Ok(Block { fields, len })
    }

    /// Returns the number of logical rows in this block.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the block contains no rows.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of columns in this block.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the column with the given name, if present.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ValueKind;

    #[test]
    fn test_try_new_validates_lengths() {
        let mut a = Column::empty(ValueKind::UInt8);
        a.push_value(1u8);
        a.push_value(2u8);
        let mut b = Column::empty(ValueKind::String);
        b.push_str("x");
        b.push_str("y");

        let block = Block::try_new(
            vec![NamedColumn::new("a", a.clone()), NamedColumn::new("b", b)],
            2,
        )
        .unwrap();
        assert_eq!(block.len(), 2);
        assert_eq!(block.field_count(), 2);
        assert_eq!(block.column_by_name("a").unwrap().as_slice::<u8>(), &[1, 2]);
        assert!(block.column_by_name("missing").is_none());

        let result = Block::try_new(vec![NamedColumn::new("a", a)], 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_column_block() {
        let block = Block::try_new(Vec::new(), 5).unwrap();
        assert_eq!(block.len(), 5);
        assert_eq!(block.field_count(), 0);
        assert!(!block.is_empty());
    }
}
