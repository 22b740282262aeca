//! Decoding and encoding of serialized composite key spans.
//!
//! Each logical key row travels as one opaque byte span holding the
//! concatenated wire encodings of the key's typed sub-fields, in structure
//! order. A span must decode into exactly its declared sub-fields: both
//! missing bytes and residual bytes fail the whole decode, and no partial
//! result is exposed.

use dictstream_column::{column::Column, cursor::ByteCursor};
use dictstream_common::{Result, verify_arg, verify_data};

use crate::structure::AttributeDescriptor;

/// Decodes a sequence of serialized key spans into typed columns, one per
/// key sub-field, in sub-field order.
///
/// Every returned column has exactly `spans.len()` values.
pub fn decode_key_columns(
    spans: &[&[u8]],
    sub_fields: &[AttributeDescriptor],
) -> Result<Vec<Column>> {
    verify_arg!(sub_fields, !sub_fields.is_empty());

    let mut columns: Vec<Column> = sub_fields
        .iter()
        .map(|descriptor| Column::with_capacity(descriptor.kind, spans.len()))
        .collect();

    for span in spans {
        let mut cursor = ByteCursor::new(span);
        for column in &mut columns {
            column.deserialize_and_push(&mut cursor)?;
        }
        verify_data!(key_span, cursor.is_exhausted());
    }
    Ok(columns)
}

/// Serializes key columns back into one span per row; the exact inverse of
/// [`decode_key_columns`].
pub fn serialize_key_columns(columns: &[Column]) -> Result<Vec<Vec<u8>>> {
    verify_arg!(columns, !columns.is_empty());
    let row_count = columns[0].len();
    verify_arg!(columns, columns.iter().all(|c| c.len() == row_count));

    let mut spans = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let mut span = Vec::new();
        for column in columns {
            column.serialize_value_into(row, &mut span);
        }
        spans.push(span);
    }
    Ok(spans)
}
