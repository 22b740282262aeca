//! The windowed block reader over dictionary contents.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use dictstream_column::{
    block::{Block, NamedColumn},
    column::Column,
    kind::ValueKind,
};
use dictstream_common::{Result, error::Error, verify_arg};

use crate::{
    codec::decode_key_columns,
    dictionary::Dictionary,
    stream::BlockSource,
    structure::AttributeDescriptor,
};

/// The addressing input fixed at reader construction: either the full
/// surrogate-id sequence, or the key columns decoded once from the
/// serialized key spans.
#[derive(Debug)]
enum KeySource {
    Ids(Vec<u64>),
    CompositeKeys(Vec<Column>),
}

/// One window of addressing input handed to attribute materialization.
#[derive(Clone, Copy)]
enum Window<'a> {
    Ids(&'a [u64]),
    Keys {
        columns: &'a [Column],
        kinds: &'a [ValueKind],
    },
}

/// Invokes the mode-appropriate bulk getter for one fixed-width attribute,
/// filling a pre-zeroed column of the window's row count.
macro_rules! materialize_numeric {
    ($self:expr, $attribute:expr, $window:expr, $length:expr, $ty:ty, $by_id:ident, $by_key:ident) => {{
        let mut column = Column::zeroed($attribute.kind, $length);
        match $window {
            Window::Ids(ids) => {
                $self
                    .dictionary
                    .$by_id(&$attribute.name, ids, column.as_mut_slice::<$ty>())?
            }
            Window::Keys { columns, kinds } => $self.dictionary.$by_key(
                &$attribute.name,
                columns,
                kinds,
                column.as_mut_slice::<$ty>(),
            )?,
        }
        column
    }};
}

/// Produces columnar blocks from the in-memory contents of a dictionary,
/// one caller-specified window at a time.
///
/// A reader is constructed once per consumption of dictionary contents —
/// either over a surrogate-id sequence ([`from_ids`](Self::from_ids)) or
/// over serialized composite-key spans
/// ([`from_key_spans`](Self::from_key_spans)) — and is immutable afterward.
/// Composite keys are decoded into typed columns once, at construction, and
/// re-sliced for every window.
///
/// [`produce`](Self::produce) is synchronous and performs no lookups outside
/// the call; distinct windows may be produced concurrently from multiple
/// threads as long as the dictionary's getters tolerate concurrent reads.
#[derive(Debug)]
pub struct DictionaryBlockReader<D: Dictionary> {
    dictionary: Arc<D>,
    requested: HashSet<String>,
    source: KeySource,
    key_kinds: Vec<ValueKind>,
    total_row_count: usize,
}

impl<D: Dictionary> DictionaryBlockReader<D> {
    /// Creates a reader over a surrogate-id dictionary.
    ///
    /// `column_names` is the set of output columns the caller wants; names
    /// not declared by the dictionary structure are ignored. Fails if the
    /// structure declares no surrogate id.
    pub fn from_ids(
        dictionary: Arc<D>,
        ids: Vec<u64>,
        column_names: impl IntoIterator<Item = String>,
    ) -> Result<DictionaryBlockReader<D>> {
        verify_arg!(dictionary, dictionary.structure().id.is_some());
        let total_row_count = ids.len();
        debug!("dictionary block reader: {total_row_count} rows by surrogate id");
        Ok(DictionaryBlockReader {
            dictionary,
            requested: column_names.into_iter().collect(),
            source: KeySource::Ids(ids),
            key_kinds: Vec::new(),
            total_row_count,
        })
    }

    /// Creates a reader over a composite-key dictionary, decoding all key
    /// spans into typed key columns up front.
    ///
    /// Fails if the structure declares no key sub-fields, or if any span
    /// does not decode into exactly the declared sub-fields.
    pub fn from_key_spans(
        dictionary: Arc<D>,
        spans: &[&[u8]],
        column_names: impl IntoIterator<Item = String>,
    ) -> Result<DictionaryBlockReader<D>> {
        let sub_fields: Vec<AttributeDescriptor> = match &dictionary.structure().key {
            Some(sub_fields) => sub_fields.clone(),
            None => {
                return Err(Error::invalid_arg(
                    "dictionary",
                    "composite-key reader requires key sub-field descriptors",
                ));
            }
        };
        let key_columns = decode_key_columns(spans, &sub_fields)?;
        debug!(
            "dictionary block reader: {} rows by composite key ({} sub-fields)",
            spans.len(),
            sub_fields.len()
        );
        Ok(DictionaryBlockReader {
            dictionary,
            requested: column_names.into_iter().collect(),
            source: KeySource::CompositeKeys(key_columns),
            key_kinds: sub_fields.iter().map(|field| field.kind).collect(),
            total_row_count: spans.len(),
        })
    }

    /// Returns the total number of rows fixed at construction.
    pub fn total_row_count(&self) -> usize {
        self.total_row_count
    }

    /// Returns a human-readable component name for diagnostics.
    pub fn name(&self) -> &str {
        "DictionaryBlockReader"
    }

    /// Produces one block covering exactly the rows
    /// `[start, start + length)`.
    ///
    /// Fails if the window exceeds the total row count. Assembly is
    /// all-or-nothing: on any failure no block is returned.
    pub fn produce(&self, start: usize, length: usize) -> Result<Block> {
        verify_arg!(window, start + length <= self.total_row_count);
        match &self.source {
            KeySource::Ids(ids) => {
                let window_ids = ids[start..start + length].to_vec();
                self.fill_block(Window::Ids(&window_ids), length)
            }
            KeySource::CompositeKeys(columns) => {
                let window_columns: Vec<Column> = columns
                    .iter()
                    .map(|column| column.slice(start, length))
                    .collect();
                self.fill_block(
                    Window::Keys {
                        columns: &window_columns,
                        kinds: &self.key_kinds,
                    },
                    length,
                )
            }
        }
    }

    /// Assembles the output block for one window: the id column (when the
    /// structure declares one and it is requested), then the key columns in
    /// structure order, then the attribute columns in structure order —
    /// each filtered by the requested name set. Unrequested attributes are
    /// never looked up.
    fn fill_block(&self, window: Window<'_>, length: usize) -> Result<Block> {
        let structure = self.dictionary.structure();
        let mut fields = Vec::new();

        if let Some(id) = &structure.id
            && self.requested.contains(&id.name)
        {
            let ids = match window {
                Window::Ids(ids) => ids,
                Window::Keys { .. } => &[],
            };
            fields.push(NamedColumn::new(id.name.clone(), column_from_ids(ids)));
        }

        if let (Some(sub_fields), Window::Keys { columns, .. }) = (&structure.key, window) {
            for (descriptor, column) in sub_fields.iter().zip(columns) {
                if self.requested.contains(&descriptor.name) {
                    fields.push(NamedColumn::new(descriptor.name.clone(), column.clone()));
                }
            }
        }

        for attribute in &structure.attributes {
            if !self.requested.contains(&attribute.name) {
                continue;
            }
            let column = self.materialize_attribute(attribute, window, length)?;
            fields.push(NamedColumn::new(attribute.name.clone(), column));
        }

        Block::try_new(fields, length)
    }

    /// Materializes one attribute column for the window, dispatching on the
    /// attribute's underlying kind. The mapping is total over the kind
    /// catalog; there is no default arm.
    fn materialize_attribute(
        &self,
        attribute: &AttributeDescriptor,
        window: Window<'_>,
        length: usize,
    ) -> Result<Column> {
        let column = match attribute.kind {
            ValueKind::UInt8 => {
                materialize_numeric!(self, attribute, window, length, u8, get_u8, get_u8_by_key)
            }
            ValueKind::UInt16 => {
                materialize_numeric!(self, attribute, window, length, u16, get_u16, get_u16_by_key)
            }
            ValueKind::UInt32 => {
                materialize_numeric!(self, attribute, window, length, u32, get_u32, get_u32_by_key)
            }
            ValueKind::UInt64 => {
                materialize_numeric!(self, attribute, window, length, u64, get_u64, get_u64_by_key)
            }
            ValueKind::Int8 => {
                materialize_numeric!(self, attribute, window, length, i8, get_i8, get_i8_by_key)
            }
            ValueKind::Int16 => {
                materialize_numeric!(self, attribute, window, length, i16, get_i16, get_i16_by_key)
            }
            ValueKind::Int32 => {
                materialize_numeric!(self, attribute, window, length, i32, get_i32, get_i32_by_key)
            }
            ValueKind::Int64 => {
                materialize_numeric!(self, attribute, window, length, i64, get_i64, get_i64_by_key)
            }
            ValueKind::Float32 => {
                materialize_numeric!(self, attribute, window, length, f32, get_f32, get_f32_by_key)
            }
            ValueKind::Float64 => {
                materialize_numeric!(self, attribute, window, length, f64, get_f64, get_f64_by_key)
            }
            ValueKind::String => {
                let mut column = Column::with_capacity(ValueKind::String, length);
                match window {
                    Window::Ids(ids) => {
                        self.dictionary
                            .get_string(&attribute.name, ids, &mut column)?
                    }
                    Window::Keys { columns, kinds } => self.dictionary.get_string_by_key(
                        &attribute.name,
                        columns,
                        kinds,
                        &mut column,
                    )?,
                }
                column
            }
        };
        Ok(column)
    }
}

impl<D: Dictionary> BlockSource for DictionaryBlockReader<D> {
    fn total_row_count(&self) -> usize {
        DictionaryBlockReader::total_row_count(self)
    }

    fn name(&self) -> &str {
        DictionaryBlockReader::name(self)
    }

    fn produce_block(&self, start: usize, length: usize) -> Result<Block> {
        self.produce(start, length)
    }
}

/// Builds the surrogate-id output column by copying the window's ids into a
/// `UInt64` column.
fn column_from_ids(ids: &[u64]) -> Column {
    let mut column = Column::with_capacity(ValueKind::UInt64, ids.len());
    column.extend_from_slice(ids);
    column
}
