//! Dictionary structure descriptors.

use std::collections::HashSet;

use dictstream_column::kind::ValueKind;
use dictstream_common::{Result, verify_arg};

/// Describes a single dictionary attribute or key sub-field: its unique name
/// and its underlying value kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: String,
    pub kind: ValueKind,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> AttributeDescriptor {
        AttributeDescriptor {
            name: name.into(),
            kind,
        }
    }
}

/// The declared shape of a dictionary's contents.
///
/// A dictionary is addressed either by a dense surrogate id (`id` present)
/// or by a composite key of typed sub-fields (`key` present) — exactly one
/// of the two holds. The attribute list is ordered; that order is the
/// canonical column order of every block produced from the dictionary.
///
/// The structure is immutable after construction.
#[derive(Debug, Clone)]
pub struct DictionaryStructure {
    pub id: Option<AttributeDescriptor>,
    pub key: Option<Vec<AttributeDescriptor>>,
    pub attributes: Vec<AttributeDescriptor>,
}

impl DictionaryStructure {
    /// Creates a structure, validating its invariants:
    ///
    /// - exactly one of {id descriptor, key sub-field list} is present,
    /// - a present key sub-field list is non-empty,
    /// - an id descriptor's kind is `UInt64`,
    /// - all column names (id, key sub-fields, attributes) are unique.
    pub fn try_new(
        id: Option<AttributeDescriptor>,
        key: Option<Vec<AttributeDescriptor>>,
        attributes: Vec<AttributeDescriptor>,
    ) -> Result<DictionaryStructure> {
        verify_arg!(structure, id.is_some() != key.is_some());
        verify_arg!(
            structure,
            key.as_ref().is_none_or(|key| !key.is_empty())
        );
        verify_arg!(
            structure,
            id.as_ref().is_none_or(|id| id.kind == ValueKind::UInt64)
        );

        let structure = DictionaryStructure {
            id,
            key,
            attributes,
        };
        let mut names = HashSet::new();
        verify_arg!(
            structure,
            structure.column_names().all(|name| names.insert(name))
        );
        Ok(structure)
    }

    /// Creates a surrogate-id structure.
    pub fn with_id(
        id_name: impl Into<String>,
        attributes: Vec<AttributeDescriptor>,
    ) -> Result<DictionaryStructure> {
        Self::try_new(
            Some(AttributeDescriptor::new(id_name, ValueKind::UInt64)),
            None,
            attributes,
        )
    }

    /// Creates a composite-key structure.
    pub fn with_key(
        key: Vec<AttributeDescriptor>,
        attributes: Vec<AttributeDescriptor>,
    ) -> Result<DictionaryStructure> {
        Self::try_new(None, Some(key), attributes)
    }

    /// Returns all declared column names in canonical order:
    /// id (if present), key sub-fields in order, attributes in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.id
            .iter()
            .chain(self.key.iter().flatten())
            .chain(self.attributes.iter())
            .map(|descriptor| descriptor.name.as_str())
    }
}
