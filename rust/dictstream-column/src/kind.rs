//! The closed catalog of underlying value types.

/// The underlying storage type of a dictionary attribute or key sub-field.
///
/// This is a closed set: every attribute a dictionary declares carries
/// exactly one of these tags, and every tag maps to exactly one column
/// representation and one dictionary lookup entry point. Extending the
/// catalog requires extending those total mappings as well; there is no
/// fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
}

impl ValueKind {
    /// All members of the catalog, in declaration order.
    pub const ALL: [ValueKind; 11] = [
        ValueKind::UInt8,
        ValueKind::UInt16,
        ValueKind::UInt32,
        ValueKind::UInt64,
        ValueKind::Int8,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Float32,
        ValueKind::Float64,
        ValueKind::String,
    ];

    /// Returns the fixed size of the value in bytes, or `None` for
    /// variable-length values.
    pub fn primitive_size(&self) -> Option<usize> {
        match self {
            ValueKind::UInt8 | ValueKind::Int8 => Some(1),
            ValueKind::UInt16 | ValueKind::Int16 => Some(2),
            ValueKind::UInt32 | ValueKind::Int32 | ValueKind::Float32 => Some(4),
            ValueKind::UInt64 | ValueKind::Int64 | ValueKind::Float64 => Some(8),
            ValueKind::String => None,
        }
    }

    /// Returns `true` if a column of this kind stores its values through
    /// an offsets table (variable-length values).
    pub fn requires_offsets(&self) -> bool {
        matches!(self, ValueKind::String)
    }

    /// Returns `true` if this is one of the signed integer kinds.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            ValueKind::Int8 | ValueKind::Int16 | ValueKind::Int32 | ValueKind::Int64
        )
    }

    /// Returns `true` if this is one of the integer kinds, signed or not.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ValueKind::UInt8
                | ValueKind::UInt16
                | ValueKind::UInt32
                | ValueKind::UInt64
                | ValueKind::Int8
                | ValueKind::Int16
                | ValueKind::Int32
                | ValueKind::Int64
        )
    }

    /// Returns `true` if this is one of the floating-point kinds.
    pub fn is_float(&self) -> bool {
        matches!(self, ValueKind::Float32 | ValueKind::Float64)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
