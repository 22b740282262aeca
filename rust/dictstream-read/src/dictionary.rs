//! The bulk-lookup interface a dictionary exposes to block production.

use dictstream_column::{column::Column, kind::ValueKind};
use dictstream_common::{Result, error::Error};

use crate::structure::DictionaryStructure;

/// Generates the two lookup shapes for one fixed-width value type:
/// a by-id getter taking the surrogate-id window, and a by-key getter taking
/// the decoded key columns plus their declared kinds.
macro_rules! numeric_getters {
    ($(($by_id:ident, $by_key:ident, $ty:ty)),+ $(,)?) => {
        $(
            /// Fills `out` with the attribute value for each id in `ids`.
            ///
            /// `out` has exactly `ids.len()` slots, pre-zeroed by the caller.
            fn $by_id(&self, attribute: &str, ids: &[u64], out: &mut [$ty]) -> Result<()> {
                let _ = (attribute, ids, out);
                Err(Error::not_implemented(concat!(
                    "Dictionary::",
                    stringify!($by_id)
                )))
            }

            /// Fills `out` with the attribute value for each row of the key
            /// columns.
            ///
            /// `keys` holds one column per key sub-field, in structure order;
            /// `key_kinds` carries their declared kinds. `out` has exactly
            /// one slot per key row, pre-zeroed by the caller.
            fn $by_key(
                &self,
                attribute: &str,
                keys: &[Column],
                key_kinds: &[ValueKind],
                out: &mut [$ty],
            ) -> Result<()> {
                let _ = (attribute, keys, key_kinds, out);
                Err(Error::not_implemented(concat!(
                    "Dictionary::",
                    stringify!($by_key)
                )))
            }
        )+
    };
}

/// An in-memory key→attributes lookup structure supporting bulk typed
/// lookups by surrogate id or by composite key.
///
/// Every getter either fills its output for the whole input in one call or
/// fails; errors propagate to the block production call unchanged. All
/// getters have not-implemented default bodies so a concrete dictionary only
/// implements the shapes of its addressing mode (a surrogate-id dictionary
/// never receives by-key calls and vice versa).
///
/// Getters must be safe for concurrent read access; block readers may invoke
/// them from multiple threads at once.
pub trait Dictionary: Send + Sync {
    /// Returns the declared structure of this dictionary's contents.
    fn structure(&self) -> &DictionaryStructure;

    numeric_getters! {
        (get_u8, get_u8_by_key, u8),
        (get_u16, get_u16_by_key, u16),
        (get_u32, get_u32_by_key, u32),
        (get_u64, get_u64_by_key, u64),
        (get_i8, get_i8_by_key, i8),
        (get_i16, get_i16_by_key, i16),
        (get_i32, get_i32_by_key, i32),
        (get_i64, get_i64_by_key, i64),
        (get_f32, get_f32_by_key, f32),
        (get_f64, get_f64_by_key, f64),
    }

    /// Appends the attribute's string value for each id in `ids` to `out`,
    /// an empty growable `String` column.
    fn get_string(&self, attribute: &str, ids: &[u64], out: &mut Column) -> Result<()> {
        let _ = (attribute, ids, out);
        Err(Error::not_implemented("Dictionary::get_string"))
    }

    /// Appends the attribute's string value for each row of the key columns
    /// to `out`, an empty growable `String` column.
    fn get_string_by_key(
        &self,
        attribute: &str,
        keys: &[Column],
        key_kinds: &[ValueKind],
        out: &mut Column,
    ) -> Result<()> {
        let _ = (attribute, keys, key_kinds, out);
        Err(Error::not_implemented("Dictionary::get_string_by_key"))
    }
}
