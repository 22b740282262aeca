//! Windowed block production over in-memory lookup dictionaries.
//!
//! A [`DictionaryBlockReader`](reader::DictionaryBlockReader) turns bulk
//! attribute lookups against a [`Dictionary`](dictionary::Dictionary) into
//! columnar [`Block`](dictstream_column::block::Block)s, one bounded window
//! at a time. Dictionaries are addressed either by dense surrogate ids or by
//! composite keys transmitted as serialized byte spans; the
//! [`codec`] module reconstructs typed key columns from the latter.
//! [`BlockStream`](stream::BlockStream) drives a reader through
//! non-overlapping windows until the dictionary contents are exhausted.

pub mod codec;
pub mod dictionary;
pub mod reader;
pub mod stream;
pub mod structure;

pub use dictionary::Dictionary;
pub use reader::DictionaryBlockReader;
pub use stream::{BlockSource, BlockStream};
pub use structure::{AttributeDescriptor, DictionaryStructure};
