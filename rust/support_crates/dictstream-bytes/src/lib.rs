//! Aligned byte buffers for typed columnar storage.

pub mod buffer;

pub use buffer::AlignedByteVec;
