//! Typed column abstractions for dictionary block production.
//!
//! This crate provides the building blocks for materializing dictionary
//! contents in columnar form: the closed [`ValueKind`](kind::ValueKind)
//! catalog of underlying value types, the [`Column`](column::Column) value
//! container with its wire codec hooks, and the [`Block`](block::Block)
//! record batch handed to consumers.

pub mod block;
pub mod column;
pub mod cursor;
pub mod kind;
pub mod offsets;
pub mod values;
