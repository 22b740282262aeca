//! Core definitions (error plumbing and common macros), relied upon by all
//! dictstream-* crates.

pub mod error;
pub mod result;

pub use result::Result;
