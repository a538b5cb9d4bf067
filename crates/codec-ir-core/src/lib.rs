#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core value types for the codec IR.
//!
//! These are the leaf types every stage of the pipeline shares:
//! - **Metadata**: identifier, cross-reference identifier, name, presence
//! - **Encodings**: primitive scalar types and byte order
//! - **Colors**: ANSI palette for human-readable dumps

mod colors;
mod metadata;
mod primitive;

#[cfg(test)]
mod primitive_tests;

pub use colors::Colors;
pub use metadata::{IrId, Metadata, Presence};
pub use primitive::{ByteOrder, PrimitiveType};
