#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Flat token-stream IR for schema-driven binary codecs.
//!
//! A hierarchical message schema (messages, fields, composites, repeating
//! groups, enumerations, bitsets) is represented as one ordered sequence of
//! tokens. Nesting is encoded with paired start/end signals; layout order is
//! the sequence order.
//!
//! This crate provides:
//! - `token` - the IR node (`Token`), its `Signal`, `Size` and `Offset`
//! - `stream` - `TokenStream`, `StreamIndex`, dumps and serialized forms
//! - `analyze` - nesting validation, offset and cross-reference resolution
//! - `pipeline` - all passes behind one `Config`

pub mod analyze;
pub mod pipeline;
pub mod stream;
pub mod token;

#[cfg(test)]
pub mod test_utils;

pub use codec_ir_core::{ByteOrder, Colors, IrId, Metadata, Presence, PrimitiveType};

pub use analyze::{
    CrossRefs, NestingValidator, OffsetResolver, ReferenceError, ResolutionError,
    StructuralError, XrefResolver, resolve_offsets, resolve_xrefs,
};
pub use pipeline::{Config, Pipeline, ResolvedStream};
pub use stream::{DecodeError, EncodeError, StreamIndex, TokenStream, dump};
pub use token::{
    ConstructionError, Offset, SentinelError, Signal, Size, Token, UNKNOWN_OFFSET, VARIABLE_SIZE,
};

/// Errors from building, validating, resolving or decoding a stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("malformed stream: {0}")]
    Structural(#[from] StructuralError),

    #[error("offset resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("cross-reference resolution failed: {0}")]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, Error>;
