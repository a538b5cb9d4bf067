//! Passes over a token stream.
//!
//! - `nesting` - bracket well-formedness, builds the `StreamIndex`
//! - `offsets` - byte offset resolution, deferred past variable-size content
//! - `xref` - bidirectional cross-reference pairing

mod error;
mod nesting;
mod offsets;
mod xref;

#[cfg(test)]
mod nesting_tests;

pub use error::{ReferenceError, ResolutionError, StructuralError};
pub use nesting::NestingValidator;
pub use offsets::{OffsetResolver, resolve_offsets};
pub use xref::{CrossRefs, XrefResolver, resolve_xrefs};
