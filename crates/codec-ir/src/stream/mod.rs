//! Token streams and structural views over them.
//!
//! - `TokenStream` - the ordered sequence of tokens for one entity
//! - `StreamIndex` - depth/parent/partner lookups built by the nesting validator
//! - `dump` - human-readable rendering
//! - `binary` - checked binary container and JSON form

mod binary;
mod dump;
mod index;
#[allow(clippy::module_inception)]
mod stream;

#[cfg(test)]
mod binary_tests;

pub use binary::{DecodeError, EncodeError, HEADER_SIZE, MAGIC, StreamHeader, VERSION};
pub use dump::dump;
pub use index::StreamIndex;
pub use stream::TokenStream;
