//! Tokens: the nodes of the flat IR.
//!
//! A token is an immutable value describing one position in a stream:
//! its structural role ([`Signal`]), its encoding if it is a leaf, its
//! [`Size`] and [`Offset`], and its metadata.

mod error;
mod signal;
mod size;
#[allow(clippy::module_inception)]
mod token;


pub use error::{ConstructionError, SentinelError};
pub use signal::Signal;
pub use size::{Offset, Size, UNKNOWN_OFFSET, VARIABLE_SIZE};
pub use token::Token;
