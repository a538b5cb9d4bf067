//! Errors reported by the analysis passes.
//!
//! Every variant carries the stream positions (and identifiers, where they
//! exist) needed to find the defect in the source schema.

use codec_ir_core::IrId;

use crate::token::Signal;

/// The stream is not a well-formed bracket sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("stream contains no tokens")]
    EmptyStream,

    #[error("{signal} at position {position} closes nothing")]
    UnmatchedEnd { position: usize, signal: Signal },

    #[error(
        "{signal} at position {position} crosses unclosed {open_signal} at position {open_position}"
    )]
    CrossedEnd {
        position: usize,
        signal: Signal,
        open_position: usize,
        open_signal: Signal,
    },

    #[error("{signal} at position {position} is never closed")]
    UnmatchedStart { position: usize, signal: Signal },
}

impl StructuralError {
    /// Position of the token the error is about.
    ///
    /// For crossed brackets this is the start token left open, since that is
    /// what the schema author has to fix.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyStream => None,
            Self::UnmatchedEnd { position, .. } | Self::UnmatchedStart { position, .. } => {
                Some(*position)
            }
            Self::CrossedEnd { open_position, .. } => Some(*open_position),
        }
    }
}

/// Offsets could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("resolution needs a validated stream: {0}")]
    NotValidated(#[from] StructuralError),

    #[error("index does not describe this stream (disagrees at position {position})")]
    IndexMismatch { position: usize },

    #[error("offsets after position {position} exceed {max} bytes", max = u32::MAX)]
    OffsetOverflow { position: usize },
}

/// A cross-reference between two tokens is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// The stream could not be paired at all: it is malformed, or the index
    /// handed in describes another stream.
    #[error(transparent)]
    Unresolved(#[from] ResolutionError),

    #[error("id {id} used at position {first} and again at position {second}")]
    DuplicateId {
        id: IrId,
        first: usize,
        second: usize,
    },

    #[error("token at position {position} references id {target}, which does not exist")]
    Dangling {
        position: usize,
        id: Option<IrId>,
        target: IrId,
    },

    #[error("token at position {position} references id {target} but has no id of its own")]
    Unidentified { position: usize, target: IrId },

    #[error("token at position {position} (id {id}) references itself")]
    SelfReference { position: usize, id: IrId },

    #[error(
        "id {id} at position {position} references id {target} at position {target_position}, {}",
        describe_back(.back)
    )]
    Asymmetric {
        position: usize,
        id: IrId,
        target: IrId,
        target_position: usize,
        back: Option<IrId>,
    },
}

fn describe_back(back: &Option<IrId>) -> String {
    match back {
        Some(other) => format!("which references id {other} instead"),
        None => "which has no back-reference".to_string(),
    }
}
