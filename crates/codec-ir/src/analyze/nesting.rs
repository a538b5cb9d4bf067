//! Bracket well-formedness of a token stream.
//!
//! One left-to-right scan with a stack of open start tokens. The same scan
//! records depth, parent and partner of every position into a [`StreamIndex`],
//! which is what later passes and consumers use for tree-shaped queries.

use tracing::{debug, instrument, trace};

use crate::stream::{StreamIndex, TokenStream};
use crate::token::Signal;

use super::StructuralError;

/// Checks that every start signal is closed by the matching end signal at the
/// same depth, with no crossing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestingValidator {
    allow_empty: bool,
}

impl NestingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a stream with no tokens as an entity without content.
    pub fn allow_empty(mut self, value: bool) -> Self {
        self.allow_empty = value;
        self
    }

    /// Validate `stream` and index its structure.
    ///
    /// Never rewrites the stream.
    #[instrument(level = "debug", skip_all, fields(tokens = stream.len()))]
    pub fn validate(&self, stream: &TokenStream) -> Result<StreamIndex, StructuralError> {
        if stream.is_empty() && !self.allow_empty {
            return Err(StructuralError::EmptyStream);
        }

        let mut index = StreamIndex::with_capacity(stream.len());
        let mut open: Vec<(Signal, usize)> = Vec::new();

        for (position, token) in stream.iter().enumerate() {
            let signal = token.signal();

            if let Some(expected_start) = signal.opening() {
                let Some(&(open_signal, open_position)) = open.last() else {
                    return Err(StructuralError::UnmatchedEnd { position, signal });
                };
                if open_signal != expected_start {
                    return Err(StructuralError::CrossedEnd {
                        position,
                        signal,
                        open_position,
                        open_signal,
                    });
                }
                open.pop();
                index.push(open.len() as u32, open.last().map(|&(_, p)| p));
                index.pair(open_position, position);
                trace!(position, %signal, depth = open.len(), "closed");
                continue;
            }

            index.push(open.len() as u32, open.last().map(|&(_, p)| p));
            if signal.is_start() {
                open.push((signal, position));
            }
        }

        if let Some(&(signal, position)) = open.last() {
            return Err(StructuralError::UnmatchedStart { position, signal });
        }

        debug!(max_depth = index.max_depth(), "nesting valid");
        Ok(index)
    }
}
