//! Byte offset resolution.
//!
//! Offsets are relative to the enclosing entity: a field inside a repeating
//! group is positioned from the start of the group entry, the group itself
//! from the start of its parent. Within one entity, a unit (leaf, marker, or
//! whole nested entity) sits at the sum of the sizes of the units before it.
//! Once a variable-size unit has been passed, every later unit in the same
//! entity is `Offset::Unknown`; the variable unit itself keeps its offset.
//!
//! Size of a nested entity as seen by its parent:
//! - variable if its start token declares `Size::Variable`
//! - variable for repeating groups (entry count is a runtime value)
//! - otherwise the sum of its own units
//!
//! End tokens share the offset of their start token.

use tracing::{debug, instrument, trace};

use crate::stream::{StreamIndex, TokenStream};
use crate::token::{Offset, Signal, Size};

use super::{NestingValidator, ResolutionError};

/// Running position inside one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Known(u32),
    /// A variable-size unit has been passed.
    Deferred,
}

impl Cursor {
    fn offset(self) -> Offset {
        match self {
            Self::Known(n) => Offset::At(n),
            Self::Deferred => Offset::Unknown,
        }
    }

    /// Total size of everything this cursor has passed.
    fn extent(self) -> Size {
        match self {
            Self::Known(n) => Size::Fixed(n),
            Self::Deferred => Size::Variable,
        }
    }

    fn advance(self, size: Size, position: usize) -> Result<Self, ResolutionError> {
        match (self, size) {
            (Self::Known(n), Size::Fixed(s)) => n
                .checked_add(s)
                .map(Self::Known)
                .ok_or(ResolutionError::OffsetOverflow { position }),
            _ => Ok(Self::Deferred),
        }
    }
}

/// An entity whose end token has not been reached yet.
struct Frame {
    start: usize,
    cursor: Cursor,
}

/// Assigns an offset to every token of a validated stream.
pub struct OffsetResolver<'a> {
    stream: &'a TokenStream,
    index: &'a StreamIndex,
}

impl<'a> OffsetResolver<'a> {
    /// Pair a stream with the index its validation produced.
    pub fn new(stream: &'a TokenStream, index: &'a StreamIndex) -> Result<Self, ResolutionError> {
        if index.len() != stream.len() {
            return Err(ResolutionError::IndexMismatch {
                position: index.len().min(stream.len()),
            });
        }
        Ok(Self { stream, index })
    }

    /// Produce a copy of the stream with every offset freshly assigned.
    ///
    /// Input offsets are ignored, so resolving a resolved stream is a no-op.
    #[instrument(level = "debug", skip_all, fields(tokens = self.stream.len()))]
    pub fn resolve(&self) -> Result<TokenStream, ResolutionError> {
        let mut offsets: Vec<Offset> = Vec::with_capacity(self.stream.len());
        let mut root = Cursor::Known(0);
        let mut frames: Vec<Frame> = Vec::new();

        for (position, token) in self.stream.iter().enumerate() {
            let signal = token.signal();

            if signal.is_end() {
                let Some(frame) = frames.pop() else {
                    return Err(ResolutionError::IndexMismatch { position });
                };
                let opener = &self.stream[frame.start];
                if self.index.matching_start(position) != Some(frame.start)
                    || opener.signal().closing() != Some(signal)
                {
                    return Err(ResolutionError::IndexMismatch { position });
                }

                let repeating = opener.signal() == Signal::GroupStart;
                let extent = if repeating || opener.size().is_variable() {
                    Size::Variable
                } else {
                    frame.cursor.extent()
                };
                trace!(start = frame.start, end = position, %extent, "entity sized");

                offsets.push(offsets[frame.start]);
                let parent = match frames.last_mut() {
                    Some(f) => &mut f.cursor,
                    None => &mut root,
                };
                *parent = parent.advance(extent, position)?;
                continue;
            }

            let parent = match frames.last_mut() {
                Some(f) => &mut f.cursor,
                None => &mut root,
            };
            offsets.push(parent.offset());

            if signal.is_start() {
                frames.push(Frame {
                    start: position,
                    cursor: Cursor::Known(0),
                });
            } else {
                *parent = parent.advance(token.size(), position)?;
            }
        }

        if let Some(frame) = frames.last() {
            return Err(ResolutionError::IndexMismatch {
                position: frame.start,
            });
        }

        let unknown = offsets.iter().filter(|o| o.is_unknown()).count();
        debug!(unknown, "offsets resolved");

        Ok(self
            .stream
            .iter()
            .zip(offsets)
            .map(|(token, offset)| token.with_offset(offset))
            .collect())
    }
}

/// Validate `stream`, then resolve its offsets.
///
/// A stream that is not well-formed is a precondition violation and is
/// reported as [`ResolutionError::NotValidated`]. Empty streams resolve to
/// empty streams; rejecting them is the caller's policy.
pub fn resolve_offsets(stream: &TokenStream) -> Result<TokenStream, ResolutionError> {
    let index = NestingValidator::new().allow_empty(true).validate(stream)?;
    OffsetResolver::new(stream, &index)?.resolve()
}
