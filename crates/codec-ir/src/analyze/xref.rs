//! Cross-reference pairing.
//!
//! Tokens never point at each other directly. A token names its partner by
//! identifier in `Metadata::xref_id`, and this pass resolves those names to
//! stream positions. Typical pairs: a repeating group and its entry-count
//! field, variable-length data and its length field.
//!
//! End tokens mirror their start token and are left out of both the
//! identifier table and the pairing.

use codec_ir_core::IrId;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, instrument, trace};

use crate::stream::{StreamIndex, TokenStream};

use super::{NestingValidator, ReferenceError, ResolutionError};

/// Resolved cross-references of one stream.
///
/// Symmetric by construction: `partner(partner(a)) == Some(a)`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CrossRefs {
    ids: IndexMap<IrId, usize>,
    partners: Vec<Option<usize>>,
    pairs: Vec<(usize, usize)>,
}

impl CrossRefs {
    /// Position of the token paired with the one at `position`.
    pub fn partner(&self, position: usize) -> Option<usize> {
        self.partners.get(position).copied().flatten()
    }

    /// Position of the token carrying `id`.
    pub fn position_of(&self, id: IrId) -> Option<usize> {
        self.ids.get(&id).copied()
    }

    /// Every pair once, lower position first, ordered by that position.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Pairs the cross-referencing tokens of a validated stream.
pub struct XrefResolver<'a> {
    stream: &'a TokenStream,
}

impl<'a> XrefResolver<'a> {
    /// Pair a stream with the index its validation produced.
    ///
    /// The index must describe exactly this stream's brackets; pairing
    /// tokens inside crossed brackets is refused.
    pub fn new(stream: &'a TokenStream, index: &StreamIndex) -> Result<Self, ResolutionError> {
        if let Some(position) = index.mismatch(stream) {
            return Err(ResolutionError::IndexMismatch { position });
        }
        Ok(Self { stream })
    }

    /// Build the identifier table and pair every cross-referencing token.
    ///
    /// Fails on the first duplicate identifier, dangling reference or
    /// one-sided reference; nothing is dropped silently.
    #[instrument(level = "debug", skip_all, fields(tokens = self.stream.len()))]
    pub fn resolve(&self) -> Result<CrossRefs, ReferenceError> {
        let stream = self.stream;
        let mut ids: IndexMap<IrId, usize> = IndexMap::new();
        for (position, token) in stream.iter().enumerate() {
            if token.signal().is_end() {
                continue;
            }
            let Some(id) = token.id() else { continue };
            match ids.entry(id) {
                Entry::Occupied(first) => {
                    return Err(ReferenceError::DuplicateId {
                        id,
                        first: *first.get(),
                        second: position,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let mut partners = vec![None; stream.len()];
        let mut pairs = Vec::new();

        for (position, token) in stream.iter().enumerate() {
            if token.signal().is_end() {
                continue;
            }
            let Some(target) = token.xref_id() else {
                continue;
            };
            let Some(&target_position) = ids.get(&target) else {
                return Err(ReferenceError::Dangling {
                    position,
                    id: token.id(),
                    target,
                });
            };
            let Some(id) = token.id() else {
                return Err(ReferenceError::Unidentified { position, target });
            };
            if target_position == position {
                return Err(ReferenceError::SelfReference { position, id });
            }

            let back = stream[target_position].xref_id();
            if back != Some(id) {
                return Err(ReferenceError::Asymmetric {
                    position,
                    id,
                    target,
                    target_position,
                    back,
                });
            }

            partners[position] = Some(target_position);
            if position < target_position {
                trace!(%id, %target, position, target_position, "paired");
                pairs.push((position, target_position));
            }
        }

        debug!(ids = ids.len(), pairs = pairs.len(), "cross-references resolved");
        Ok(CrossRefs {
            ids,
            partners,
            pairs,
        })
    }
}

/// Validate `stream`, then pair its cross-references.
///
/// A stream that is not well-formed is reported as
/// [`ReferenceError::Unresolved`] wrapping [`ResolutionError::NotValidated`].
pub fn resolve_xrefs(stream: &TokenStream) -> Result<CrossRefs, ReferenceError> {
    let index = NestingValidator::new()
        .allow_empty(true)
        .validate(stream)
        .map_err(ResolutionError::from)?;
    XrefResolver::new(stream, &index)?.resolve()
}
