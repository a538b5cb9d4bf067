//! Tree-shaped lookups over a flat stream.
//!
//! The stream itself stays a bracket sequence; anything that needs parent or
//! child relationships asks the index instead of rebuilding a tree.

use super::TokenStream;

/// Per-position structural facts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Entry {
    /// Number of enclosing open entities. A start and its end share a depth.
    depth: u32,
    /// Position of the innermost enclosing start token.
    parent: Option<usize>,
    /// For start tokens the matching end, for end tokens the matching start.
    partner: Option<usize>,
}

/// Depth, parent and bracket-partner of every position in a validated stream.
///
/// Built by [`crate::analyze::NestingValidator`] in the same scan that checks
/// well-formedness, so it only ever describes well-formed streams.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct StreamIndex {
    entries: Vec<Entry>,
    max_depth: u32,
}

impl StreamIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            max_depth: 0,
        }
    }

    /// Record the next position. Positions must be pushed in stream order.
    pub(crate) fn push(&mut self, depth: u32, parent: Option<usize>) {
        self.max_depth = self.max_depth.max(depth);
        self.entries.push(Entry {
            depth,
            parent,
            partner: None,
        });
    }

    /// Link a start position with its end position.
    pub(crate) fn pair(&mut self, start: usize, end: usize) {
        self.entries[start].partner = Some(end);
        self.entries[end].partner = Some(start);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest nesting level seen (top-level units are depth 0).
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn depth(&self, position: usize) -> Option<u32> {
        self.entries.get(position).map(|e| e.depth)
    }

    /// Start position of the entity enclosing `position`.
    pub fn parent(&self, position: usize) -> Option<usize> {
        self.entries.get(position).and_then(|e| e.parent)
    }

    /// End position closing the start token at `position`.
    pub fn matching_end(&self, position: usize) -> Option<usize> {
        self.entries
            .get(position)
            .and_then(|e| e.partner)
            .filter(|&p| p > position)
    }

    /// Start position opened by the end token at `position`.
    pub fn matching_start(&self, position: usize) -> Option<usize> {
        self.entries
            .get(position)
            .and_then(|e| e.partner)
            .filter(|&p| p < position)
    }

    /// First position where this index disagrees with the brackets of `stream`.
    ///
    /// `None` means the index was built from a stream with exactly the same
    /// bracket structure, which is then well-formed as well.
    pub fn mismatch(&self, stream: &TokenStream) -> Option<usize> {
        if self.len() != stream.len() {
            return Some(self.len().min(stream.len()));
        }
        stream.iter().enumerate().find_map(|(position, token)| {
            let signal = token.signal();
            let consistent = match self.entries[position].partner {
                Some(p) if p > position => stream
                    .get(p)
                    .is_some_and(|t| signal.closing() == Some(t.signal())),
                Some(p) => stream
                    .get(p)
                    .is_some_and(|t| signal.opening() == Some(t.signal())),
                None => !signal.is_start() && !signal.is_end(),
            };
            (!consistent).then_some(position)
        })
    }

    /// Direct children of the start token at `position`.
    ///
    /// Each nested entity counts once, by its start position. Returns an empty
    /// list for tokens that are not starts.
    pub fn children(&self, position: usize) -> Vec<usize> {
        match self.matching_end(position) {
            Some(end) => self.units(position + 1, end),
            None => Vec::new(),
        }
    }

    /// Top-level units of the stream.
    pub fn roots(&self) -> Vec<usize> {
        self.units(0, self.entries.len())
    }

    /// Units in `from..to`, skipping over nested entities.
    fn units(&self, from: usize, to: usize) -> Vec<usize> {
        let mut units = Vec::new();
        let mut position = from;
        while position < to {
            units.push(position);
            position = self.matching_end(position).unwrap_or(position) + 1;
        }
        units
    }
}
