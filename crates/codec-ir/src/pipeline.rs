//! The full resolution pipeline.
//!
//! raw stream → nesting validation → offset resolution → cross-reference
//! resolution → [`ResolvedStream`].

use tracing::{debug, instrument};

use crate::Result;
use crate::analyze::{CrossRefs, NestingValidator, OffsetResolver, XrefResolver};
use crate::stream::{StreamIndex, TokenStream};
use crate::token::Token;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Accept a stream with no tokens as an entity without content.
    pub(crate) allow_empty: bool,
}

impl Config {
    /// Create a new Config with default values (empty streams rejected).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an empty stream validates.
    pub fn allow_empty(mut self, value: bool) -> Self {
        self.allow_empty = value;
        self
    }

    pub fn get_allow_empty(&self) -> bool {
        self.allow_empty
    }
}

/// Runs every pass over a stream under one [`Config`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate, resolve offsets, resolve cross-references.
    #[instrument(level = "debug", skip_all, fields(tokens = stream.len()))]
    pub fn run(&self, stream: &TokenStream) -> Result<ResolvedStream> {
        let index = NestingValidator::new()
            .allow_empty(self.config.allow_empty)
            .validate(stream)?;
        let resolved = OffsetResolver::new(stream, &index)?.resolve()?;
        let xrefs = XrefResolver::new(&resolved, &index)?.resolve()?;

        debug!(xrefs = xrefs.len(), "stream resolved");
        Ok(ResolvedStream {
            stream: resolved,
            index,
            xrefs,
        })
    }
}

/// A validated, offset-resolved, cross-reference-resolved stream.
///
/// Consumers may rely on well-formed nesting, and on every offset being
/// either concrete or `Offset::Unknown`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStream {
    stream: TokenStream,
    index: StreamIndex,
    xrefs: CrossRefs,
}

impl ResolvedStream {
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    pub fn tokens(&self) -> &[Token] {
        self.stream.as_slice()
    }

    pub fn index(&self) -> &StreamIndex {
        &self.index
    }

    pub fn xrefs(&self) -> &CrossRefs {
        &self.xrefs
    }

    /// The token cross-referenced by the token at `position`.
    pub fn partner_of(&self, position: usize) -> Option<&Token> {
        self.xrefs
            .partner(position)
            .and_then(|p| self.stream.get(p))
    }

    pub fn into_stream(self) -> TokenStream {
        self.stream
    }
}
