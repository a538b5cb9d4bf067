//! Descriptive metadata attached to every token.
//!
//! Metadata is owned by whichever builder produced the stream and is only read
//! afterwards. The resolution passes look at two things: the stable identifier
//! and the cross-reference identifier. Name, presence and description are
//! carried through for consumers (code generators, schema translators).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an IR entity.
///
/// Identifiers are unique within one stream. Two tokens that belong together
/// (a group and its entry-count field, variable data and its length field)
/// point at each other through [`Metadata::with_xref_id`], never by sharing an id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IrId(u32);

impl IrId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for IrId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for IrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a field must be present on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    #[default]
    Required,
    /// May carry the type's null value.
    Optional,
    /// Value fixed by the schema, never encoded.
    Constant,
}

impl Presence {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional)
    }

    pub fn is_constant(self) -> bool {
        matches!(self, Self::Constant)
    }
}

/// Metadata of one token.
///
/// Built fluently:
///
/// ```
/// use codec_ir_core::{IrId, Metadata, Presence};
///
/// let meta = Metadata::new("numInGroup")
///     .with_id(7)
///     .with_xref_id(8)
///     .with_presence(Presence::Required);
/// assert_eq!(meta.id(), Some(IrId::new(7)));
/// assert_eq!(meta.xref_id(), Some(IrId::new(8)));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Metadata {
    name: String,
    #[serde(default)]
    id: Option<IrId>,
    #[serde(default)]
    xref_id: Option<IrId>,
    #[serde(default)]
    presence: Presence,
    #[serde(default)]
    description: Option<String>,
}

impl Metadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the stable identifier.
    pub fn with_id(mut self, id: impl Into<IrId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the identifier of the token this one is paired with.
    pub fn with_xref_id(mut self, id: impl Into<IrId>) -> Self {
        self.xref_id = Some(id.into());
        self
    }

    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Drop the cross-reference, keeping everything else.
    pub fn without_xref(mut self) -> Self {
        self.xref_id = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<IrId> {
        self.id
    }

    pub fn xref_id(&self) -> Option<IrId> {
        self.xref_id
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
