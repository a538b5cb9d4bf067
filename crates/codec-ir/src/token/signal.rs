//! Structural roles a token may carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Purpose of a token.
///
/// Paired `*Start`/`*End` signals delimit entities (messages, composites,
/// fields, repeating groups, enumerations, bitsets). `EnumValue` and
/// `SetChoice` are single-point markers inside their enclosing pair.
/// `None` marks a leaf that carries an actual scalar encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    MessageStart,
    MessageEnd,
    CompositeStart,
    CompositeEnd,
    FieldStart,
    FieldEnd,
    /// Start of a repeating group.
    GroupStart,
    GroupEnd,
    EnumStart,
    /// One legal value of an enumeration.
    EnumValue,
    EnumEnd,
    /// Start of a bitset.
    SetStart,
    /// One bit position of a bitset.
    SetChoice,
    SetEnd,
    /// Leaf encoding: primitive type, size, offset, byte order.
    None,
}

impl Signal {
    /// Whether this signal opens an entity.
    pub fn is_start(self) -> bool {
        self.closing().is_some()
    }

    /// Whether this signal closes an entity.
    pub fn is_end(self) -> bool {
        self.opening().is_some()
    }

    /// Whether this is a single-point marker (`EnumValue`, `SetChoice`).
    pub fn is_marker(self) -> bool {
        matches!(self, Self::EnumValue | Self::SetChoice)
    }

    /// Whether this token is a leaf encoding.
    pub fn is_encoding(self) -> bool {
        matches!(self, Self::None)
    }

    /// The end signal closing this start signal.
    pub fn closing(self) -> Option<Self> {
        match self {
            Self::MessageStart => Some(Self::MessageEnd),
            Self::CompositeStart => Some(Self::CompositeEnd),
            Self::FieldStart => Some(Self::FieldEnd),
            Self::GroupStart => Some(Self::GroupEnd),
            Self::EnumStart => Some(Self::EnumEnd),
            Self::SetStart => Some(Self::SetEnd),
            _ => None,
        }
    }

    /// The start signal this end signal closes.
    pub fn opening(self) -> Option<Self> {
        match self {
            Self::MessageEnd => Some(Self::MessageStart),
            Self::CompositeEnd => Some(Self::CompositeStart),
            Self::FieldEnd => Some(Self::FieldStart),
            Self::GroupEnd => Some(Self::GroupStart),
            Self::EnumEnd => Some(Self::EnumStart),
            Self::SetEnd => Some(Self::SetStart),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MessageStart => "MESSAGE_START",
            Self::MessageEnd => "MESSAGE_END",
            Self::CompositeStart => "COMPOSITE_START",
            Self::CompositeEnd => "COMPOSITE_END",
            Self::FieldStart => "FIELD_START",
            Self::FieldEnd => "FIELD_END",
            Self::GroupStart => "GROUP_START",
            Self::GroupEnd => "GROUP_END",
            Self::EnumStart => "ENUM_START",
            Self::EnumValue => "ENUM_VALUE",
            Self::EnumEnd => "ENUM_END",
            Self::SetStart => "SET_START",
            Self::SetChoice => "SET_CHOICE",
            Self::SetEnd => "SET_END",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
