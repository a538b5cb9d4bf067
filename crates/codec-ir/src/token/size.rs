//! Sizes and offsets, with explicit variants for "not known statically".
//!
//! Consumers of the serialized IR see the sentinel integers
//! [`VARIABLE_SIZE`] and [`UNKNOWN_OFFSET`]; in memory they are enum variants
//! so a deferred value can never be mistaken for a legitimate zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SentinelError;

/// Wire value of [`Size::Variable`].
pub const VARIABLE_SIZE: i64 = -1;

/// Wire value of [`Offset::Unknown`].
pub const UNKNOWN_OFFSET: i64 = -1;

/// Byte length of a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Size {
    /// Statically known length. Zero means the token occupies no bytes.
    Fixed(u32),
    /// Length determined only at encode/decode time.
    Variable,
}

impl Size {
    pub const ZERO: Self = Self::Fixed(0);

    pub fn fixed(self) -> Option<u32> {
        match self {
            Self::Fixed(n) => Some(n),
            Self::Variable => None,
        }
    }

    pub fn is_variable(self) -> bool {
        matches!(self, Self::Variable)
    }

    pub fn to_wire(self) -> i64 {
        match self {
            Self::Fixed(n) => i64::from(n),
            Self::Variable => VARIABLE_SIZE,
        }
    }

    pub fn from_wire(value: i64) -> Result<Self, SentinelError> {
        if value == VARIABLE_SIZE {
            return Ok(Self::Variable);
        }
        u32::try_from(value)
            .map(Self::Fixed)
            .map_err(|_| SentinelError { what: "size", value })
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.to_wire()
    }
}

impl TryFrom<i64> for Size {
    type Error = SentinelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_wire(value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Variable => f.write_str("var"),
        }
    }
}

/// Byte position of a token within its enclosing entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Offset {
    At(u32),
    /// Depends on the runtime length of preceding variable-size content.
    Unknown,
}

impl Offset {
    pub const ZERO: Self = Self::At(0);

    pub fn at(self) -> Option<u32> {
        match self {
            Self::At(n) => Some(n),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn to_wire(self) -> i64 {
        match self {
            Self::At(n) => i64::from(n),
            Self::Unknown => UNKNOWN_OFFSET,
        }
    }

    pub fn from_wire(value: i64) -> Result<Self, SentinelError> {
        if value == UNKNOWN_OFFSET {
            return Ok(Self::Unknown);
        }
        u32::try_from(value)
            .map(Self::At)
            .map_err(|_| SentinelError { what: "offset", value })
    }
}

impl From<Offset> for i64 {
    fn from(offset: Offset) -> Self {
        offset.to_wire()
    }
}

impl TryFrom<i64> for Offset {
    type Error = SentinelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_wire(value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(n) => write!(f, "{n}"),
            Self::Unknown => f.write_str("?"),
        }
    }
}
