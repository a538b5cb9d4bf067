//! The IR node.

use codec_ir_core::{ByteOrder, IrId, Metadata, PrimitiveType};
use serde::{Deserialize, Serialize};

use super::{ConstructionError, Offset, Signal, Size};

/// One position in the IR.
///
/// Constructed once, fully populated, never mutated. Resolving an offset
/// produces a new token through [`Token::with_offset`].
///
/// `primitive_type` and `byte_order` only exist on leaf encodings
/// (`Signal::None`); every constructor drops them for structural signals.
///
/// An example message header:
///
/// | # | signal          | details                          |
/// | - | --------------- | -------------------------------- |
/// | 0 | `MESSAGE_START` | id = 100                         |
/// | 1 | `FIELD_START`   | id = 25                          |
/// | 2 | `NONE`          | uint32, size = 4, offset = 0     |
/// | 3 | `FIELD_END`     |                                  |
/// | 4 | `MESSAGE_END`   |                                  |
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "RawToken", try_from = "RawToken")]
pub struct Token {
    signal: Signal,
    primitive_type: Option<PrimitiveType>,
    size: Size,
    offset: Offset,
    byte_order: Option<ByteOrder>,
    metadata: Metadata,
}

impl Token {
    /// Construct a token from every attribute.
    ///
    /// This is the entry point for stream builders: a missing `metadata`
    /// is rejected instead of defaulted.
    pub fn new(
        signal: Signal,
        primitive_type: Option<PrimitiveType>,
        size: Size,
        offset: Offset,
        byte_order: Option<ByteOrder>,
        metadata: Option<Metadata>,
    ) -> Result<Self, ConstructionError> {
        let Some(metadata) = metadata else {
            return Err(ConstructionError::MissingMetadata { signal });
        };
        let leaf = signal.is_encoding();
        Ok(Self {
            signal,
            primitive_type: primitive_type.filter(|_| leaf),
            size,
            offset,
            byte_order: byte_order.filter(|_| leaf),
            metadata,
        })
    }

    /// Structural token: no encoding, zero size, zero offset.
    pub fn structural(signal: Signal, metadata: Metadata) -> Self {
        Self {
            signal,
            primitive_type: None,
            size: Size::ZERO,
            offset: Offset::ZERO,
            byte_order: None,
            metadata,
        }
    }

    /// Fixed-width leaf sized by its primitive type, offset not yet resolved.
    pub fn encoding(
        primitive_type: PrimitiveType,
        byte_order: ByteOrder,
        metadata: Metadata,
    ) -> Self {
        Self {
            signal: Signal::None,
            primitive_type: Some(primitive_type),
            size: Size::Fixed(primitive_type.size()),
            offset: Offset::Unknown,
            byte_order: Some(byte_order),
            metadata,
        }
    }

    /// Variable-length leaf (e.g. string or blob data) made of
    /// `primitive_type` elements.
    pub fn var_data(
        primitive_type: PrimitiveType,
        byte_order: ByteOrder,
        metadata: Metadata,
    ) -> Self {
        Self {
            size: Size::Variable,
            ..Self::encoding(primitive_type, byte_order, metadata)
        }
    }

    /// Copy of this token with a different offset.
    pub fn with_offset(&self, offset: Offset) -> Self {
        Self {
            offset,
            ..self.clone()
        }
    }

    /// Copy of this token with a different size.
    pub fn with_size(&self, size: Size) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        self.primitive_type
    }

    /// Size in bytes. `Size::Fixed(0)` means the token has no encoded size.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn id(&self) -> Option<IrId> {
        self.metadata.id()
    }

    pub fn xref_id(&self) -> Option<IrId> {
        self.metadata.xref_id()
    }
}

/// Serialized shape of a [`Token`].
///
/// Deserialization goes back through [`Token::new`], so a record without
/// metadata fails instead of producing a token.
#[derive(Clone, Serialize, Deserialize)]
struct RawToken {
    signal: Signal,
    #[serde(default)]
    primitive_type: Option<PrimitiveType>,
    size: Size,
    offset: Offset,
    #[serde(default)]
    byte_order: Option<ByteOrder>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

impl From<Token> for RawToken {
    fn from(token: Token) -> Self {
        Self {
            signal: token.signal,
            primitive_type: token.primitive_type,
            size: token.size,
            offset: token.offset,
            byte_order: token.byte_order,
            metadata: Some(token.metadata),
        }
    }
}

impl TryFrom<RawToken> for Token {
    type Error = ConstructionError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        Token::new(
            raw.signal,
            raw.primitive_type,
            raw.size,
            raw.offset,
            raw.byte_order,
            raw.metadata,
        )
    }
}
