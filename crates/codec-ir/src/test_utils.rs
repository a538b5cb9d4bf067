//! Stream construction helpers for tests.

use codec_ir_core::{ByteOrder, Metadata, PrimitiveType};

use crate::stream::TokenStream;
use crate::token::{Offset, Signal, Size, Token};

pub fn start(signal: Signal, name: &str, id: u32) -> Token {
    assert!(signal.is_start(), "{signal} is not a start signal");
    Token::structural(signal, Metadata::new(name).with_id(id))
}

pub fn end(signal: Signal) -> Token {
    assert!(signal.is_end(), "{signal} is not an end signal");
    Token::structural(signal, Metadata::new(""))
}

/// Leaf of the given primitive type, little-endian, offset unresolved.
pub fn leaf(name: &str, primitive: PrimitiveType) -> Token {
    Token::encoding(primitive, ByteOrder::LittleEndian, Metadata::new(name))
}

/// Leaf with an explicit size.
pub fn sized(name: &str, size: Size) -> Token {
    leaf(name, PrimitiveType::Uint8).with_size(size)
}

pub fn var(name: &str) -> Token {
    Token::var_data(PrimitiveType::Char, ByteOrder::LittleEndian, Metadata::new(name))
}

pub fn marker(signal: Signal, name: &str) -> Token {
    assert!(signal.is_marker(), "{signal} is not a marker");
    Token::structural(signal, Metadata::new(name))
}

/// Token with the given metadata, keeping everything else.
pub fn with_meta(token: Token, metadata: Metadata) -> Token {
    Token::new(
        token.signal(),
        token.primitive_type(),
        token.size(),
        token.offset(),
        token.byte_order(),
        Some(metadata),
    )
    .unwrap()
}

pub fn offsets(stream: &TokenStream) -> Vec<Offset> {
    stream.iter().map(|t| t.offset()).collect()
}

/// A message exercising every kind of entity.
///
/// ```text
///  0 MESSAGE_START Car
///  1   FIELD_START serialNumber      uint64
///  4   FIELD_START modelYear         uint16
///  7   FIELD_START engine
///  8     COMPOSITE_START Engine      uint16 + uint8
/// 13   FIELD_START code
/// 14     ENUM_START Model            char, values A and B
/// 20   NONE numInGroup (id 8)        uint8, count of group 9
/// 21   GROUP_START fuelFigures (id 9)
/// 22     FIELD_START speed           uint16
/// 25     FIELD_START mpg             float
/// 29   NONE makeLength (id 12)       uint8, length of 13
/// 30   NONE make (id 13)             variable
/// 31 MESSAGE_END
/// ```
pub fn car() -> TokenStream {
    TokenStream::from(vec![
        start(Signal::MessageStart, "Car", 1),
        start(Signal::FieldStart, "serialNumber", 2),
        leaf("serialNumber", PrimitiveType::Uint64),
        end(Signal::FieldEnd),
        start(Signal::FieldStart, "modelYear", 3),
        leaf("modelYear", PrimitiveType::Uint16),
        end(Signal::FieldEnd),
        start(Signal::FieldStart, "engine", 4),
        start(Signal::CompositeStart, "Engine", 5),
        leaf("capacity", PrimitiveType::Uint16),
        leaf("numCylinders", PrimitiveType::Uint8),
        end(Signal::CompositeEnd),
        end(Signal::FieldEnd),
        start(Signal::FieldStart, "code", 6),
        start(Signal::EnumStart, "Model", 7),
        leaf("encoding", PrimitiveType::Char),
        marker(Signal::EnumValue, "A"),
        marker(Signal::EnumValue, "B"),
        end(Signal::EnumEnd),
        end(Signal::FieldEnd),
        with_meta(
            leaf("numInGroup", PrimitiveType::Uint8),
            Metadata::new("numInGroup").with_id(8).with_xref_id(9),
        ),
        Token::structural(
            Signal::GroupStart,
            Metadata::new("fuelFigures").with_id(9).with_xref_id(8),
        ),
        start(Signal::FieldStart, "speed", 10),
        leaf("speed", PrimitiveType::Uint16),
        end(Signal::FieldEnd),
        start(Signal::FieldStart, "mpg", 11),
        leaf("mpg", PrimitiveType::Float),
        end(Signal::FieldEnd),
        end(Signal::GroupEnd),
        with_meta(
            leaf("makeLength", PrimitiveType::Uint8),
            Metadata::new("makeLength").with_id(12).with_xref_id(13),
        ),
        with_meta(var("make"), Metadata::new("make").with_id(13).with_xref_id(12)),
        end(Signal::MessageEnd),
    ])
}
