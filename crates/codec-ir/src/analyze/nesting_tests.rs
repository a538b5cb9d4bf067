use codec_ir_core::PrimitiveType;

use super::{NestingValidator, StructuralError};
use crate::stream::{StreamIndex, TokenStream};
use crate::test_utils::{car, end, leaf, marker, start};
use crate::token::{Signal, Token};

fn validate(tokens: Vec<Token>) -> Result<StreamIndex, StructuralError> {
    NestingValidator::new().validate(&TokenStream::from(tokens))
}

#[test]
fn message_header_is_valid() {
    let index = validate(vec![
        start(Signal::MessageStart, "Header", 100),
        start(Signal::FieldStart, "blockLength", 25),
        leaf("blockLength", PrimitiveType::Uint32),
        end(Signal::FieldEnd),
        end(Signal::MessageEnd),
    ])
    .unwrap();

    assert_eq!(index.len(), 5);
    assert_eq!(index.max_depth(), 2);
    assert_eq!(index.matching_end(0), Some(4));
    assert_eq!(index.matching_end(1), Some(3));
}

#[test]
fn every_entity_kind_nests() {
    let index = NestingValidator::new().validate(&car()).unwrap();
    assert_eq!(index.len(), 32);
    assert_eq!(index.max_depth(), 3);
}

#[test]
fn crossing_brackets_name_the_open_start() {
    let err = validate(vec![
        start(Signal::FieldStart, "f", 1),
        end(Signal::MessageEnd),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        StructuralError::CrossedEnd {
            position: 1,
            signal: Signal::MessageEnd,
            open_position: 0,
            open_signal: Signal::FieldStart,
        }
    );
    assert_eq!(err.position(), Some(0));
    assert_eq!(
        err.to_string(),
        "MESSAGE_END at position 1 crosses unclosed FIELD_START at position 0"
    );
}

#[test]
fn interleaved_pairs_are_rejected() {
    let err = validate(vec![
        start(Signal::MessageStart, "m", 1),
        start(Signal::GroupStart, "g", 2),
        start(Signal::FieldStart, "f", 3),
        end(Signal::GroupEnd),
        end(Signal::FieldEnd),
        end(Signal::MessageEnd),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        StructuralError::CrossedEnd {
            position: 3,
            open_position: 2,
            ..
        }
    ));
}

#[test]
fn end_without_start() {
    let err = validate(vec![
        leaf("a", PrimitiveType::Uint8),
        end(Signal::FieldEnd),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        StructuralError::UnmatchedEnd {
            position: 1,
            signal: Signal::FieldEnd
        }
    );
    assert_eq!(err.position(), Some(1));
}

#[test]
fn end_after_stream_closed() {
    let err = validate(vec![
        start(Signal::MessageStart, "m", 1),
        end(Signal::MessageEnd),
        end(Signal::MessageEnd),
    ])
    .unwrap_err();

    assert!(matches!(err, StructuralError::UnmatchedEnd { position: 2, .. }));
}

#[test]
fn unclosed_start_reports_innermost() {
    let err = validate(vec![
        start(Signal::MessageStart, "m", 1),
        start(Signal::SetStart, "flags", 2),
        marker(Signal::SetChoice, "bit0"),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        StructuralError::UnmatchedStart {
            position: 1,
            signal: Signal::SetStart
        }
    );
    assert_eq!(err.to_string(), "SET_START at position 1 is never closed");
}

#[test]
fn empty_stream_rejected_by_default() {
    let err = validate(Vec::new()).unwrap_err();
    assert_eq!(err, StructuralError::EmptyStream);
    assert_eq!(err.position(), None);
}

#[test]
fn empty_stream_accepted_when_allowed() {
    let index = NestingValidator::new()
        .allow_empty(true)
        .validate(&TokenStream::new())
        .unwrap();
    assert!(index.is_empty());
}

#[test]
fn leaves_alone_are_valid() {
    let index = validate(vec![
        leaf("a", PrimitiveType::Uint8),
        leaf("b", PrimitiveType::Uint8),
    ])
    .unwrap();

    assert_eq!(index.roots(), vec![0, 1]);
    assert_eq!(index.max_depth(), 0);
}

#[test]
fn validation_does_not_touch_the_stream() {
    let stream = car();
    let before = stream.clone();
    NestingValidator::new().validate(&stream).unwrap();
    assert_eq!(stream, before);
}
