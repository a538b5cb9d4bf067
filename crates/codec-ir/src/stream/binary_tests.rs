use super::binary::payload_len;
use super::{DecodeError, EncodeError, HEADER_SIZE, MAGIC, StreamHeader, TokenStream, VERSION};
use crate::analyze::resolve_offsets;
use crate::test_utils::car;

fn resolved_car() -> TokenStream {
    resolve_offsets(&car()).unwrap()
}

#[test]
fn binary_roundtrip() {
    let stream = resolved_car();
    let bytes = stream.to_binary().unwrap();
    let decoded = TokenStream::from_binary(&bytes).unwrap();

    assert_eq!(decoded, stream);
}

#[test]
fn binary_roundtrip_empty() {
    let bytes = TokenStream::new().to_binary().unwrap();
    assert!(TokenStream::from_binary(&bytes).unwrap().is_empty());
}

#[test]
fn header_describes_payload() {
    let bytes = resolved_car().to_binary().unwrap();
    let header = StreamHeader::from_bytes(&bytes).unwrap();

    assert_eq!(header.magic, MAGIC);
    assert_eq!(header.version, VERSION);
    assert_eq!(header.payload_len as usize, bytes.len() - HEADER_SIZE);
    assert_eq!(header.checksum, crc32fast::hash(&bytes[HEADER_SIZE..]));
    assert_eq!(header.to_bytes(), bytes[..HEADER_SIZE]);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn payload_length_must_fit_u32() {
    assert_eq!(payload_len(0), Ok(0));
    assert_eq!(payload_len(u32::MAX as usize), Ok(u32::MAX));

    let len = u32::MAX as usize + 1;
    let err = payload_len(len).unwrap_err();
    assert_eq!(err, EncodeError::PayloadTooLarge(len));
    assert_eq!(
        err.to_string(),
        "payload of 4294967296 bytes does not fit the u32 length field"
    );
}

#[test]
fn too_short() {
    let err = TokenStream::from_binary(&[0u8; 8]).unwrap_err();
    assert!(matches!(err, DecodeError::TooShort(8)));
    assert_eq!(
        err.to_string(),
        "binary stream too short: 8 bytes (header needs 16)"
    );
}

#[test]
fn invalid_magic() {
    let mut bytes = resolved_car().to_binary().unwrap();
    bytes[0] = b'X';

    let err = TokenStream::from_binary(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidMagic));
}

#[test]
fn unsupported_version() {
    let mut bytes = resolved_car().to_binary().unwrap();
    bytes[4..8].copy_from_slice(&99u32.to_le_bytes());

    let err = TokenStream::from_binary(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedVersion(99)));
    assert!(err.to_string().contains("99"));
}

#[test]
fn truncated_payload() {
    let bytes = resolved_car().to_binary().unwrap();
    let truncated = &bytes[..bytes.len() - 3];

    let err = TokenStream::from_binary(truncated).unwrap_err();
    assert!(matches!(err, DecodeError::SizeMismatch { .. }));
}

#[test]
fn corrupted_payload_fails_checksum() {
    let mut bytes = resolved_car().to_binary().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;

    let err = TokenStream::from_binary(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::ChecksumMismatch { .. }));
}

#[test]
fn json_roundtrip() {
    let stream = resolved_car();
    let decoded = TokenStream::from_json(&stream.to_json()).unwrap();

    assert_eq!(decoded, stream);
}

#[test]
fn json_carries_sentinels() {
    let json = resolved_car().to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // `make`: variable-size data after a repeating group.
    assert_eq!(value[30]["size"], -1);
    assert_eq!(value[30]["offset"], -1);
    assert_eq!(value[4]["offset"], 8);
}

#[test]
fn json_token_without_metadata_fails() {
    let err = TokenStream::from_json(r#"[{"signal":"MESSAGE_START","size":0,"offset":0}]"#)
        .unwrap_err();

    assert!(matches!(err, DecodeError::Json(_)));
    assert!(err.to_string().contains("metadata"));
}
