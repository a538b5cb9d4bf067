//! Serialized forms of a token stream.
//!
//! Binary layout (all integers little-endian):
//! - 0-3: magic `b"CIRS"`
//! - 4-7: format version
//! - 8-11: CRC32 of the payload
//! - 12-15: payload length in bytes
//! - 16..: postcard-encoded token sequence
//!
//! Sizes and offsets are carried as their wire integers, with `-1` for
//! variable sizes and unknown offsets.

use super::TokenStream;

/// Magic bytes opening every binary stream.
pub const MAGIC: [u8; 4] = *b"CIRS";

/// Current binary format version.
pub const VERSION: u32 = 1;

/// Size of [`StreamHeader`] on the wire.
pub const HEADER_SIZE: usize = 16;

/// Error while encoding a stream into its binary container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("payload of {0} bytes does not fit the u32 length field")]
    PayloadTooLarge(usize),
}

/// Error while decoding a serialized stream.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("binary stream too short: {0} bytes (header needs {min})", min = HEADER_SIZE)]
    TooShort(usize),

    #[error("invalid magic: expected CIRS")]
    InvalidMagic,

    #[error("unsupported version: {0} (expected {expected})", expected = VERSION)]
    UnsupportedVersion(u32),

    #[error("payload size mismatch: header says {header}, actual {actual}")]
    SizeMismatch { header: u32, actual: usize },

    #[error("checksum mismatch: header {header:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { header: u32, computed: u32 },

    #[error("invalid binary payload: {0}")]
    Payload(#[from] postcard::Error),

    #[error("invalid JSON stream: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed header in front of a binary stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub checksum: u32,
    pub payload_len: u32,
}

impl StreamHeader {
    fn for_payload(payload: &[u8]) -> Result<Self, EncodeError> {
        Ok(Self {
            magic: MAGIC,
            version: VERSION,
            checksum: crc32fast::hash(payload),
            payload_len: payload_len(payload.len())?,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.payload_len.to_le_bytes());
        bytes
    }

    /// Decode the header without checking its contents.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::TooShort(bytes.len()));
        }
        let word = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Ok(Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: word(4),
            checksum: word(8),
            payload_len: word(12),
        })
    }
}

impl TokenStream {
    /// Encode into the checked binary container.
    ///
    /// The payload length field is a `u32`, so payloads are limited to 4 GiB.
    pub fn to_binary(&self) -> Result<Vec<u8>, EncodeError> {
        let payload = postcard::to_allocvec(self).expect("serialization should not fail");
        let header = StreamHeader::for_payload(&payload)?;

        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decode a stream produced by [`TokenStream::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DecodeError> {
        let header = StreamHeader::from_bytes(bytes)?;
        if header.magic != MAGIC {
            return Err(DecodeError::InvalidMagic);
        }
        if header.version != VERSION {
            return Err(DecodeError::UnsupportedVersion(header.version));
        }

        let payload = &bytes[HEADER_SIZE..];
        if header.payload_len as usize != payload.len() {
            return Err(DecodeError::SizeMismatch {
                header: header.payload_len,
                actual: payload.len(),
            });
        }

        let computed = crc32fast::hash(payload);
        if computed != header.checksum {
            return Err(DecodeError::ChecksumMismatch {
                header: header.checksum,
                computed,
            });
        }

        Ok(postcard::from_bytes(payload)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("serialization should not fail")
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(super) fn payload_len(len: usize) -> Result<u32, EncodeError> {
    u32::try_from(len).map_err(|_| EncodeError::PayloadTooLarge(len))
}
