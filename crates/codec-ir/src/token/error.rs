use super::Signal;

/// A token could not be constructed.
///
/// Always a programmer error in the builder that emitted the token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("metadata of a {signal} token must not be missing")]
    MissingMetadata { signal: Signal },
}

/// A wire integer is neither a non-negative value nor the `-1` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what} on the wire: {value} (expected -1 or 0..={max})", max = u32::MAX)]
pub struct SentinelError {
    pub what: &'static str,
    pub value: i64,
}
