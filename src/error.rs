//! Error types for the credential engine.
//!
//! Every failure is a discriminated kind so callers can branch on it. A
//! wrong password is never an error; it is the `Ok(false)` result of
//! verification.

use thiserror::Error;

/// Configuration rejected at construction. No engine is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("key length must be at least 1 byte")]
    ZeroKeyLength,

    #[error("key length {requested} exceeds the maximum of {max} bytes")]
    KeyLengthTooLarge { requested: u32, max: u32 },

    #[error("work factor {requested} is below the minimum of {min} iterations")]
    WorkBelowMinimum { requested: u32, min: u32 },

    #[error("work factor {requested} exceeds the maximum of {max} iterations")]
    WorkAboveMaximum { requested: u32, max: u32 },
}

/// Key derivation rejected its parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("derived key length must be at least 1 byte")]
    ZeroKeyLength,

    #[error("pseudorandom function rejected the parameters: {0}")]
    Prf(String),
}

/// Failure of the hash operation.
#[derive(Debug, Error)]
pub enum HashError {
    /// Rejected at the boundary rather than hashing nothing.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The OS entropy source failed. Fatal; never downgraded to a weaker
    /// source.
    #[error("secure random source unavailable")]
    RandomSourceUnavailable,

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// A stored record string failed to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record field `{field}` is not valid base64: {source}")]
    Base64 {
        field: &'static str,
        source: base64::DecodeError,
    },

    #[error("record salt must not be empty")]
    EmptySalt,

    #[error("record iteration count must be at least 1")]
    ZeroIterations,

    #[error("record key length must be at least 1 byte")]
    ZeroKeyLength,

    #[error("record hash is {actual} bytes but keyLength says {expected}")]
    HashLengthMismatch { expected: usize, actual: usize },

    #[error("unsupported hash method `{0}`")]
    UnsupportedMethod(String),
}

/// Failure of verification or expiry evaluation on a stored record.
///
/// Both operations share the decode path, so both report the same kinds for
/// records that cannot be trusted structurally.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("malformed hash record")]
    MalformedRecord(#[source] DecodeError),

    #[error("unsupported hash method `{0}`")]
    UnsupportedMethod(String),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

impl From<DecodeError> for VerifyError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnsupportedMethod(method) => VerifyError::UnsupportedMethod(method),
            other => VerifyError::MalformedRecord(other),
        }
    }
}
