//! The self-describing hash record and its string encoding.
//!
//! A record carries everything verification needs: method, iteration count,
//! key length, salt, and the derived hash. A stored hash therefore stays
//! verifiable after the engine's own defaults have moved on. The encoded
//! form is a single JSON object with base64 byte fields:
//!
//! ```text
//! {"hash":"...","salt":"...","keyLength":66,"hashMethod":"pbkdf2-sha512","iterations":32768}
//! ```
//!
//! The decoder rejects anything it cannot fully account for: missing or
//! extra fields, wrong JSON types, undecodable base64, non-positive
//! integers, a hash whose length disagrees with `keyLength`, and any
//! `hashMethod` outside the allowlist.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::crypto::HashMethod;
use crate::error::DecodeError;

/// A decoded password hash record.
///
/// Immutable once created. Records are produced by the hash operation or by
/// [`HashRecord::decode`]; both uphold `hash.len() == key_length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    hash: Vec<u8>,
    salt: Vec<u8>,
    key_length: u32,
    method: HashMethod,
    iterations: u32,
}

/// Wire form of a record; field names match the stored JSON exactly.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawRecord {
    hash: String,
    salt: String,
    key_length: u32,
    hash_method: String,
    iterations: u32,
}

impl HashRecord {
    pub(crate) fn new(hash: Vec<u8>, salt: Vec<u8>, method: HashMethod, iterations: u32) -> Self {
        let key_length = hash.len() as u32;
        Self {
            hash,
            salt,
            key_length,
            method,
            iterations,
        }
    }

    /// Serialize to the single-string storage form.
    pub fn encode(&self) -> String {
        let raw = RawRecord {
            hash: BASE64.encode(&self.hash),
            salt: BASE64.encode(&self.salt),
            key_length: self.key_length,
            hash_method: self.method.as_str().to_string(),
            iterations: self.iterations,
        };
        // A flat struct of strings and integers serializes without failure.
        serde_json::to_string(&raw).expect("hash record serialization cannot fail")
    }

    /// Parse and validate a stored record string.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` on any structural or type violation, and
    /// `DecodeError::UnsupportedMethod` when the record names a hash method
    /// outside the allowlist.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        let raw: RawRecord = serde_json::from_str(encoded)?;

        let method = HashMethod::parse(&raw.hash_method)
            .ok_or(DecodeError::UnsupportedMethod(raw.hash_method))?;
        let hash = BASE64
            .decode(&raw.hash)
            .map_err(|source| DecodeError::Base64 {
                field: "hash",
                source,
            })?;
        let salt = BASE64
            .decode(&raw.salt)
            .map_err(|source| DecodeError::Base64 {
                field: "salt",
                source,
            })?;

        if salt.is_empty() {
            return Err(DecodeError::EmptySalt);
        }
        if raw.iterations == 0 {
            return Err(DecodeError::ZeroIterations);
        }
        if raw.key_length == 0 {
            return Err(DecodeError::ZeroKeyLength);
        }
        if hash.len() != raw.key_length as usize {
            return Err(DecodeError::HashLengthMismatch {
                expected: raw.key_length as usize,
                actual: hash.len(),
            });
        }

        Ok(Self {
            hash,
            salt,
            key_length: raw.key_length,
            method,
            iterations: raw.iterations,
        })
    }

    /// The derived hash bytes, `key_length` long.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// The salt the hash was derived with.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Length of the derived hash in bytes.
    pub fn key_length(&self) -> u32 {
        self.key_length
    }

    /// The derivation method the record was created with.
    pub fn method(&self) -> HashMethod {
        self.method
    }

    /// The iteration count the record was created with.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}
