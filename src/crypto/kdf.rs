use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::DerivationError;

/// Key derivation methods this engine can replay.
///
/// The wire name is what a stored record carries in its `hashMethod` field,
/// so this enum doubles as the supported-method allowlist: decoding a record
/// with any other name fails before derivation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMethod {
    /// PBKDF2 with HMAC-SHA256. Accepted for stored records.
    Pbkdf2Sha256,
    /// PBKDF2 with HMAC-SHA512. Stamped into new records.
    Pbkdf2Sha512,
}

impl HashMethod {
    /// Method used for newly created hashes.
    pub const CURRENT: HashMethod = HashMethod::Pbkdf2Sha512;

    /// Wire identifier stored in the record's `hashMethod` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashMethod::Pbkdf2Sha256 => "pbkdf2-sha256",
            HashMethod::Pbkdf2Sha512 => "pbkdf2-sha512",
        }
    }

    /// Parse a wire identifier against the allowlist.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pbkdf2-sha256" => Some(HashMethod::Pbkdf2Sha256),
            "pbkdf2-sha512" => Some(HashMethod::Pbkdf2Sha512),
            _ => None,
        }
    }
}

/// Derive `key_length` bytes from a password and salt.
///
/// Deterministic: the same inputs always produce the same key, which is what
/// lets verification replay the parameters a stored record was created with.
/// Execution cost scales with `iterations` and `key_length`, not with the
/// password value. Salt generation is the caller's job; this never touches a
/// random source.
///
/// # Errors
///
/// Returns `DerivationError` when `iterations` or `key_length` is zero, or
/// when the underlying pseudorandom function rejects the parameters.
pub fn derive(
    method: HashMethod,
    password: &str,
    salt: &[u8],
    iterations: u32,
    key_length: u32,
) -> Result<Zeroizing<Vec<u8>>, DerivationError> {
    if iterations == 0 {
        return Err(DerivationError::ZeroIterations);
    }
    if key_length == 0 {
        return Err(DerivationError::ZeroKeyLength);
    }

    let mut key = Zeroizing::new(vec![0u8; key_length as usize]);
    match method {
        HashMethod::Pbkdf2Sha256 => {
            pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, iterations, key.as_mut_slice())
        }
        HashMethod::Pbkdf2Sha512 => {
            pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt, iterations, key.as_mut_slice())
        }
    }
    .map_err(|e| DerivationError::Prf(e.to_string()))?;

    Ok(key)
}
