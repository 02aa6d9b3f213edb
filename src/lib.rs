//! Password hashing and verification with per-password salts and an
//! iterated key derivation function.
//!
//! A [`Credential`] engine turns passwords into self-describing hash
//! records and checks login attempts against stored records in constant
//! time. Every record carries its own derivation parameters, so hashes
//! created under an older configuration stay verifiable after the engine's
//! defaults move on, and [`Credential::expired`] reports when a stored
//! hash should be re-created under current policy.
//!
//! ```
//! use credent::Credential;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Credential::default();
//!
//! let record = engine.hash("correct horse battery staple")?;
//! assert!(engine.verify(&record, "correct horse battery staple")?);
//! assert!(!engine.verify(&record, "Tr0ub4dor&3")?);
//! # Ok(())
//! # }
//! ```

mod config;
mod crypto;
mod error;
mod record;

pub use crate::config::{
    Config, DEFAULT_KEY_LENGTH, DEFAULT_WORK, MAX_KEY_LENGTH, MAX_WORK, MIN_WORK,
};
pub use crate::crypto::{HashMethod, SALT_LEN};
pub use crate::error::{ConfigError, DecodeError, DerivationError, HashError, VerifyError};
pub use crate::record::HashRecord;

use chrono::{DateTime, TimeDelta, Utc};
use subtle::ConstantTimeEq;
use tokio::task::spawn_blocking;
use zeroize::Zeroizing;

use crate::crypto::{derive, generate_salt};

/// The password credential engine.
///
/// Cheap to construct and to copy; holds only the validated [`Config`] that
/// governs new hashes. Verification ignores the configuration entirely and
/// replays whatever parameters the stored record carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Credential {
    config: Config,
}

impl Credential {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Hash a password into an encoded record string.
    ///
    /// Draws a fresh salt, derives a key with the configured work factor
    /// and key length, and returns the result as a self-describing record.
    /// Hashing the same password twice yields different records; both
    /// verify.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::EmptyPassword`] for an empty password and
    /// [`HashError::RandomSourceUnavailable`] when the OS entropy source
    /// fails.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        if password.is_empty() {
            return Err(HashError::EmptyPassword);
        }

        let salt = generate_salt()?;
        let key = derive(
            HashMethod::CURRENT,
            password,
            &salt,
            self.config.work(),
            self.config.key_length(),
        )?;

        let record = HashRecord::new(
            key.to_vec(),
            salt.to_vec(),
            HashMethod::CURRENT,
            self.config.work(),
        );
        Ok(record.encode())
    }

    /// Check a password attempt against a stored record string.
    ///
    /// Re-derives a candidate key with the record's own method, salt,
    /// iteration count, and key length, then compares candidate and stored
    /// hash in constant time. A mismatched password is `Ok(false)`, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::MalformedRecord`] when the record string does
    /// not decode and [`VerifyError::UnsupportedMethod`] when it names a
    /// hash method this engine cannot replay.
    pub fn verify(&self, encoded: &str, input: &str) -> Result<bool, VerifyError> {
        let record = HashRecord::decode(encoded)?;

        let candidate = derive(
            record.method(),
            input,
            record.salt(),
            record.iterations(),
            record.key_length(),
        )?;

        Ok(candidate.ct_eq(record.hash()).into())
    }

    /// Report whether a stored record is stale under current policy.
    ///
    /// A record is stale when its iteration count is below the engine's
    /// configured work factor. Stale records still verify; callers are
    /// expected to re-hash on the next successful login.
    ///
    /// # Errors
    ///
    /// Same record failures as [`Credential::verify`].
    pub fn expired(&self, encoded: &str) -> Result<bool, VerifyError> {
        let record = HashRecord::decode(encoded)?;
        Ok(record.iterations() < self.config.work())
    }

    /// Like [`Credential::expired`], additionally treating records older
    /// than `days` as stale.
    ///
    /// `created_at` is whenever the caller stored the record; the record
    /// format itself carries no timestamp.
    pub fn expired_with_age(
        &self,
        encoded: &str,
        created_at: DateTime<Utc>,
        days: u32,
    ) -> Result<bool, VerifyError> {
        if self.expired(encoded)? {
            return Ok(true);
        }

        let age = Utc::now().signed_duration_since(created_at);
        Ok(age > TimeDelta::days(i64::from(days)))
    }

    /// [`Credential::hash`] on a blocking worker thread.
    ///
    /// Key derivation burns CPU for tens of milliseconds by design; this
    /// adapter keeps it off the async executor.
    pub async fn hash_async(&self, password: String) -> Result<String, HashError> {
        let engine = *self;
        let password = Zeroizing::new(password);
        spawn_blocking(move || engine.hash(&password))
            .await
            .expect("hash task panicked")
    }

    /// [`Credential::verify`] on a blocking worker thread.
    pub async fn verify_async(&self, encoded: String, input: String) -> Result<bool, VerifyError> {
        let engine = *self;
        let input = Zeroizing::new(input);
        spawn_blocking(move || engine.verify(&encoded, &input))
            .await
            .expect("verify task panicked")
    }
}
