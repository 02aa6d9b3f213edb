//! Cryptographic primitives for the credential engine.
//!
//! Provides salted, iterated key derivation and salt generation.

pub mod kdf;
pub mod salt;

pub use kdf::{HashMethod, derive};
pub use salt::generate_salt;

/// Length of a freshly generated salt (16 bytes, 128 bits of entropy).
pub const SALT_LEN: usize = 16;
