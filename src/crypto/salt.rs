use getrandom::fill;

use super::SALT_LEN;
use crate::error::HashError;

/// Generate a fresh random salt from the OS entropy source.
///
/// Called once per hash operation; a salt is never reused and never derived
/// from the password.
pub fn generate_salt() -> Result<[u8; SALT_LEN], HashError> {
    let mut salt = [0u8; SALT_LEN];
    fill(&mut salt).map_err(|_| HashError::RandomSourceUnavailable)?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salts_are_unique() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn salt_has_expected_length() {
        let salt = generate_salt().unwrap();
        assert_eq!(salt.len(), SALT_LEN);
    }
}
