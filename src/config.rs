use crate::error::ConfigError;

/// Default derived-key length in bytes.
pub const DEFAULT_KEY_LENGTH: u32 = 66;
/// Default iteration count for new hashes (2^15).
pub const DEFAULT_WORK: u32 = 1 << 15;
/// Smallest work factor accepted for new hashes.
pub const MIN_WORK: u32 = 4096;
/// Largest work factor accepted; anything beyond this is treated as a
/// construction mistake rather than a policy choice, and rejected here
/// instead of mid-derivation.
pub const MAX_WORK: u32 = 1 << 26;
/// Largest derived-key length accepted, in bytes.
pub const MAX_KEY_LENGTH: u32 = 1024;

/// Immutable engine configuration: derived-key length and work factor.
///
/// Validated once at construction; a `Config` that exists is usable. The
/// configuration governs new hashes only; verification always replays the
/// parameters carried by the stored record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    key_length: u32,
    work: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LENGTH,
            work: DEFAULT_WORK,
        }
    }
}

impl Config {
    /// Create a configuration, rejecting out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key_length` is zero or above
    /// [`MAX_KEY_LENGTH`], or if `work` lies outside
    /// [`MIN_WORK`]..=[`MAX_WORK`].
    pub fn new(key_length: u32, work: u32) -> Result<Self, ConfigError> {
        if key_length == 0 {
            return Err(ConfigError::ZeroKeyLength);
        }
        if key_length > MAX_KEY_LENGTH {
            return Err(ConfigError::KeyLengthTooLarge {
                requested: key_length,
                max: MAX_KEY_LENGTH,
            });
        }
        if work < MIN_WORK {
            return Err(ConfigError::WorkBelowMinimum {
                requested: work,
                min: MIN_WORK,
            });
        }
        if work > MAX_WORK {
            return Err(ConfigError::WorkAboveMaximum {
                requested: work,
                max: MAX_WORK,
            });
        }

        Ok(Self { key_length, work })
    }

    /// Derived-key length in bytes.
    pub fn key_length(&self) -> u32 {
        self.key_length
    }

    /// Iteration count applied to new hashes.
    pub fn work(&self) -> u32 {
        self.work
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        let config = Config::new(DEFAULT_KEY_LENGTH, DEFAULT_WORK).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn minimum_work_is_accepted() {
        let config = Config::new(32, MIN_WORK).unwrap();
        assert_eq!(config.work(), MIN_WORK);
    }

    #[test]
    fn sub_minimum_work_fails() {
        match Config::new(66, 1024) {
            Err(ConfigError::WorkBelowMinimum { requested, min }) => {
                assert_eq!(requested, 1024);
                assert_eq!(min, MIN_WORK);
            }
            other => panic!("expected WorkBelowMinimum, got: {other:?}"),
        }
    }

    #[test]
    fn absurd_work_fails() {
        assert_eq!(
            Config::new(66, u32::MAX),
            Err(ConfigError::WorkAboveMaximum {
                requested: u32::MAX,
                max: MAX_WORK,
            })
        );
    }

    #[test]
    fn zero_key_length_fails() {
        assert_eq!(Config::new(0, DEFAULT_WORK), Err(ConfigError::ZeroKeyLength));
    }

    #[test]
    fn oversized_key_length_fails() {
        assert_eq!(
            Config::new(4096, DEFAULT_WORK),
            Err(ConfigError::KeyLengthTooLarge {
                requested: 4096,
                max: MAX_KEY_LENGTH,
            })
        );
    }
}
