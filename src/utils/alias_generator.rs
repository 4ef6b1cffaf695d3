//! Random alias generation.
//!
//! Provides the production [`AliasGenerator`] implementation backed by the
//! operating system RNG.

use crate::domain::AliasGenerator;
use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to an 8-character URL-safe alias, giving 2^48 possible
/// values. Collision probability is low but non-zero; callers retry.
const ALIAS_LENGTH_BYTES: usize = 6;

/// Generates aliases from OS randomness, URL-safe base64 without padding.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAliasGenerator;

impl RandomAliasGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl AliasGenerator for RandomAliasGenerator {
    /// Generates a cryptographically secure random alias.
    ///
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn generate(&self) -> String {
        let mut buffer = [0u8; ALIAS_LENGTH_BYTES];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    }
}
