//! Short-code and user-ID generation.

use rand::rngs::OsRng;
use rand::Rng;

use crate::config::TinylinkConfig;

/// The 62 symbols identifiers are drawn from.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Default prefix prepended to generated user IDs.
pub const DEFAULT_USER_ID_PREFIX: &str = "user_";

/// Default bound on identifier minting attempts (including the first).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Generator for short codes and user IDs.
///
/// Draws uniformly (with replacement) from [`ALPHABET`] using the operating
/// system's random source; generated identifiers double as capability-like
/// handles, so a predictable generator is not acceptable here.
///
/// The generator itself never checks whether an identifier is in use. Store
/// operations that mint identifiers retry it up to [`max_attempts`] times
/// against their own maps.
///
/// [`max_attempts`]: CodeGenerator::max_attempts
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    code_length: usize,
    user_id_prefix: String,
    max_attempts: u32,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            user_id_prefix: DEFAULT_USER_ID_PREFIX.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CodeGenerator {
    /// Create a generator with explicit parameters. Length and attempt bound
    /// are clamped to at least 1.
    pub fn new(code_length: usize, user_id_prefix: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            code_length: code_length.max(1),
            user_id_prefix: user_id_prefix.into(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Build a generator from the loaded configuration.
    pub fn from_config(cfg: &TinylinkConfig) -> Self {
        let max_attempts = cfg
            .mint
            .as_ref()
            .map(|m| m.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        Self::new(cfg.code_length, cfg.user_id_prefix.clone(), max_attempts)
    }

    /// Length of every code this generator produces.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// How many times minting may retry before giving up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generate a random fixed-length string over [`ALPHABET`].
    pub fn generate_code(&self) -> String {
        let mut rng = OsRng;
        (0..self.code_length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// Generate a user ID: the configured prefix plus one short code.
    pub fn generate_user_id(&self) -> String {
        format!("{}{}", self.user_id_prefix, self.generate_code())
    }
}
