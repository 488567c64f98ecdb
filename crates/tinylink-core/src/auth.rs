//! Credential handling: salted password hashing, registration, login.
//!
//! These are the checks the request-handling layer runs before touching
//! account state, collected in one place so every caller applies them the
//! same way. Session lifecycle stays with the caller; this module only hands
//! back the authenticated [`UserAccount`].

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::codegen::CodeGenerator;
use crate::store::{Store, StoreError, UserAccount};

const SALT_LEN: usize = 16;
const SCHEME: &str = "sha256";

/// Outcomes of registration and login.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was empty.
    #[error("email and password must not be empty")]
    EmptyCredential,
    /// Unknown email or wrong password. The two are deliberately not
    /// distinguished, so the login path cannot be used to probe for accounts.
    #[error("invalid email or password")]
    InvalidCredential,
    /// Underlying store rejection (duplicate email, minting exhausted).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Hash a password under a fresh random salt.
///
/// Stored form: `sha256$<salt-hex>$<digest-hex>`, digest over the salt bytes
/// followed by the password bytes.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let digest = salted_digest(&salt, password);
    format!("{SCHEME}${}${}", hex::encode(salt), hex::encode(digest))
}

/// Check a password against a stored hash. Malformed stored values never
/// match (and never panic).
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    hex::encode(salted_digest(&salt, password)) == digest_hex
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Register a new account: reject empty credentials, hash the password, then
/// create the account (which may still fail on a duplicate email).
pub fn register(
    store: &mut Store,
    gen: &CodeGenerator,
    email: &str,
    password: &str,
) -> Result<UserAccount, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredential);
    }
    let account = store.create_account(email, &hash_password(password), gen)?;
    Ok(account)
}

/// Log a user in by email and password.
pub fn authenticate(store: &Store, email: &str, password: &str) -> Result<UserAccount, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::EmptyCredential);
    }
    let account = store
        .find_account_by_email(email)
        .ok_or(AuthError::InvalidCredential)?;
    if !verify_password(password, &account.password_hash) {
        return Err(AuthError::InvalidCredential);
    }
    Ok(account.clone())
}
