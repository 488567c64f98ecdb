//! Account operations: create, lookup by email or user ID.

use super::error::StoreError;
use super::types::UserAccount;
use super::Store;
use crate::codegen::CodeGenerator;

impl Store {
    /// Register a new account under a freshly minted user ID.
    ///
    /// The password arrives already hashed; see [`crate::auth::register`] for
    /// the full registration path. Email uniqueness is case-sensitive.
    pub fn create_account(
        &mut self,
        email: &str,
        password_hash: &str,
        gen: &CodeGenerator,
    ) -> Result<UserAccount, StoreError> {
        if self.find_account_by_email(email).is_some() {
            return Err(StoreError::DuplicateEmail);
        }
        for _ in 0..gen.max_attempts() {
            let user_id = gen.generate_user_id();
            if self.accounts.contains_key(&user_id) {
                tracing::debug!("user id {} already taken, retrying", user_id);
                continue;
            }
            let account = UserAccount {
                user_id: user_id.clone(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            };
            self.accounts.insert(user_id, account.clone());
            tracing::info!("registered account {}", account.user_id);
            return Ok(account);
        }
        Err(StoreError::GenerationExhausted {
            attempts: gen.max_attempts(),
        })
    }

    /// Find the account registered under `email` (exact match).
    pub fn find_account_by_email(&self, email: &str) -> Option<&UserAccount> {
        self.accounts.values().find(|account| account.email == email)
    }

    /// Look up an account by user ID, e.g. the identity a session carries.
    pub fn get_account(&self, user_id: &str) -> Option<&UserAccount> {
        self.accounts.get(user_id)
    }
}
