//! Link operations: put, create (mint), get, update, delete, list.

use super::error::StoreError;
use super::types::ShortLinkRecord;
use super::Store;
use crate::codegen::CodeGenerator;

impl Store {
    /// Insert or overwrite the record at `code`. The URL is stored as-is;
    /// callers that want collision safety use [`create_link`] instead.
    ///
    /// [`create_link`]: Store::create_link
    pub fn put_link(&mut self, code: &str, long_url: &str, owner: &str) {
        self.links.insert(
            code.to_string(),
            ShortLinkRecord {
                short_code: code.to_string(),
                long_url: long_url.to_string(),
                owner_user_id: owner.to_string(),
            },
        );
    }

    /// Mint an unused short code and file a new link under it.
    ///
    /// Retries the generator while the candidate code is already taken, up to
    /// its attempt bound.
    pub fn create_link(
        &mut self,
        long_url: &str,
        owner: &str,
        gen: &CodeGenerator,
    ) -> Result<ShortLinkRecord, StoreError> {
        for _ in 0..gen.max_attempts() {
            let code = gen.generate_code();
            if self.links.contains_key(&code) {
                tracing::debug!("short code {} already taken, retrying", code);
                continue;
            }
            let record = ShortLinkRecord {
                short_code: code.clone(),
                long_url: long_url.to_string(),
                owner_user_id: owner.to_string(),
            };
            self.links.insert(code, record.clone());
            tracing::debug!("created link {} for {}", record.short_code, owner);
            return Ok(record);
        }
        Err(StoreError::GenerationExhausted {
            attempts: gen.max_attempts(),
        })
    }

    /// Look up a link. `None` is the caller's not-found case.
    pub fn get_link(&self, code: &str) -> Option<&ShortLinkRecord> {
        self.links.get(code)
    }

    /// Replace the destination URL of an existing link.
    ///
    /// Fails with [`StoreError::Unauthorized`] unless `requester` owns the
    /// record, leaving it untouched. Code and owner never change.
    pub fn update_link(
        &mut self,
        code: &str,
        new_long_url: &str,
        requester: &str,
    ) -> Result<(), StoreError> {
        let record = self.links.get_mut(code).ok_or(StoreError::NotFound)?;
        if record.owner_user_id != requester {
            return Err(StoreError::Unauthorized);
        }
        record.long_url = new_long_url.to_string();
        Ok(())
    }

    /// Remove a link. Same authorization rule as [`update_link`].
    ///
    /// [`update_link`]: Store::update_link
    pub fn delete_link(&mut self, code: &str, requester: &str) -> Result<(), StoreError> {
        let record = self.links.get(code).ok_or(StoreError::NotFound)?;
        if record.owner_user_id != requester {
            return Err(StoreError::Unauthorized);
        }
        self.links.remove(code);
        Ok(())
    }

    /// All links owned by `owner`, in no particular order.
    pub fn list_owned(&self, owner: &str) -> Vec<&ShortLinkRecord> {
        self.links
            .values()
            .filter(|record| record.owner_user_id == owner)
            .collect()
    }
}
