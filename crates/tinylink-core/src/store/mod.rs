//! In-memory ownership-scoped store for short links and user accounts.
//!
//! Holds the short-code → link mapping and the user-ID → account mapping,
//! and answers the ownership and identity queries the request-handling layer
//! needs. Mutations on links are gated on the requester matching the record's
//! owner; the store only ever receives an already-authenticated identity
//! string and never inspects sessions or cookies itself.
//!
//! State lives exactly as long as the process. There is no persistence and
//! no transaction discipline beyond single-operation atomicity.

pub mod error;
pub mod types;

mod accounts;
mod links;
mod shared;

pub use error::StoreError;
pub use shared::SharedStore;
pub use types::{ShortLinkRecord, UserAccount};

use std::collections::HashMap;

use crate::auth;

/// The in-memory maps behind all link and account operations.
///
/// Constructed explicitly at startup and passed by handle into whatever
/// layer services requests; there is no module-level instance. Wrap it in
/// [`SharedStore`] when more than one thread needs access.
#[derive(Debug, Clone, Default)]
pub struct Store {
    links: HashMap<String, ShortLinkRecord>,
    accounts: HashMap<String, UserAccount>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo accounts and links, for interactive
    /// sessions that want something to look at. Demo passwords are stored
    /// hashed like any other.
    pub fn with_example_data() -> Self {
        let mut store = Store::new();
        for (user_id, email, password) in [
            ("userRandomID", "user@example.com", "purple-monkey-dinosaur"),
            ("user2RandomID", "user2@example.com", "dishwasher-funk"),
        ] {
            store.accounts.insert(
                user_id.to_string(),
                UserAccount {
                    user_id: user_id.to_string(),
                    email: email.to_string(),
                    password_hash: auth::hash_password(password),
                },
            );
        }
        store.put_link("b2xVn2", "http://www.lighthouselabs.ca", "userRandomID");
        store.put_link("9sm5xK", "http://www.google.com", "user2RandomID");
        store
    }
}
