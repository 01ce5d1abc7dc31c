//! Placeholder identity layer. One hard-coded credential pair, no password
//! hashing, no uniqueness checks: it exists to gate navigation in the UI
//! and nothing more. Real authentication would replace this module
//! wholesale.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{common::error::LedgerError, session::store::KeyValueStore};

const SESSION_KEY: &str = "user";
const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "password";
const DEMO_NAME: &str = "Demo User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// The logged-in user, persisted as a JSON blob under a fixed key in
/// whatever [`KeyValueStore`] the host hands us.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Succeeds only for the fixed demo credentials; anything else is
    /// `InvalidCredentials` and no session is written.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, LedgerError> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            warn!(email, "login rejected");
            return Err(LedgerError::InvalidCredentials);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
        };
        self.persist(&user)?;
        info!(user = %user.id, "login succeeded");
        Ok(user)
    }

    /// Always succeeds: fabricates a user from the given fields and stores
    /// it. No uniqueness check, and the password is discarded.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) -> Result<User, LedgerError> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.persist(&user)?;
        info!(user = %user.id, "signup succeeded");
        Ok(user)
    }

    /// Clears the stored session unconditionally.
    pub fn logout(&mut self) {
        self.store.remove(SESSION_KEY);
        info!("logged out");
    }

    /// Reads the session blob back. A corrupt blob surfaces as an error
    /// rather than a phantom session.
    pub fn current_user(&self) -> Result<Option<User>, LedgerError> {
        match self.store.get(SESSION_KEY) {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    fn persist(&mut self, user: &User) -> Result<(), LedgerError> {
        let blob = serde_json::to_string(user)?;
        self.store.set(SESSION_KEY, blob);
        Ok(())
    }
}
