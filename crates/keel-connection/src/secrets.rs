//! Password storage backed by the OS keychain
//!
//! Passwords never enter the connections file; profiles carry an opaque
//! [`SecretRef`] and the actual values live in a single keychain entry
//! holding a JSON map keyed by reference. One entry instead of one per
//! connection keeps the number of OS authorization prompts down.
//!
//! Reads degrade: if the keychain is unavailable or the entry is corrupt,
//! the store starts empty and connections simply prompt for a password
//! again. Writes that cannot reach the keychain are real errors.

use std::collections::HashMap;

use keel_core::{KeelError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SERVICE_NAME: &str = "dev.keel.connections";
const ACCOUNT_NAME: &str = "secrets";

/// Opaque handle to a stored password.
///
/// Serializes as a bare string inside [`SavedConnection`](crate::SavedConnection).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretRef(String);

impl SecretRef {
    /// The reference under which a connection's password is filed.
    pub fn for_connection(connection_id: Uuid) -> Self {
        Self(format!("password:{connection_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keychain-backed password store with a lazily loaded in-process cache.
pub struct SecretStore {
    cache: RwLock<Option<HashMap<String, String>>>,
    persist: bool,
}

impl SecretStore {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(None),
            persist: true,
        }
    }

    /// A store that never touches the keychain. For tests and ephemeral
    /// sessions.
    pub fn in_memory() -> Self {
        Self {
            cache: RwLock::new(Some(HashMap::new())),
            persist: false,
        }
    }

    /// Store a password and return the reference to file on the profile.
    pub fn store_password(&self, connection_id: Uuid, password: &str) -> Result<SecretRef> {
        let secret = SecretRef::for_connection(connection_id);

        let mut guard = self.cache.write();
        let map = guard.get_or_insert_with(|| self.load_from_keychain());
        map.insert(secret.as_str().to_string(), password.to_string());
        self.persist_to_keychain(map)?;

        tracing::debug!(connection_id = %connection_id, "stored connection password");
        Ok(secret)
    }

    /// Look up a password. `None` means the reference is unknown, which
    /// callers treat as "prompt the user again".
    pub fn get_password(&self, secret: &SecretRef) -> Option<String> {
        let mut guard = self.cache.write();
        let map = guard.get_or_insert_with(|| self.load_from_keychain());
        map.get(secret.as_str()).cloned()
    }

    /// Remove a password, e.g. when its connection profile is deleted.
    pub fn delete_password(&self, secret: &SecretRef) -> Result<()> {
        let mut guard = self.cache.write();
        let map = guard.get_or_insert_with(|| self.load_from_keychain());
        if map.remove(secret.as_str()).is_some() {
            self.persist_to_keychain(map)?;
            tracing::debug!(secret = secret.as_str(), "deleted stored password");
        }
        Ok(())
    }

    fn load_from_keychain(&self) -> HashMap<String, String> {
        if !self.persist {
            return HashMap::new();
        }

        match keyring::Entry::new(SERVICE_NAME, ACCOUNT_NAME).and_then(|entry| entry.get_password())
        {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "secret store entry is corrupt, starting empty");
                HashMap::new()
            }),
            Err(keyring::Error::NoEntry) => HashMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "keychain unavailable, starting with empty secret store");
                HashMap::new()
            }
        }
    }

    fn persist_to_keychain(&self, map: &HashMap<String, String>) -> Result<()> {
        if !self.persist {
            return Ok(());
        }

        let serialized = serde_json::to_string(map)?;
        let entry = keyring::Entry::new(SERVICE_NAME, ACCOUNT_NAME)
            .map_err(|e| KeelError::Security(e.to_string()))?;
        entry
            .set_password(&serialized)
            .map_err(|e| KeelError::Security(e.to_string()))?;
        Ok(())
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_derived_from_connection_id() {
        let id = Uuid::new_v4();
        assert_eq!(SecretRef::for_connection(id).as_str(), format!("password:{id}"));
    }

    #[test]
    fn store_and_get_round_trip() {
        let store = SecretStore::in_memory();
        let id = Uuid::new_v4();
        let secret = store.store_password(id, "hunter2").unwrap();

        assert_eq!(secret, SecretRef::for_connection(id));
        assert_eq!(store.get_password(&secret).as_deref(), Some("hunter2"));
    }

    #[test]
    fn overwrites_existing_password() {
        let store = SecretStore::in_memory();
        let id = Uuid::new_v4();
        let secret = store.store_password(id, "old").unwrap();
        store.store_password(id, "new").unwrap();

        assert_eq!(store.get_password(&secret).as_deref(), Some("new"));
    }

    #[test]
    fn unknown_reference_yields_none() {
        let store = SecretStore::in_memory();
        assert_eq!(store.get_password(&SecretRef::for_connection(Uuid::new_v4())), None);
    }

    #[test]
    fn delete_removes_the_password() {
        let store = SecretStore::in_memory();
        let secret = store.store_password(Uuid::new_v4(), "hunter2").unwrap();

        store.delete_password(&secret).unwrap();
        assert_eq!(store.get_password(&secret), None);

        // Deleting again is a no-op.
        store.delete_password(&secret).unwrap();
    }
}
