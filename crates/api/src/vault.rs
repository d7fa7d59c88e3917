//! Local key/value vault for cached credentials.
//!
//! The analog of the browser's local storage: a handful of fixed string
//! keys, written through synchronously on every mutation, with no expiry
//! and no encryption. The session token, the serialized user profile, and
//! the admin token are the only values ever stored here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Vault key for the session bearer token.
pub const TOKEN_KEY: &str = "token";
/// Vault key for the serialized user profile.
pub const USER_KEY: &str = "user";
/// Vault key for the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Errors surfaced by vault adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VaultError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Synchronous key/value storage for cached credentials.
pub trait Vault: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns `VaultError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, VaultError>;

    /// Write a value through to the backing store.
    ///
    /// # Errors
    ///
    /// Returns `VaultError` if the backing store cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), VaultError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `VaultError` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), VaultError>;
}

/// File-backed vault: one flat JSON object in the app's data directory.
pub struct FileVault {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileVault {
    /// Open (or create) the vault file under the given data directory.
    ///
    /// # Errors
    ///
    /// Returns `VaultError` if the directory cannot be created or an
    /// existing vault file cannot be read or parsed.
    pub fn open(data_dir: &Path) -> Result<Self, VaultError> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join("vault.json");
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|err| VaultError::Serialization(err.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), VaultError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|err| VaultError::Serialization(err.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Vault for FileVault {
    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), VaultError> {
        let mut entries = self.lock();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), VaultError> {
        let mut entries = self.lock();
        entries.remove(key);
        self.persist(&entries)
    }
}

/// In-memory vault for tests.
#[derive(Default)]
pub struct MemoryVault {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Vault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), VaultError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), VaultError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tracker-vault-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_vault_round_trips_across_instances() {
        let dir = temp_dir("roundtrip");

        {
            let vault = FileVault::open(&dir).unwrap();
            vault.put(TOKEN_KEY, "tok-1").unwrap();
            vault.put(USER_KEY, r#"{"name":"Ada"}"#).unwrap();
        }

        let reopened = FileVault::open(&dir).unwrap();
        assert_eq!(reopened.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));
        assert_eq!(
            reopened.get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"name":"Ada"}"#)
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn removing_an_absent_key_is_fine() {
        let dir = temp_dir("remove");
        let vault = FileVault::open(&dir).unwrap();
        vault.remove(ADMIN_TOKEN_KEY).unwrap();
        assert_eq!(vault.get(ADMIN_TOKEN_KEY).unwrap(), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_vault_behaves_like_a_map() {
        let vault = MemoryVault::new();
        vault.put(TOKEN_KEY, "t").unwrap();
        assert_eq!(vault.get(TOKEN_KEY).unwrap().as_deref(), Some("t"));
        vault.remove(TOKEN_KEY).unwrap();
        assert_eq!(vault.get(TOKEN_KEY).unwrap(), None);
    }
}
