use std::sync::{Arc, PoisonError, RwLock};

use tracing::warn;

use api::{TOKEN_KEY, USER_KEY, Vault};
use tracker_core::model::{Session, User};

use crate::error::SessionStoreError;

/// Single source of truth for "who is logged in".
///
/// Every other component reads the session through this service; only
/// `restore`, `login`, and `logout` ever write it. Each mutation writes
/// through to the vault synchronously, and token and user are always set or
/// cleared together.
pub struct SessionService {
    vault: Arc<dyn Vault>,
    session: RwLock<Session>,
}

impl SessionService {
    #[must_use]
    pub fn new(vault: Arc<dyn Vault>) -> Self {
        Self {
            vault,
            session: RwLock::new(Session::anonymous()),
        }
    }

    /// Populate the in-memory session from the vault.
    ///
    /// Requires BOTH the token and the user keys; if only one is present
    /// (e.g. a partial write from a prior crash) or the stored user fails to
    /// parse, the session is treated as absent. No network validation is
    /// performed; a stale token is only discovered when an authenticated
    /// call fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the vault cannot be read.
    pub fn restore(&self) -> Result<Session, SessionStoreError> {
        let token = self.vault.get(TOKEN_KEY)?;
        let raw_user = self.vault.get(USER_KEY)?;

        let session = match (token, raw_user) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Session::authenticated(token, user),
                Err(err) => {
                    warn!(%err, "stored user profile is unreadable, treating session as absent");
                    Session::anonymous()
                }
            },
            _ => Session::anonymous(),
        };

        *self.write_lock() = session.clone();
        Ok(session)
    }

    /// Replace any prior session wholesale, in memory and in the vault.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the vault cannot be written.
    pub fn login(&self, token: &str, user: User) -> Result<(), SessionStoreError> {
        let raw_user = serde_json::to_string(&user)
            .map_err(|err| SessionStoreError::Serialization(err.to_string()))?;
        self.vault.put(TOKEN_KEY, token)?;
        self.vault.put(USER_KEY, &raw_user)?;
        *self.write_lock() = Session::authenticated(token, user);
        Ok(())
    }

    /// Clear the vault and the in-memory session unconditionally. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the vault cannot be written.
    pub fn logout(&self) -> Result<(), SessionStoreError> {
        self.vault.remove(TOKEN_KEY)?;
        self.vault.remove(USER_KEY)?;
        *self.write_lock() = Session::anonymous();
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.read_lock().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read_lock().token().map(str::to_owned)
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read_lock().user().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_lock().is_authenticated()
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryVault;
    use tracker_core::model::UserId;

    fn user() -> User {
        User::new(UserId::new("u1"), "Ada", "ada@example.com", None)
    }

    #[test]
    fn login_then_restore_in_fresh_instance_reproduces_session() {
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());

        let store = SessionService::new(Arc::clone(&vault));
        store.login("tok-1", user()).unwrap();

        let fresh = SessionService::new(vault);
        let session = fresh.restore().unwrap();
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.user(), Some(&user()));
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
        let store = SessionService::new(Arc::clone(&vault));
        store.login("tok-1", user()).unwrap();

        store.logout().unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        let fresh = SessionService::new(vault);
        let session = fresh.restore().unwrap();
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn partial_vault_state_is_treated_as_absent() {
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
        vault.put(TOKEN_KEY, "orphan-token").unwrap();

        let store = SessionService::new(vault);
        let session = store.restore().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unreadable_user_profile_is_treated_as_absent() {
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
        vault.put(TOKEN_KEY, "tok-1").unwrap();
        vault.put(USER_KEY, "not json").unwrap();

        let store = SessionService::new(vault);
        assert!(!store.restore().unwrap().is_authenticated());
    }

    #[test]
    fn login_replaces_prior_session_wholesale() {
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
        let store = SessionService::new(vault);

        store.login("tok-1", user()).unwrap();
        let other = User::new(UserId::new("u2"), "Grace", "grace@example.com", None);
        store.login("tok-2", other.clone()).unwrap();

        assert_eq!(store.token().as_deref(), Some("tok-2"));
        assert_eq!(store.user(), Some(other));
    }
}
