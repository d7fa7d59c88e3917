use std::sync::Arc;

use tracing::info;

use api::AuthApi;
use tracker_core::model::Session;

use crate::error::AuthServiceError;
use crate::session_service::SessionService;

/// Orchestrates the sign-in exchange and hands the result to the session
/// store. The credential is opaque to this layer; it is forwarded verbatim.
pub struct AuthService {
    auth: Arc<dyn AuthApi>,
    sessions: Arc<SessionService>,
}

impl AuthService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, sessions: Arc<SessionService>) -> Self {
        Self { auth, sessions }
    }

    /// Exchange a third-party credential for a session and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::IncompleteLogin` when the remote response
    /// lacks either the token or the user, `Api` when the exchange is
    /// rejected, and `Session` when the vault write fails.
    pub async fn sign_in_with_google(
        &self,
        credential: &str,
    ) -> Result<Session, AuthServiceError> {
        let session = self.auth.google_login(credential).await?;
        let (Some(token), Some(user)) = (session.token(), session.user()) else {
            return Err(AuthServiceError::IncompleteLogin);
        };
        self.sessions.login(token, user.clone())?;
        info!(user = %user.id(), "signed in");
        Ok(session)
    }

    /// Forget the current session locally. The token is never revoked
    /// remotely.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Session` when the vault write fails.
    pub fn sign_out(&self) -> Result<(), AuthServiceError> {
        self.sessions.logout()?;
        info!("signed out");
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use api::{InMemoryApi, MemoryVault};

    fn service() -> (AuthService, Arc<SessionService>, InMemoryApi) {
        let api = InMemoryApi::new();
        let sessions = Arc::new(SessionService::new(Arc::new(MemoryVault::new())));
        let auth = AuthService::new(Arc::new(api.clone()), Arc::clone(&sessions));
        (auth, sessions, api)
    }

    #[tokio::test]
    async fn sign_in_persists_the_session() {
        let (auth, sessions, api) = service();

        let session = auth.sign_in_with_google("google-credential").await.unwrap();
        assert_eq!(session.token(), Some(api.user_token().as_str()));
        assert!(sessions.is_authenticated());
    }

    #[tokio::test]
    async fn sign_out_clears_the_session() {
        let (auth, sessions, _api) = service();
        auth.sign_in_with_google("google-credential").await.unwrap();

        auth.sign_out().unwrap();
        assert!(!sessions.is_authenticated());
    }
}
