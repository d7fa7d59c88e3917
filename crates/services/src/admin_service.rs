use std::sync::Arc;

use tracing::info;

use api::{ADMIN_TOKEN_KEY, AdminApi, AuthApi, Vault};
use tracker_core::model::{Sheet, SheetDraft, SheetId};

use crate::error::AdminServiceError;

/// Administrative workflows, kept entirely separate from the user session.
///
/// The admin token lives under its own vault key; signing the user out does
/// not touch it, and vice versa. Each gated call reads the token from the
/// vault at call time.
pub struct AdminService {
    auth: Arc<dyn AuthApi>,
    admin: Arc<dyn AdminApi>,
    vault: Arc<dyn Vault>,
}

impl AdminService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, admin: Arc<dyn AdminApi>, vault: Arc<dyn Vault>) -> Self {
        Self { auth, admin, vault }
    }

    /// Authenticate an administrator and cache the token in the vault.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Api` (401) for bad credentials and
    /// `Vault` when the token cannot be cached.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AdminServiceError> {
        let token = self.auth.admin_login(email, password).await?;
        self.vault.put(ADMIN_TOKEN_KEY, &token)?;
        info!("admin signed in");
        Ok(())
    }

    /// Drop the cached admin token. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Vault` when the vault cannot be written.
    pub fn logout(&self) -> Result<(), AdminServiceError> {
        self.vault.remove(ADMIN_TOKEN_KEY)?;
        Ok(())
    }

    /// Whether an admin token is cached. Presence only; the token may still
    /// be rejected by the remote.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::Vault` when the vault cannot be read.
    pub fn is_logged_in(&self) -> Result<bool, AdminServiceError> {
        Ok(self.vault.get(ADMIN_TOKEN_KEY)?.is_some())
    }

    /// Create a sheet. Returns the sheet with its remote-minted ID.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::NotLoggedIn` without touching the network
    /// when no admin token is cached.
    pub async fn create_sheet(&self, draft: &SheetDraft) -> Result<Sheet, AdminServiceError> {
        let token = self.token()?;
        let sheet = self.admin.create_sheet(&token, draft).await?;
        info!(sheet = %sheet.id(), "sheet created");
        Ok(sheet)
    }

    /// Delete a sheet and everything under it.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::NotLoggedIn` without touching the network
    /// when no admin token is cached.
    pub async fn delete_sheet(&self, id: &SheetId) -> Result<(), AdminServiceError> {
        let token = self.token()?;
        self.admin.delete_sheet(&token, id).await?;
        info!(sheet = %id, "sheet deleted");
        Ok(())
    }

    /// Bulk-import questions into a sheet from a server-side file. Returns
    /// the number of questions imported.
    ///
    /// # Errors
    ///
    /// Returns `AdminServiceError::NotLoggedIn` without touching the network
    /// when no admin token is cached.
    pub async fn import_questions(
        &self,
        sheet_id: &SheetId,
        file_name: &str,
    ) -> Result<usize, AdminServiceError> {
        let token = self.token()?;
        let count = self.admin.seed_questions(&token, sheet_id, file_name).await?;
        info!(sheet = %sheet_id, count, "questions imported");
        Ok(count)
    }

    fn token(&self) -> Result<String, AdminServiceError> {
        self.vault
            .get(ADMIN_TOKEN_KEY)?
            .ok_or(AdminServiceError::NotLoggedIn)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use api::{InMemoryApi, MemoryVault, TOKEN_KEY};

    fn service() -> (AdminService, Arc<dyn Vault>) {
        let api = Arc::new(InMemoryApi::new());
        let vault: Arc<dyn Vault> = Arc::new(MemoryVault::new());
        let service = AdminService::new(api.clone(), api, Arc::clone(&vault));
        (service, vault)
    }

    #[tokio::test]
    async fn gated_calls_fail_fast_without_login() {
        let (service, _vault) = service();
        let draft = SheetDraft::new("Sheet", None, None, None).unwrap();

        let err = service.create_sheet(&draft).await.unwrap_err();
        assert!(matches!(err, AdminServiceError::NotLoggedIn));
    }

    #[tokio::test]
    async fn login_enables_sheet_management() {
        let (service, _vault) = service();
        service.login("admin@example.com", "secret").await.unwrap();
        assert!(service.is_logged_in().unwrap());

        let draft = SheetDraft::new("Sheet", None, None, None).unwrap();
        let sheet = service.create_sheet(&draft).await.unwrap();
        service.delete_sheet(sheet.id()).await.unwrap();
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() {
        let (service, _vault) = service();
        let err = service.login("admin@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AdminServiceError::Api(api) if api.is_unauthorized()));
        assert!(!service.is_logged_in().unwrap());
    }

    #[tokio::test]
    async fn admin_logout_leaves_the_user_session_alone() {
        let (service, vault) = service();
        vault.put(TOKEN_KEY, "user-token").unwrap();
        service.login("admin@example.com", "secret").await.unwrap();

        service.logout().unwrap();
        service.logout().unwrap();

        assert!(!service.is_logged_in().unwrap());
        assert_eq!(vault.get(TOKEN_KEY).unwrap().as_deref(), Some("user-token"));
    }
}
