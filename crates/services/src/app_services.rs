use std::path::Path;
use std::sync::Arc;

use api::{
    AdminApi, AuthApi, BookmarkApi, FileVault, HttpApi, ProgressApi, SheetApi, Vault,
};

use crate::admin_service::AdminService;
use crate::auth_service::AuthService;
use crate::bookmark_service::BookmarkService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::session_service::SessionService;
use crate::sheet_service::SheetService;

/// Everything the UI needs, wired together once at startup.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionService>,
    auth: Arc<AuthService>,
    sheets: Arc<SheetService>,
    progress: Arc<ProgressService>,
    bookmarks: Arc<BookmarkService>,
    admin: Arc<AdminService>,
}

/// The API halves an assembly needs; one implementation usually provides all
/// of them.
pub struct ApiHandles {
    pub sheets: Arc<dyn SheetApi>,
    pub progress: Arc<dyn ProgressApi>,
    pub bookmarks: Arc<dyn BookmarkApi>,
    pub auth: Arc<dyn AuthApi>,
    pub admin: Arc<dyn AdminApi>,
}

impl AppServices {
    /// Wire services over arbitrary API and vault implementations. Tests use
    /// this with the in-memory fakes.
    #[must_use]
    pub fn assemble(apis: ApiHandles, vault: Arc<dyn Vault>) -> Self {
        let sessions = Arc::new(SessionService::new(Arc::clone(&vault)));
        Self {
            auth: Arc::new(AuthService::new(
                Arc::clone(&apis.auth),
                Arc::clone(&sessions),
            )),
            sheets: Arc::new(SheetService::new(apis.sheets)),
            progress: Arc::new(ProgressService::new(
                apis.progress,
                Arc::clone(&sessions),
            )),
            bookmarks: Arc::new(BookmarkService::new(
                apis.bookmarks,
                Arc::clone(&sessions),
            )),
            admin: Arc::new(AdminService::new(apis.auth, apis.admin, vault)),
            sessions,
        }
    }

    /// Production wiring: HTTP client against `base_url`, file vault under
    /// `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Vault` when the vault file cannot be
    /// opened.
    pub fn new_http(base_url: &str, data_dir: &Path) -> Result<Self, AppServicesError> {
        let http = Arc::new(HttpApi::new(base_url));
        let vault: Arc<dyn Vault> = Arc::new(FileVault::open(data_dir)?);
        Ok(Self::assemble(
            ApiHandles {
                sheets: http.clone(),
                progress: http.clone(),
                bookmarks: http.clone(),
                auth: http.clone(),
                admin: http,
            },
            vault,
        ))
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn sheets(&self) -> Arc<SheetService> {
        Arc::clone(&self.sheets)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn bookmarks(&self) -> Arc<BookmarkService> {
        Arc::clone(&self.bookmarks)
    }

    #[must_use]
    pub fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }
}
