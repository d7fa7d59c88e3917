use std::sync::Arc;

use services::{
    AdminService, AppServices, AuthService, BookmarkService, ProgressService, SessionService,
    SheetService,
};

/// What the composition root must provide for the UI to run.
pub trait UiApp: Send + Sync {
    fn sessions(&self) -> Arc<SessionService>;
    fn auth(&self) -> Arc<AuthService>;
    fn sheets(&self) -> Arc<SheetService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn bookmarks(&self) -> Arc<BookmarkService>;
    fn admin(&self) -> Arc<AdminService>;
}

impl UiApp for AppServices {
    fn sessions(&self) -> Arc<SessionService> {
        AppServices::sessions(self)
    }

    fn auth(&self) -> Arc<AuthService> {
        AppServices::auth(self)
    }

    fn sheets(&self) -> Arc<SheetService> {
        AppServices::sheets(self)
    }

    fn progress(&self) -> Arc<ProgressService> {
        AppServices::progress(self)
    }

    fn bookmarks(&self) -> Arc<BookmarkService> {
        AppServices::bookmarks(self)
    }

    fn admin(&self) -> Arc<AdminService> {
        AppServices::admin(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<SessionService>,
    auth: Arc<AuthService>,
    sheets: Arc<SheetService>,
    progress: Arc<ProgressService>,
    bookmarks: Arc<BookmarkService>,
    admin: Arc<AdminService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sessions: app.sessions(),
            auth: app.auth(),
            sheets: app.sheets(),
            progress: app.progress(),
            bookmarks: app.bookmarks(),
            admin: app.admin(),
        }
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

/// Build an `AppContext` from a UI-facing app implementation. Called once by
/// the composition root before launch.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
