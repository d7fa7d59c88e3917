#![forbid(unsafe_code)]

pub mod admin_service;
pub mod app_services;
pub mod auth_service;
pub mod bookmark_service;
pub mod error;
pub mod progress_service;
pub mod session_service;
pub mod sheet_service;

pub use error::{
    AdminServiceError, AppServicesError, AuthServiceError, BookmarkServiceError,
    ProgressServiceError, SessionStoreError, SheetServiceError,
};

pub use admin_service::AdminService;
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use bookmark_service::BookmarkService;
pub use progress_service::ProgressService;
pub use session_service::SessionService;
pub use sheet_service::SheetService;
