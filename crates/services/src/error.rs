//! Shared error types for the services crate.

use thiserror::Error;

use api::{ApiError, VaultError};

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error("login response is missing token or user")]
    IncompleteLogin,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Errors emitted by `SheetService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `BookmarkService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BookmarkServiceError {
    #[error("not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `AdminService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdminServiceError {
    #[error("admin is not logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Vault(#[from] VaultError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Vault(#[from] VaultError),
}
