#![forbid(unsafe_code)]

pub mod contract;
pub mod http;
pub mod vault;
mod wire;

pub use contract::{
    AdminApi, ApiError, AuthApi, BookmarkApi, InMemoryApi, ProgressApi, SheetApi,
};
pub use http::{DEFAULT_BASE_URL, HttpApi};
pub use vault::{
    ADMIN_TOKEN_KEY, FileVault, MemoryVault, TOKEN_KEY, USER_KEY, Vault, VaultError,
};
