mod admin;
mod bookmarks;
mod home;
mod login;
mod profile;
mod progress;
mod sheet_detail;
mod sheet_progress;
mod sheets;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::{
    AdminAllSheetsView, AdminCreateSheetView, AdminDashboardView, AdminImportView,
    AdminLoginView,
};
pub use bookmarks::BookmarksView;
pub use home::HomeView;
pub use login::LoginView;
pub use profile::ProfileView;
pub use progress::ProgressDashboardView;
pub use sheet_detail::SheetDetailView;
pub use sheet_progress::SheetProgressView;
pub use sheets::SheetsView;
pub use state::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
