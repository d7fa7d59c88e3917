use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use tracker_core::model::Session;

use crate::views::{
    AdminAllSheetsView, AdminCreateSheetView, AdminDashboardView, AdminImportView,
    AdminLoginView, BookmarksView, HomeView, LoginView, ProfileView, ProgressDashboardView,
    SheetDetailView, SheetProgressView, SheetsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/sheets", SheetsView)] Sheets {},
        #[route("/sheet/:id", SheetDetailView)] SheetDetail { id: String },
        #[route("/progress", ProgressDashboardView)] ProgressDashboard {},
        #[route("/progress/:id", SheetProgressView)] SheetProgress { id: String },
        #[route("/bookmarks", BookmarksView)] Bookmarks {},
        #[route("/profile", ProfileView)] Profile {},
        #[route("/admin", AdminLoginView)] AdminLogin {},
        #[route("/admin/dashboard", AdminDashboardView)] AdminDashboard {},
        #[route("/admin/create-sheet", AdminCreateSheetView)] AdminCreateSheet {},
        #[route("/admin/all-sheets", AdminAllSheetsView)] AdminAllSheets {},
        #[route("/admin/import-from-file", AdminImportView)] AdminImport {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let session = use_context::<Signal<Session>>();
    let signed_in = session.read().is_authenticated();

    rsx! {
        nav { class: "navbar",
            h1 { "DSA Tracker" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Sheets {}, "Sheets" } }
                if signed_in {
                    li { Link { to: Route::ProgressDashboard {}, "Progress" } }
                    li { Link { to: Route::Bookmarks {}, "Bookmarks" } }
                    li { Link { to: Route::Profile {}, "Profile" } }
                } else {
                    li { Link { to: Route::Login {}, "Sign in" } }
                }
            }
        }
    }
}
