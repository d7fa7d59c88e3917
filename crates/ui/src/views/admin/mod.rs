mod all_sheets;
mod create_sheet;
mod dashboard;
mod import;
mod login;

pub use all_sheets::AdminAllSheetsView;
pub use create_sheet::AdminCreateSheetView;
pub use dashboard::AdminDashboardView;
pub use import::AdminImportView;
pub use login::AdminLoginView;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

/// Shared gate for the admin pages behind `/admin`. Renders the children
/// only when an admin token is cached; otherwise points at the login page.
#[component]
pub(super) fn AdminGate(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let logged_in = ctx.admin().is_logged_in().unwrap_or(false);

    if logged_in {
        rsx! { {children} }
    } else {
        rsx! {
            div { class: "page",
                h2 { "Admin" }
                p { "This area needs an admin login." }
                Link { class: "button", to: Route::AdminLogin {}, "Go to admin login" }
            }
        }
    }
}
