use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::admin::AdminGate;

#[component]
pub fn AdminDashboardView() -> Element {
    rsx! {
        AdminGate {
            DashboardBody {}
        }
    }
}

#[component]
fn DashboardBody() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    rsx! {
        div { class: "page",
            h2 { "Admin Dashboard" }

            ul { class: "admin-menu",
                li { Link { to: Route::AdminCreateSheet {}, "Create a sheet" } }
                li { Link { to: Route::AdminAllSheets {}, "Manage sheets" } }
                li { Link { to: Route::AdminImport {}, "Import questions from file" } }
            }

            button {
                class: "button button-secondary",
                onclick: move |_| {
                    if ctx.admin().logout().is_ok() {
                        navigator.push(Route::AdminLogin {});
                    }
                },
                "Log out"
            }
        }
    }
}
