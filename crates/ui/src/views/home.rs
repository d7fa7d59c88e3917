use dioxus::prelude::*;
use dioxus_router::Link;

use tracker_core::model::Session;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let session = use_context::<Signal<Session>>();
    let greeting = session
        .read()
        .user()
        .map(|user| format!("Welcome back, {}.", user.name()));

    rsx! {
        div { class: "page hero",
            h2 { "Master DSA, one sheet at a time" }
            p { "Pick a curated practice sheet, solve questions topic by topic, and track your progress across devices." }
            if let Some(greeting) = greeting {
                p { class: "greeting", "{greeting}" }
            }
            div { class: "hero-actions",
                Link { class: "button", to: Route::Sheets {}, "Browse sheets" }
                if !session.read().is_authenticated() {
                    Link { class: "button button-secondary", to: Route::Login {}, "Sign in to track progress" }
                }
            }
        }
    }
}
