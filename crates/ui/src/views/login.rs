use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use tracker_core::model::Session;

use crate::context::AppContext;
use crate::routes::Route;

/// Sign-in page. The desktop build has no embedded Google widget, so the
/// user pastes the credential obtained from their browser; the exchange
/// itself is identical.
#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session_signal = use_context::<Signal<Session>>();
    let navigator = use_navigator();

    let mut credential = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let auth = ctx.auth();
        let raw = credential.read().trim().to_owned();
        if raw.is_empty() {
            error.set(Some("Paste a sign-in credential first."));
            return;
        }
        busy.set(true);
        spawn(async move {
            match auth.sign_in_with_google(&raw).await {
                Ok(session) => {
                    session_signal.set(session);
                    navigator.push(Route::Sheets {});
                }
                Err(_) => {
                    error.set(Some("Sign-in failed. Check the credential and try again."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Sign in" }
            p { "Sign in with your Google account to save solved questions and bookmarks." }

            div { class: "form",
                label { r#for: "credential", "Google credential" }
                textarea {
                    id: "credential",
                    placeholder: "Paste the credential token here",
                    value: "{credential}",
                    oninput: move |evt| credential.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Sign in with Google" }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
            }

            p { class: "aside",
                "Just browsing? "
                Link { to: Route::Sheets {}, "View the sheets without signing in." }
            }
        }
    }
}
