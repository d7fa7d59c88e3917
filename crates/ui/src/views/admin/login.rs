use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn AdminLoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let admin = ctx.admin();
        let email = email.read().trim().to_owned();
        let password = password.read().clone();
        if email.is_empty() || password.is_empty() {
            error.set(Some("Enter both email and password."));
            return;
        }
        busy.set(true);
        spawn(async move {
            match admin.login(&email, &password).await {
                Ok(()) => {
                    navigator.push(Route::AdminDashboard {});
                }
                Err(_) => {
                    error.set(Some("Login rejected. Check the credentials."));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Admin Login" }

            div { class: "form",
                label { r#for: "admin-email", "Email" }
                input {
                    id: "admin-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "admin-password", "Password" }
                input {
                    id: "admin-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Logging in..." } else { "Log in" }
                }
                if let Some(message) = error() {
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}
