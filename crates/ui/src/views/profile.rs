use dioxus::prelude::*;
use dioxus_router::use_navigator;

use tracker_core::model::Session;
use tracker_core::progress::attempt_summary;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SummaryVm, format_datetime, map_summary};

#[derive(Clone, Debug, PartialEq)]
struct ProfileData {
    summary: SummaryVm,
    last_attempt: Option<String>,
}

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session_signal = use_context::<Signal<Session>>();
    let navigator = use_navigator();

    let user = session_signal.read().user().cloned();

    let ctx_for_load = ctx.clone();
    let mut resource = use_resource(move || {
        let progress = ctx_for_load.progress();
        async move {
            let records = progress.list_progress().await.map_err(ViewError::from)?;
            let last_attempt = records
                .iter()
                .filter_map(|record| record.last_attempted())
                .max()
                .map(format_datetime);
            Ok::<_, ViewError>(ProfileData {
                summary: map_summary(attempt_summary(&records)),
                last_attempt,
            })
        }
    });
    let state = view_state_from_resource(resource);

    let Some(user) = user else {
        return rsx! {
            div { class: "page",
                h2 { "Profile" }
                p { "{ViewError::NotSignedIn.message()}" }
            }
        };
    };

    rsx! {
        div { class: "page",
            h2 { "Profile" }

            div { class: "profile-card",
                if let Some(avatar) = user.avatar() {
                    img { class: "avatar", src: "{avatar}", alt: "{user.name()}" }
                } else {
                    span { class: "avatar avatar-initial", "{user.initial()}" }
                }
                div {
                    h3 { "{user.name()}" }
                    p { "{user.email()}" }
                }
            }

            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(data) => rsx! {
                    ProfileStats { summary: data.summary.clone(), last_attempt: data.last_attempt.clone() }
                },
                ViewState::Error(err) => rsx! {
                    ErrorNotice { err, on_retry: move |()| resource.restart() }
                },
            }

            button {
                class: "button button-secondary",
                onclick: move |_| {
                    if ctx.auth().sign_out().is_ok() {
                        session_signal.set(Session::anonymous());
                        navigator.push(Route::Home {});
                    }
                },
                "Sign out"
            }
        }
    }
}

#[component]
fn ProfileStats(summary: SummaryVm, last_attempt: Option<String>) -> Element {
    rsx! {
        dl { class: "summary",
            dt { "Attempted" }
            dd { "{summary.attempted}" }

            dt { "Solved" }
            dd { "{summary.solved}" }

            dt { "Solve rate" }
            dd {
                span { class: "{summary.band_class}", "{summary.percentage}%" }
            }

            if let Some(last_attempt) = last_attempt {
                dt { "Last attempt" }
                dd { "{last_attempt}" }
            }
        }
    }
}
