use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SheetCardVm, map_sheet_cards};

#[component]
pub fn SheetsView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut resource = use_resource(move || {
        let sheets = ctx.sheets();
        async move {
            let sheets = sheets.list_sheets().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_sheet_cards(&sheets))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Practice Sheets" }

            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No sheets yet. Check back soon." }
                    } else {
                        div { class: "sheet-grid",
                            for card in cards {
                                SheetCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    ErrorNotice { err, on_retry: move |()| resource.restart() }
                },
            }
        }
    }
}

#[component]
fn SheetCard(card: SheetCardVm) -> Element {
    rsx! {
        div { class: "card",
            if let Some(image) = card.image.clone() {
                img { class: "card-image", src: "{image}", alt: "" }
            }
            h3 { "{card.title}" }
            if let Some(difficulty) = card.difficulty.clone() {
                span { class: "badge", "{difficulty}" }
            }
            if let Some(description) = card.description.clone() {
                p { "{description}" }
            }
            div { class: "card-actions",
                Link { class: "button", to: Route::SheetDetail { id: card.id.clone() }, "Open" }
                Link {
                    class: "button button-secondary",
                    to: Route::SheetProgress { id: card.id.clone() },
                    "Progress"
                }
            }
        }
    }
}
