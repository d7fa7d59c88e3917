use dioxus::prelude::*;

use tracker_core::model::SheetId;

use crate::context::AppContext;
use crate::views::admin::AdminGate;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SheetCardVm, map_sheet_cards};

#[component]
pub fn AdminAllSheetsView() -> Element {
    rsx! {
        AdminGate {
            AllSheetsBody {}
        }
    }
}

#[component]
fn AllSheetsBody() -> Element {
    let ctx = use_context::<AppContext>();
    let ctx_for_load = ctx.clone();

    // The fetch seeds the table; a successful Delete drops the row in place
    // rather than re-fetching.
    let cards = use_signal(Vec::<SheetCardVm>::new);

    let mut resource = use_resource(move || {
        let sheets = ctx_for_load.sheets();
        let mut cards = cards;
        async move {
            let list = sheets.list_sheets().await.map_err(ViewError::from)?;
            cards.set(map_sheet_cards(&list));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "All Sheets" }

            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(()) => rsx! {
                    if cards.read().is_empty() {
                        p { "No sheets yet." }
                    } else {
                        table { class: "admin-table",
                            thead {
                                tr {
                                    th { "Title" }
                                    th { "Difficulty" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for card in cards.read().clone() {
                                    tr {
                                        td { "{card.title}" }
                                        td { {card.difficulty.clone().unwrap_or_default()} }
                                        td {
                                            button {
                                                class: "button button-danger",
                                                onclick: {
                                                    let ctx = ctx.clone();
                                                    let id = card.id.clone();
                                                    move |_| {
                                                        let admin = ctx.admin();
                                                        let id = id.clone();
                                                        let mut cards = cards;
                                                        spawn(async move {
                                                            if admin.delete_sheet(&SheetId::new(id.clone())).await.is_ok() {
                                                                cards.write().retain(|card| card.id != id);
                                                            }
                                                        });
                                                    }
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
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
