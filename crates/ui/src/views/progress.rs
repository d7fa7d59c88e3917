use dioxus::prelude::*;
use dioxus_router::Link;

use tracker_core::progress::{attempt_summary, sheet_completion};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{CompletionVm, SummaryVm, map_completion, map_summary};

#[derive(Clone, Debug, PartialEq)]
struct SheetRowVm {
    id: String,
    title: String,
    completion: CompletionVm,
}

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    summary: SummaryVm,
    rows: Vec<SheetRowVm>,
}

#[component]
pub fn ProgressDashboardView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut resource = use_resource(move || {
        let ctx = ctx.clone();

        async move {
            let records = ctx
                .progress()
                .list_progress()
                .await
                .map_err(ViewError::from)?;
            let sheets = ctx.sheets().list_sheets().await.map_err(ViewError::from)?;

            let mut rows = Vec::with_capacity(sheets.len());
            for sheet in &sheets {
                let questions = ctx
                    .sheets()
                    .list_questions(sheet.id())
                    .await
                    .map_err(ViewError::from)?;
                rows.push(SheetRowVm {
                    id: sheet.id().as_str().to_owned(),
                    title: sheet.title().to_owned(),
                    completion: map_completion(sheet_completion(&questions, &records)),
                });
            }

            Ok::<_, ViewError>(DashboardData {
                summary: map_summary(attempt_summary(&records)),
                rows,
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Your Progress" }

            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(data) => rsx! {
                    div { class: "stats",
                        div { class: "stat",
                            span { class: "stat-value", "{data.summary.attempted}" }
                            span { class: "stat-label", "Attempted" }
                        }
                        div { class: "stat",
                            span { class: "stat-value", "{data.summary.solved}" }
                            span { class: "stat-label", "Solved" }
                        }
                        div { class: "stat",
                            span { class: "stat-value {data.summary.band_class}", "{data.summary.percentage}%" }
                            span { class: "stat-label", "Solve rate" }
                        }
                    }

                    if data.rows.is_empty() {
                        p { "No sheets yet." }
                    } else {
                        ul { class: "sheet-progress-list",
                            for row in data.rows.clone() {
                                li {
                                    Link { to: Route::SheetProgress { id: row.id.clone() }, "{row.title}" }
                                    div { class: "progress-bar",
                                        div {
                                            class: "{row.completion.band_class}",
                                            style: "width: {row.completion.percentage}%",
                                        }
                                    }
                                    span { "{row.completion.solved} / {row.completion.total}" }
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
