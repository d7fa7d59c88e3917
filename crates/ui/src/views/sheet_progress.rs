use dioxus::prelude::*;

use tracker_core::model::SheetId;
use tracker_core::progress::{active_topics, sheet_completion, topic_breakdown};

use crate::context::AppContext;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{CompletionVm, TopicRowVm, map_completion, map_topic_rows};

#[derive(Clone, Debug, PartialEq)]
struct SheetProgressData {
    title: String,
    completion: CompletionVm,
    topics: Vec<TopicRowVm>,
    active_topics: Vec<String>,
}

#[component]
pub fn SheetProgressView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let sheet_id = SheetId::new(id);

    let mut resource = use_resource(move || {
        let ctx = ctx.clone();
        let sheet_id = sheet_id.clone();

        async move {
            let sheet = ctx
                .sheets()
                .get_sheet(&sheet_id)
                .await
                .map_err(ViewError::from)?;
            let questions = ctx
                .sheets()
                .list_questions(&sheet_id)
                .await
                .map_err(ViewError::from)?;
            let records = ctx
                .progress()
                .list_progress()
                .await
                .map_err(ViewError::from)?;

            let breakdown = topic_breakdown(&questions, &records);
            let active = active_topics(&breakdown)
                .into_iter()
                .map(|(topic, _)| topic.to_owned())
                .collect();

            Ok::<_, ViewError>(SheetProgressData {
                title: sheet.title().to_owned(),
                completion: map_completion(sheet_completion(&questions, &records)),
                topics: map_topic_rows(&breakdown),
                active_topics: active,
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    p { class: "subtitle", "Progress" }

                    div { class: "completion",
                        div { class: "progress-bar",
                            div {
                                class: "{data.completion.band_class}",
                                style: "width: {data.completion.percentage}%",
                            }
                        }
                        p { "Solved {data.completion.solved} of {data.completion.total} ({data.completion.percentage}%)" }
                    }

                    if data.active_topics.is_empty() {
                        p { "No topics solved yet. Open the sheet and get started." }
                    } else {
                        div { class: "chips",
                            for topic in data.active_topics.clone() {
                                span { class: "chip", "{topic}" }
                            }
                        }
                    }

                    table { class: "topic-table",
                        thead {
                            tr {
                                th { "Topic" }
                                th { "Solved" }
                                th { "Attempted" }
                                th { "Total" }
                                th { "Completion" }
                            }
                        }
                        tbody {
                            for row in data.topics.clone() {
                                tr {
                                    td { "{row.topic}" }
                                    td { "{row.solved}" }
                                    td { "{row.attempted}" }
                                    td { "{row.total}" }
                                    td {
                                        span { class: "{row.band_class}", "{row.percentage}%" }
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
