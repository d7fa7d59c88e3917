use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;

use tracker_core::model::{Question, QuestionId, SheetId};
use tracker_core::progress::solved_lookup;

use crate::context::AppContext;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuestionRowVm, TopicGroupVm, apply_progress, map_topic_groups};

#[derive(Clone, Debug, PartialEq)]
struct DetailData {
    title: String,
    description: Option<String>,
    questions: Vec<Question>,
}

#[component]
pub fn SheetDetailView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let sheet_id = SheetId::new(id);
    let mut open_topic = use_signal(|| None::<String>);

    // The fetch seeds these once; mutations fold the returned value straight
    // into them instead of re-fetching the chain.
    let solved = use_signal(HashMap::<QuestionId, bool>::new);
    let bookmarked = use_signal(HashSet::<QuestionId>::new);

    let mut resource = use_resource(move || {
        let ctx = ctx.clone();
        let sheet_id = sheet_id.clone();
        let mut solved = solved;
        let mut bookmarked = bookmarked;

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
            // This page is session-gated: an anonymous visitor fails here
            // with NotSignedIn and gets pointed at the login page.
            let records = ctx
                .progress()
                .list_progress()
                .await
                .map_err(ViewError::from)?;
            let bookmark_list = ctx
                .bookmarks()
                .list_bookmarks()
                .await
                .map_err(ViewError::from)?;

            solved.set(solved_lookup(&records));
            bookmarked.set(
                bookmark_list
                    .iter()
                    .map(|bookmark| bookmark.question_id().clone())
                    .collect(),
            );

            Ok::<_, ViewError>(DetailData {
                title: sheet.title().to_owned(),
                description: sheet.description().map(str::to_owned),
                questions,
            })
        }
    });

    let state = view_state_from_resource(resource);
    let groups = match &state {
        ViewState::Ready(data) => {
            map_topic_groups(&data.questions, &solved.read(), &bookmarked.read())
        }
        _ => Vec::new(),
    };

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(data) => rsx! {
                    h2 { "{data.title}" }
                    if let Some(description) = data.description.clone() {
                        p { "{description}" }
                    }
                    div { class: "accordion",
                        for group in groups.clone() {
                            TopicSection {
                                group: group.clone(),
                                open: open_topic() == Some(group.topic.clone()),
                                solved,
                                bookmarked,
                                on_toggle_open: move |topic: String| {
                                    if open_topic() == Some(topic.clone()) {
                                        open_topic.set(None);
                                    } else {
                                        open_topic.set(Some(topic));
                                    }
                                },
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
fn TopicSection(
    group: TopicGroupVm,
    open: bool,
    solved: Signal<HashMap<QuestionId, bool>>,
    bookmarked: Signal<HashSet<QuestionId>>,
    on_toggle_open: EventHandler<String>,
) -> Element {
    let topic = group.topic.clone();
    let solved_count = group.rows.iter().filter(|row| row.solved).count();
    let total = group.rows.len();

    rsx! {
        section { class: "topic",
            button {
                class: "topic-header",
                onclick: move |_| on_toggle_open.call(topic.clone()),
                span { "{group.topic}" }
                span { class: "topic-count", "{solved_count} / {total}" }
            }
            if open {
                ul { class: "question-list",
                    for row in group.rows.clone() {
                        QuestionRow { row: row.clone(), solved, bookmarked }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionRow(
    row: QuestionRowVm,
    solved: Signal<HashMap<QuestionId, bool>>,
    bookmarked: Signal<HashSet<QuestionId>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let toggle_ctx = ctx.clone();
    let toggle_id = row.id.clone();
    let bookmark_id = row.id.clone();
    let is_bookmarked = row.bookmarked;

    rsx! {
        li { class: if row.solved { "question solved" } else { "question" },
            input {
                r#type: "checkbox",
                checked: row.solved,
                onchange: move |_| {
                    let progress = toggle_ctx.progress();
                    let question_id = toggle_id.clone();
                    let mut solved = solved;
                    spawn(async move {
                        if let Ok(record) = progress.toggle_solved(&question_id).await {
                            apply_progress(&mut solved.write(), &record);
                        }
                    });
                },
            }
            span { class: "question-title", "{row.title}" }
            span { class: "{row.difficulty_class}", "{row.difficulty_label}" }
            if let Some(link) = row.practice_link.clone() {
                a { class: "practice-link", href: "{link}", "Practice" }
            }
            button {
                class: if is_bookmarked { "bookmark active" } else { "bookmark" },
                onclick: move |_| {
                    let bookmarks = ctx.bookmarks();
                    let question_id = bookmark_id.clone();
                    let mut bookmarked = bookmarked;
                    spawn(async move {
                        if is_bookmarked {
                            if bookmarks.remove_bookmark(&question_id).await.is_ok() {
                                bookmarked.write().remove(&question_id);
                            }
                        } else if let Ok(bookmark) = bookmarks.add_bookmark(&question_id).await {
                            bookmarked.write().insert(bookmark.question_id().clone());
                        }
                    });
                },
                if is_bookmarked { "★" } else { "☆" }
            }
        }
    }
}
