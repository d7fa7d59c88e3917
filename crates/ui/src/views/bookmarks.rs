use dioxus::prelude::*;

use tracker_core::model::QuestionId;

use crate::context::AppContext;
use crate::views::{ErrorNotice, ViewError, ViewState, view_state_from_resource};
use crate::vm::difficulty_class;

#[derive(Clone, Debug, PartialEq)]
struct BookmarkRowVm {
    question_id: QuestionId,
    title: String,
    difficulty: Option<(&'static str, &'static str)>,
    practice_link: Option<String>,
}

#[component]
pub fn BookmarksView() -> Element {
    let ctx = use_context::<AppContext>();
    let ctx_for_load = ctx.clone();

    // The fetch seeds the row list; a successful Remove prunes it in place
    // rather than re-fetching.
    let rows = use_signal(Vec::<BookmarkRowVm>::new);

    let mut resource = use_resource(move || {
        let bookmarks = ctx_for_load.bookmarks();
        let mut rows = rows;

        async move {
            let list = bookmarks.list_bookmarks().await.map_err(ViewError::from)?;
            let mapped = list
                .iter()
                .map(|bookmark| {
                    // Bare references still render, keyed by ID, so a
                    // bookmark never disappears just because the remote
                    // skipped population.
                    let question = bookmark.question_ref().question();
                    BookmarkRowVm {
                        question_id: bookmark.question_id().clone(),
                        title: question.map_or_else(
                            || format!("Question {}", bookmark.question_id()),
                            |q| q.title().to_owned(),
                        ),
                        difficulty: question.map(|q| {
                            (q.difficulty().label(), difficulty_class(q.difficulty()))
                        }),
                        practice_link: question
                            .and_then(|q| q.practice_link())
                            .map(ToString::to_string),
                    }
                })
                .collect::<Vec<_>>();
            rows.set(mapped);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Bookmarks" }

            match state {
                ViewState::Idle => rsx! { p { "Idle" } },
                ViewState::Loading => rsx! { p { "Loading..." } },
                ViewState::Ready(()) => rsx! {
                    if rows.read().is_empty() {
                        p { "Nothing bookmarked yet. Star a question from any sheet." }
                    } else {
                        ul { class: "question-list",
                            for row in rows.read().clone() {
                                li { class: "question",
                                    span { class: "question-title", "{row.title}" }
                                    if let Some((label, class)) = row.difficulty {
                                        span { class: "{class}", "{label}" }
                                    }
                                    if let Some(link) = row.practice_link.clone() {
                                        a { class: "practice-link", href: "{link}", "Practice" }
                                    }
                                    button {
                                        class: "button button-secondary",
                                        onclick: {
                                            let ctx = ctx.clone();
                                            let question_id = row.question_id.clone();
                                            move |_| {
                                                let bookmarks = ctx.bookmarks();
                                                let question_id = question_id.clone();
                                                let mut rows = rows;
                                                spawn(async move {
                                                    if bookmarks.remove_bookmark(&question_id).await.is_ok() {
                                                        rows.write().retain(|row| row.question_id != question_id);
                                                    }
                                                });
                                            }
                                        },
                                        "Remove"
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
