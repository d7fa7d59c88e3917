use dioxus::prelude::*;

use tracker_core::model::SheetDraft;

use crate::context::AppContext;
use crate::views::admin::AdminGate;

#[component]
pub fn AdminCreateSheetView() -> Element {
    rsx! {
        AdminGate {
            CreateSheetBody {}
        }
    }
}

fn optional(value: &Signal<String>) -> Option<String> {
    let raw = value.read().trim().to_owned();
    (!raw.is_empty()).then_some(raw)
}

#[component]
fn CreateSheetBody() -> Element {
    let ctx = use_context::<AppContext>();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut difficulty = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let admin = ctx.admin();
        let draft = match SheetDraft::new(
            title.read().clone(),
            optional(&description),
            optional(&image),
            optional(&difficulty),
        ) {
            Ok(draft) => draft,
            Err(err) => {
                notice.set(Some(err.to_string()));
                return;
            }
        };
        busy.set(true);
        spawn(async move {
            match admin.create_sheet(&draft).await {
                Ok(sheet) => {
                    notice.set(Some(format!("Created \"{}\".", sheet.title())));
                    title.set(String::new());
                    description.set(String::new());
                    image.set(String::new());
                    difficulty.set(String::new());
                }
                Err(_) => {
                    notice.set(Some("Creating the sheet failed.".to_owned()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Create Sheet" }

            div { class: "form",
                label { r#for: "sheet-title", "Title" }
                input {
                    id: "sheet-title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                label { r#for: "sheet-description", "Description (optional)" }
                textarea {
                    id: "sheet-description",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                label { r#for: "sheet-image", "Image URL (optional)" }
                input {
                    id: "sheet-image",
                    value: "{image}",
                    oninput: move |evt| image.set(evt.value()),
                }
                label { r#for: "sheet-difficulty", "Difficulty (optional)" }
                input {
                    id: "sheet-difficulty",
                    placeholder: "Easy / Medium / Hard",
                    value: "{difficulty}",
                    oninput: move |evt| difficulty.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Creating..." } else { "Create sheet" }
                }
                if let Some(message) = notice() {
                    p { class: "notice", "{message}" }
                }
            }
        }
    }
}
