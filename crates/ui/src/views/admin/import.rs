use dioxus::prelude::*;

use tracker_core::model::SheetId;

use crate::context::AppContext;
use crate::views::admin::AdminGate;

#[component]
pub fn AdminImportView() -> Element {
    rsx! {
        AdminGate {
            ImportBody {}
        }
    }
}

#[component]
fn ImportBody() -> Element {
    let ctx = use_context::<AppContext>();

    let mut sheet_id = use_signal(String::new);
    let mut file_name = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let admin = ctx.admin();
        let sheet = sheet_id.read().trim().to_owned();
        let file = file_name.read().trim().to_owned();
        if sheet.is_empty() || file.is_empty() {
            notice.set(Some("Enter both a sheet ID and a file name.".to_owned()));
            return;
        }
        busy.set(true);
        spawn(async move {
            match admin.import_questions(&SheetId::new(sheet), &file).await {
                Ok(count) => {
                    notice.set(Some(format!("Imported {count} questions.")));
                }
                Err(_) => {
                    notice.set(Some("Import failed. Check the sheet ID and file name.".to_owned()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Import Questions" }
            p { "Import questions into a sheet from a file already uploaded to the server." }

            div { class: "form",
                label { r#for: "import-sheet", "Sheet ID" }
                input {
                    id: "import-sheet",
                    value: "{sheet_id}",
                    oninput: move |evt| sheet_id.set(evt.value()),
                }
                label { r#for: "import-file", "Server file name" }
                input {
                    id: "import-file",
                    placeholder: "questions.json",
                    value: "{file_name}",
                    oninput: move |evt| file_name.set(evt.value()),
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Importing..." } else { "Import" }
                }
                if let Some(message) = notice() {
                    p { class: "notice", "{message}" }
                }
            }
        }
    }
}
