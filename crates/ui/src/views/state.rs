use dioxus::prelude::*;
use dioxus_router::Link;

use services::{
    AdminServiceError, BookmarkServiceError, ProgressServiceError, SheetServiceError,
};

use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotSignedIn,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotSignedIn => "Sign in to see this page.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SheetServiceError> for ViewError {
    fn from(_: SheetServiceError) -> Self {
        Self::Unknown
    }
}

impl From<ProgressServiceError> for ViewError {
    fn from(err: ProgressServiceError) -> Self {
        match err {
            ProgressServiceError::NotSignedIn => Self::NotSignedIn,
            _ => Self::Unknown,
        }
    }
}

impl From<BookmarkServiceError> for ViewError {
    fn from(err: BookmarkServiceError) -> Self {
        match err {
            BookmarkServiceError::NotSignedIn => Self::NotSignedIn,
            _ => Self::Unknown,
        }
    }
}

impl From<AdminServiceError> for ViewError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::NotLoggedIn => Self::NotSignedIn,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Inline error fallback. Unauthorized views point at the login page;
/// anything else gets a manual Retry (never an automatic one).
#[component]
pub fn ErrorNotice(err: ViewError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "error-box",
            p { class: "error", "{err.message()}" }
            if err == ViewError::NotSignedIn {
                Link { class: "button", to: Route::Login {}, "Go to sign in" }
            } else {
                button {
                    class: "button button-secondary",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
