//! HTTP implementation of the remote-API contracts.
//!
//! One fixed base origin, plain request/response, no retries and no request
//! timeouts; a hung remote call hangs the caller's loading state. Failures
//! are logged at `warn` and propagated as `ApiError`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::warn;

use tracker_core::model::{
    Bookmark, ProgressRecord, Question, QuestionId, Session, Sheet, SheetDraft, SheetId,
};

use crate::contract::{AdminApi, ApiError, AuthApi, BookmarkApi, ProgressApi, SheetApi};
use crate::wire::{
    BookmarkDto, BookmarkEnvelope, BookmarksEnvelope, ImportEnvelope, LoginEnvelope,
    ProgressDto, ProgressEnvelope, ProgressListEnvelope, QuestionDto, QuestionsEnvelope,
    SheetDto, SheetEnvelope, SheetsEnvelope, TokenEnvelope,
};

/// Default origin of the hosted tracker API.
pub const DEFAULT_BASE_URL: &str = "https://dsa-tracker-0exz.onrender.com";

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn ensure_success(path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(%path, %status, "remote api call failed");
            Err(ApiError::Status(status))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = Self::ensure_success(path, request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = Self::ensure_success(path, request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.url(path)).bearer_auth(token);
        Self::ensure_success(path, request.send().await?).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct GoogleLoginBody<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct AdminLoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct QuestionIdBody<'a> {
    #[serde(rename = "questionId")]
    question_id: &'a str,
}

#[derive(Serialize)]
struct CreateSheetBody<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<&'a str>,
}

#[derive(Serialize)]
struct SeedBody<'a> {
    #[serde(rename = "sheetId")]
    sheet_id: &'a str,
    #[serde(rename = "fileName")]
    file_name: &'a str,
}

#[async_trait]
impl SheetApi for HttpApi {
    async fn list_sheets(&self) -> Result<Vec<Sheet>, ApiError> {
        let envelope: SheetsEnvelope = self.get_json("/api/sheets", None).await?;
        envelope
            .sheets
            .into_iter()
            .map(SheetDto::into_sheet)
            .collect()
    }

    async fn get_sheet(&self, id: &SheetId) -> Result<Sheet, ApiError> {
        let envelope: SheetEnvelope = self
            .get_json(&format!("/api/sheets/{id}"), None)
            .await?;
        envelope.sheet.into_sheet()
    }

    async fn list_questions(&self, sheet_id: &SheetId) -> Result<Vec<Question>, ApiError> {
        let envelope: QuestionsEnvelope = self
            .get_json(&format!("/api/questions/{sheet_id}"), None)
            .await?;
        envelope
            .questions
            .into_iter()
            .map(QuestionDto::into_question)
            .collect()
    }
}

#[async_trait]
impl ProgressApi for HttpApi {
    async fn list_progress(&self, token: &str) -> Result<Vec<ProgressRecord>, ApiError> {
        let envelope: ProgressListEnvelope =
            self.get_json("/api/progress", Some(token)).await?;
        envelope
            .progress
            .into_iter()
            .map(ProgressDto::into_record)
            .collect()
    }

    async fn toggle_solved(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<ProgressRecord, ApiError> {
        let body = QuestionIdBody {
            question_id: question_id.as_str(),
        };
        let envelope: ProgressEnvelope = self
            .post_json("/api/progress", Some(token), &body)
            .await?;
        envelope.progress.into_record()
    }
}

#[async_trait]
impl BookmarkApi for HttpApi {
    async fn list_bookmarks(&self, token: &str) -> Result<Vec<Bookmark>, ApiError> {
        let envelope: BookmarksEnvelope =
            self.get_json("/api/bookmarks", Some(token)).await?;
        envelope
            .bookmarks
            .into_iter()
            .map(BookmarkDto::into_bookmark)
            .collect()
    }

    async fn add_bookmark(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<Bookmark, ApiError> {
        let body = QuestionIdBody {
            question_id: question_id.as_str(),
        };
        let envelope: BookmarkEnvelope = self
            .post_json("/api/bookmarks", Some(token), &body)
            .await?;
        envelope.bookmark.into_bookmark()
    }

    async fn remove_bookmark(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/api/bookmarks/{question_id}"), token)
            .await
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn google_login(&self, credential: &str) -> Result<Session, ApiError> {
        let body = GoogleLoginBody { token: credential };
        let envelope: LoginEnvelope = self
            .post_json("/api/auth/google-login", None, &body)
            .await?;
        Ok(envelope.into_session())
    }

    async fn admin_login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = AdminLoginBody { email, password };
        let envelope: TokenEnvelope =
            self.post_json("/api/admin/login", None, &body).await?;
        Ok(envelope.token)
    }
}

#[async_trait]
impl AdminApi for HttpApi {
    async fn create_sheet(
        &self,
        admin_token: &str,
        draft: &SheetDraft,
    ) -> Result<Sheet, ApiError> {
        let body = CreateSheetBody {
            title: draft.title(),
            description: draft.description(),
            image: draft.image(),
            difficulty: draft.difficulty(),
        };
        let envelope: SheetEnvelope = self
            .post_json("/api/sheets", Some(admin_token), &body)
            .await?;
        envelope.sheet.into_sheet()
    }

    async fn delete_sheet(&self, admin_token: &str, id: &SheetId) -> Result<(), ApiError> {
        self.delete(&format!("/api/sheets/{id}"), admin_token).await
    }

    async fn seed_questions(
        &self,
        admin_token: &str,
        sheet_id: &SheetId,
        file_name: &str,
    ) -> Result<usize, ApiError> {
        let body = SeedBody {
            sheet_id: sheet_id.as_str(),
            file_name,
        };
        let envelope: ImportEnvelope = self
            .post_json("/api/questions/seed-from-file", Some(admin_token), &body)
            .await?;
        Ok(envelope.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubling_slashes() {
        let api = HttpApi::new("https://example.com/");
        assert_eq!(api.url("/api/sheets"), "https://example.com/api/sheets");
    }
}
