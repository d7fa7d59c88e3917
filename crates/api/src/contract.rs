//! Contracts for the remote API, plus an in-memory fake for tests.
//!
//! The remote service is the source of truth for every entity; these traits
//! only describe the boundary. No call here retries, caches, or validates
//! tokens locally.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

use tracker_core::model::{
    Bookmark, BookmarkId, ProgressRecord, Question, QuestionId, QuestionRef, Session, Sheet,
    SheetDraft, SheetId, User, UserId,
};

/// Errors surfaced by remote-API adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(status) if *status == reqwest::StatusCode::UNAUTHORIZED)
    }

    pub(crate) fn unauthorized() -> Self {
        Self::Status(reqwest::StatusCode::UNAUTHORIZED)
    }

    pub(crate) fn not_found() -> Self {
        Self::Status(reqwest::StatusCode::NOT_FOUND)
    }
}

/// Public catalog reads. No authentication required.
#[async_trait]
pub trait SheetApi: Send + Sync {
    /// List every sheet.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the payload cannot be decoded.
    async fn list_sheets(&self) -> Result<Vec<Sheet>, ApiError>;

    /// Fetch one sheet by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (404) when the sheet does not exist.
    async fn get_sheet(&self, id: &SheetId) -> Result<Sheet, ApiError>;

    /// List the questions belonging to a sheet.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the payload cannot be decoded.
    async fn list_questions(&self, sheet_id: &SheetId) -> Result<Vec<Question>, ApiError>;
}

/// The current user's solve records. All calls carry the session bearer token.
#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// List every progress record for the token's user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected token.
    async fn list_progress(&self, token: &str) -> Result<Vec<ProgressRecord>, ApiError>;

    /// Flip the solved state of one question, creating the record on first
    /// toggle. Returns the record as the remote now sees it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected token.
    async fn toggle_solved(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<ProgressRecord, ApiError>;
}

/// The current user's bookmarks. All calls carry the session bearer token.
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// List every bookmark for the token's user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected token.
    async fn list_bookmarks(&self, token: &str) -> Result<Vec<Bookmark>, ApiError>;

    /// Bookmark a question. The remote keeps at most one bookmark per
    /// (user, question) pair.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected token.
    async fn add_bookmark(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<Bookmark, ApiError>;

    /// Remove the bookmark for a question, keyed by question ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected token.
    async fn remove_bookmark(&self, token: &str, question_id: &QuestionId)
    -> Result<(), ApiError>;
}

/// Credential exchanges. Tokens come back opaque; nothing validates them
/// client-side.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a third-party sign-in credential for a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the exchange is rejected.
    async fn google_login(&self, credential: &str) -> Result<Session, ApiError>;

    /// Authenticate an administrator. Returns the admin bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for bad credentials.
    async fn admin_login(&self, email: &str, password: &str) -> Result<String, ApiError>;
}

/// Administrative writes, gated by the admin bearer token.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Create a sheet. Returns the sheet with its remote-minted ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected admin token.
    async fn create_sheet(&self, admin_token: &str, draft: &SheetDraft)
    -> Result<Sheet, ApiError>;

    /// Delete a sheet.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected admin token.
    async fn delete_sheet(&self, admin_token: &str, id: &SheetId) -> Result<(), ApiError>;

    /// Bulk-import questions into a sheet from a server-side file. Returns
    /// the number of questions imported.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` (401) for a missing or rejected admin token.
    async fn seed_questions(
        &self,
        admin_token: &str,
        sheet_id: &SheetId,
        file_name: &str,
    ) -> Result<usize, ApiError>;
}

/// In-memory implementation of every API trait for testing and prototyping.
///
/// Accepts exactly one user token and one admin token; anything else is
/// rejected with 401, mirroring the remote's behavior closely enough for
/// service and view tests.
#[derive(Clone)]
pub struct InMemoryApi {
    inner: Arc<Mutex<InMemoryState>>,
}

struct InMemoryState {
    sheets: Vec<Sheet>,
    questions: HashMap<SheetId, Vec<Question>>,
    progress: HashMap<QuestionId, bool>,
    bookmarks: HashMap<QuestionId, BookmarkId>,
    next_id: u64,
    user_token: String,
    user: User,
    admin_email: String,
    admin_password: String,
    admin_token: String,
}

impl Default for InMemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(InMemoryState {
                sheets: Vec::new(),
                questions: HashMap::new(),
                progress: HashMap::new(),
                bookmarks: HashMap::new(),
                next_id: 1,
                user_token: "user-token".to_string(),
                user: User::new(
                    UserId::new("u1"),
                    "Test User",
                    "test@example.com",
                    None,
                ),
                admin_email: "admin@example.com".to_string(),
                admin_password: "secret".to_string(),
                admin_token: "admin-token".to_string(),
            })),
        }
    }

    /// The token `google_login` hands out, for driving authenticated calls
    /// in tests.
    #[must_use]
    pub fn user_token(&self) -> String {
        self.lock().user_token.clone()
    }

    #[must_use]
    pub fn admin_token(&self) -> String {
        self.lock().admin_token.clone()
    }

    /// Insert a sheet and its questions directly, bypassing admin auth.
    pub fn seed_sheet(&self, sheet: Sheet, questions: Vec<Question>) {
        let mut state = self.lock();
        state.questions.insert(sheet.id().clone(), questions);
        state.sheets.push(sheet);
    }

    /// Mark a question solved/unsolved directly, bypassing the toggle.
    pub fn seed_progress(&self, question_id: QuestionId, is_solved: bool) {
        self.lock().progress.insert(question_id, is_solved);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_user(state: &InMemoryState, token: &str) -> Result<(), ApiError> {
        if token == state.user_token {
            Ok(())
        } else {
            Err(ApiError::unauthorized())
        }
    }

    fn check_admin(state: &InMemoryState, token: &str) -> Result<(), ApiError> {
        if token == state.admin_token {
            Ok(())
        } else {
            Err(ApiError::unauthorized())
        }
    }

    fn find_question(state: &InMemoryState, id: &QuestionId) -> Option<Question> {
        state
            .questions
            .values()
            .flatten()
            .find(|question| question.id() == id)
            .cloned()
    }
}

#[async_trait]
impl SheetApi for InMemoryApi {
    async fn list_sheets(&self) -> Result<Vec<Sheet>, ApiError> {
        Ok(self.lock().sheets.clone())
    }

    async fn get_sheet(&self, id: &SheetId) -> Result<Sheet, ApiError> {
        self.lock()
            .sheets
            .iter()
            .find(|sheet| sheet.id() == id)
            .cloned()
            .ok_or_else(ApiError::not_found)
    }

    async fn list_questions(&self, sheet_id: &SheetId) -> Result<Vec<Question>, ApiError> {
        Ok(self
            .lock()
            .questions
            .get(sheet_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProgressApi for InMemoryApi {
    async fn list_progress(&self, token: &str) -> Result<Vec<ProgressRecord>, ApiError> {
        let state = self.lock();
        Self::check_user(&state, token)?;
        Ok(state
            .progress
            .iter()
            .map(|(question_id, is_solved)| {
                ProgressRecord::new(QuestionRef::Bare(question_id.clone()), *is_solved, None)
            })
            .collect())
    }

    async fn toggle_solved(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<ProgressRecord, ApiError> {
        let mut state = self.lock();
        Self::check_user(&state, token)?;
        let entry = state.progress.entry(question_id.clone()).or_insert(false);
        *entry = !*entry;
        let is_solved = *entry;
        Ok(ProgressRecord::new(
            QuestionRef::Bare(question_id.clone()),
            is_solved,
            None,
        ))
    }
}

#[async_trait]
impl BookmarkApi for InMemoryApi {
    async fn list_bookmarks(&self, token: &str) -> Result<Vec<Bookmark>, ApiError> {
        let state = self.lock();
        Self::check_user(&state, token)?;
        Ok(state
            .bookmarks
            .iter()
            .map(|(question_id, bookmark_id)| {
                let question = Self::find_question(&state, question_id).map_or_else(
                    || QuestionRef::Bare(question_id.clone()),
                    QuestionRef::Populated,
                );
                Bookmark::new(bookmark_id.clone(), question)
            })
            .collect())
    }

    async fn add_bookmark(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<Bookmark, ApiError> {
        let mut state = self.lock();
        Self::check_user(&state, token)?;
        let bookmark_id = if let Some(existing) = state.bookmarks.get(question_id) {
            existing.clone()
        } else {
            let id = BookmarkId::new(format!("b{}", state.next_id));
            state.next_id += 1;
            state.bookmarks.insert(question_id.clone(), id.clone());
            id
        };
        let question = Self::find_question(&state, question_id).map_or_else(
            || QuestionRef::Bare(question_id.clone()),
            QuestionRef::Populated,
        );
        Ok(Bookmark::new(bookmark_id, question))
    }

    async fn remove_bookmark(
        &self,
        token: &str,
        question_id: &QuestionId,
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        Self::check_user(&state, token)?;
        state.bookmarks.remove(question_id);
        Ok(())
    }
}

#[async_trait]
impl AuthApi for InMemoryApi {
    async fn google_login(&self, _credential: &str) -> Result<Session, ApiError> {
        let state = self.lock();
        Ok(Session::authenticated(
            state.user_token.clone(),
            state.user.clone(),
        ))
    }

    async fn admin_login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let state = self.lock();
        if email == state.admin_email && password == state.admin_password {
            Ok(state.admin_token.clone())
        } else {
            Err(ApiError::unauthorized())
        }
    }
}

#[async_trait]
impl AdminApi for InMemoryApi {
    async fn create_sheet(
        &self,
        admin_token: &str,
        draft: &SheetDraft,
    ) -> Result<Sheet, ApiError> {
        let mut state = self.lock();
        Self::check_admin(&state, admin_token)?;
        let id = SheetId::new(format!("s{}", state.next_id));
        state.next_id += 1;
        let sheet = Sheet::new(
            id.clone(),
            draft.title(),
            draft.description().map(str::to_owned),
            draft.image().map(str::to_owned),
            draft.difficulty().map(str::to_owned),
        )
        .map_err(|err| ApiError::Decode(err.to_string()))?;
        state.questions.insert(id, Vec::new());
        state.sheets.push(sheet.clone());
        Ok(sheet)
    }

    async fn delete_sheet(&self, admin_token: &str, id: &SheetId) -> Result<(), ApiError> {
        let mut state = self.lock();
        Self::check_admin(&state, admin_token)?;
        state.sheets.retain(|sheet| sheet.id() != id);
        state.questions.remove(id);
        Ok(())
    }

    async fn seed_questions(
        &self,
        admin_token: &str,
        sheet_id: &SheetId,
        _file_name: &str,
    ) -> Result<usize, ApiError> {
        let state = self.lock();
        Self::check_admin(&state, admin_token)?;
        if state.sheets.iter().any(|sheet| sheet.id() == sheet_id) {
            Ok(0)
        } else {
            Err(ApiError::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::model::Difficulty;

    fn sheet(id: &str, title: &str) -> Sheet {
        Sheet::new(SheetId::new(id), title, None, None, None).unwrap()
    }

    fn question(id: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}"),
            vec!["Arrays".into()],
            Difficulty::Easy,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn toggle_creates_then_flips() {
        let api = InMemoryApi::new();
        let token = api.user_token();
        let qid = QuestionId::new("q1");

        let first = api.toggle_solved(&token, &qid).await.unwrap();
        assert!(first.is_solved());

        let second = api.toggle_solved(&token, &qid).await.unwrap();
        assert!(!second.is_solved());
    }

    #[tokio::test]
    async fn progress_calls_reject_unknown_token() {
        let api = InMemoryApi::new();
        let err = api.list_progress("bogus").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn bookmark_is_unique_per_question() {
        let api = InMemoryApi::new();
        api.seed_sheet(sheet("s1", "Sheet"), vec![question("q1")]);
        let token = api.user_token();
        let qid = QuestionId::new("q1");

        let first = api.add_bookmark(&token, &qid).await.unwrap();
        let second = api.add_bookmark(&token, &qid).await.unwrap();
        assert_eq!(first.id(), second.id());

        api.remove_bookmark(&token, &qid).await.unwrap();
        assert!(api.list_bookmarks(&token).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bookmarks_carry_populated_questions_when_known() {
        let api = InMemoryApi::new();
        api.seed_sheet(sheet("s1", "Sheet"), vec![question("q1")]);
        let token = api.user_token();

        api.add_bookmark(&token, &QuestionId::new("q1"))
            .await
            .unwrap();
        let bookmarks = api.list_bookmarks(&token).await.unwrap();
        assert!(bookmarks[0].question_ref().question().is_some());
    }

    #[tokio::test]
    async fn admin_login_then_create_and_delete_sheet() {
        let api = InMemoryApi::new();
        let admin = api
            .admin_login("admin@example.com", "secret")
            .await
            .unwrap();

        let draft = SheetDraft::new("New Sheet", None, None, None).unwrap();
        let created = api.create_sheet(&admin, &draft).await.unwrap();
        assert_eq!(api.list_sheets().await.unwrap().len(), 1);

        api.delete_sheet(&admin, created.id()).await.unwrap();
        assert!(api.list_sheets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn admin_ops_reject_user_token() {
        let api = InMemoryApi::new();
        let draft = SheetDraft::new("New Sheet", None, None, None).unwrap();
        let err = api
            .create_sheet(&api.user_token(), &draft)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }
}
