use std::sync::Arc;

use api::BookmarkApi;
use tracker_core::model::{Bookmark, QuestionId};

use crate::error::BookmarkServiceError;
use crate::session_service::SessionService;

/// The current user's bookmarks, keyed by question for both add and remove.
pub struct BookmarkService {
    bookmarks: Arc<dyn BookmarkApi>,
    sessions: Arc<SessionService>,
}

impl BookmarkService {
    #[must_use]
    pub fn new(bookmarks: Arc<dyn BookmarkApi>, sessions: Arc<SessionService>) -> Self {
        Self {
            bookmarks,
            sessions,
        }
    }

    /// List every bookmark for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `BookmarkServiceError::NotSignedIn` without touching the
    /// network when there is no session.
    pub async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkServiceError> {
        let token = self.token()?;
        Ok(self.bookmarks.list_bookmarks(&token).await?)
    }

    /// Bookmark a question. Re-bookmarking an already-bookmarked question
    /// returns the existing bookmark.
    ///
    /// # Errors
    ///
    /// Returns `BookmarkServiceError::NotSignedIn` without touching the
    /// network when there is no session.
    pub async fn add_bookmark(
        &self,
        question_id: &QuestionId,
    ) -> Result<Bookmark, BookmarkServiceError> {
        let token = self.token()?;
        Ok(self.bookmarks.add_bookmark(&token, question_id).await?)
    }

    /// Remove the bookmark for a question.
    ///
    /// # Errors
    ///
    /// Returns `BookmarkServiceError::NotSignedIn` without touching the
    /// network when there is no session.
    pub async fn remove_bookmark(
        &self,
        question_id: &QuestionId,
    ) -> Result<(), BookmarkServiceError> {
        let token = self.token()?;
        Ok(self.bookmarks.remove_bookmark(&token, question_id).await?)
    }

    fn token(&self) -> Result<String, BookmarkServiceError> {
        self.sessions
            .token()
            .ok_or(BookmarkServiceError::NotSignedIn)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use api::{InMemoryApi, MemoryVault};
    use tracker_core::model::{User, UserId};

    #[tokio::test]
    async fn anonymous_calls_fail_fast() {
        let api = InMemoryApi::new();
        let sessions = Arc::new(SessionService::new(Arc::new(MemoryVault::new())));
        let service = BookmarkService::new(Arc::new(api), sessions);

        let err = service.list_bookmarks().await.unwrap_err();
        assert!(matches!(err, BookmarkServiceError::NotSignedIn));
    }

    #[tokio::test]
    async fn add_then_remove_round_trips() {
        let api = InMemoryApi::new();
        let sessions = Arc::new(SessionService::new(Arc::new(MemoryVault::new())));
        sessions
            .login(
                &api.user_token(),
                User::new(UserId::new("u1"), "Ada", "ada@example.com", None),
            )
            .unwrap();
        let service = BookmarkService::new(Arc::new(api), sessions);
        let qid = QuestionId::new("q1");

        service.add_bookmark(&qid).await.unwrap();
        assert_eq!(service.list_bookmarks().await.unwrap().len(), 1);

        service.remove_bookmark(&qid).await.unwrap();
        assert!(service.list_bookmarks().await.unwrap().is_empty());
    }
}
