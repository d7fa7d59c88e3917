use std::sync::Arc;

use tracing::debug;

use api::ProgressApi;
use tracker_core::model::{ProgressRecord, QuestionId};

use crate::error::ProgressServiceError;
use crate::session_service::SessionService;

/// The current user's solve records. Every call reads the bearer token from
/// the session store at call time, so a sign-out between calls is picked up
/// immediately.
pub struct ProgressService {
    progress: Arc<dyn ProgressApi>,
    sessions: Arc<SessionService>,
}

impl ProgressService {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressApi>, sessions: Arc<SessionService>) -> Self {
        Self { progress, sessions }
    }

    /// List every progress record for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::NotSignedIn` without touching the
    /// network when there is no session.
    pub async fn list_progress(&self) -> Result<Vec<ProgressRecord>, ProgressServiceError> {
        let token = self.token()?;
        Ok(self.progress.list_progress(&token).await?)
    }

    /// Flip the solved state of one question and return the record as the
    /// remote now sees it. The first toggle for a question creates its
    /// record as solved.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::NotSignedIn` without touching the
    /// network when there is no session.
    pub async fn toggle_solved(
        &self,
        question_id: &QuestionId,
    ) -> Result<ProgressRecord, ProgressServiceError> {
        let token = self.token()?;
        let record = self.progress.toggle_solved(&token, question_id).await?;
        debug!(question = %question_id, solved = record.is_solved(), "toggled");
        Ok(record)
    }

    fn token(&self) -> Result<String, ProgressServiceError> {
        self.sessions
            .token()
            .ok_or(ProgressServiceError::NotSignedIn)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
