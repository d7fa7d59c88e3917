use chrono::{DateTime, Utc};

use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// How a progress or bookmark record points at its question.
///
/// The remote API sometimes returns a bare identifier and sometimes a
/// populated question object for the same field. Every lookup must go
/// through `question_id()` so the two shapes are indistinguishable to
/// callers.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionRef {
    Bare(QuestionId),
    Populated(Question),
}

impl QuestionRef {
    /// The canonical comparable key for this reference.
    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        match self {
            Self::Bare(id) => id,
            Self::Populated(question) => question.id(),
        }
    }

    /// The populated question, when the remote sent one.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Bare(_) => None,
            Self::Populated(question) => Some(question),
        }
    }
}

/// One user's solve state for one question. At most one record exists per
/// (user, question) pair; the remote API enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    question: QuestionRef,
    is_solved: bool,
    last_attempted: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(
        question: QuestionRef,
        is_solved: bool,
        last_attempted: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            question,
            is_solved,
            last_attempted,
        }
    }

    #[must_use]
    pub fn question_ref(&self) -> &QuestionRef {
        &self.question
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        self.question.question_id()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_solved
    }

    #[must_use]
    pub fn last_attempted(&self) -> Option<DateTime<Utc>> {
        self.last_attempted
    }
}
