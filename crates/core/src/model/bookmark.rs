use crate::model::ids::{BookmarkId, QuestionId};
use crate::model::progress::QuestionRef;

/// A saved question. One bookmark per (user, question) pair, enforced
/// remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    id: BookmarkId,
    question: QuestionRef,
}

impl Bookmark {
    #[must_use]
    pub fn new(id: BookmarkId, question: QuestionRef) -> Self {
        Self { id, question }
    }

    #[must_use]
    pub fn id(&self) -> &BookmarkId {
        &self.id
    }

    #[must_use]
    pub fn question_ref(&self) -> &QuestionRef {
        &self.question
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        self.question.question_id()
    }
}
