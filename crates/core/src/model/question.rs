use std::fmt;

use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,
}

/// Difficulty rating as reported by the remote API.
///
/// The remote sends free-form strings; anything unrecognized maps to
/// `Unknown` rather than failing ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    /// Parses a difficulty label case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A practice question belonging to exactly one sheet.
///
/// A question may carry zero or more topics; the wire boundary coalesces the
/// remote's single-`topic` and `topics[]` shapes into one vector before this
/// constructor runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    topics: Vec<String>,
    difficulty: Difficulty,
    practice_link: Option<Url>,
}

impl Question {
    /// Creates a new Question.
    ///
    /// Empty or whitespace-only topic entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        topics: Vec<String>,
        difficulty: Difficulty,
        practice_link: Option<Url>,
    ) -> Result<Self, QuestionError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }

        let topics = topics
            .into_iter()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            topics,
            difficulty,
            practice_link,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn practice_link(&self) -> Option<&Url> {
        self.practice_link.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_new_rejects_empty_title() {
        let err = Question::new(
            QuestionId::new("q1"),
            "  ",
            vec![],
            Difficulty::Easy,
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyTitle);
    }

    #[test]
    fn question_drops_blank_topics() {
        let q = Question::new(
            QuestionId::new("q1"),
            "Two Sum",
            vec!["Arrays".into(), "  ".into(), "Hashing".into()],
            Difficulty::Easy,
            None,
        )
        .unwrap();
        assert_eq!(q.topics(), ["Arrays".to_string(), "Hashing".to_string()]);
    }

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(" medium "), Difficulty::Medium);
        assert_eq!(Difficulty::parse("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse("insane"), Difficulty::Unknown);
    }
}
