//! Wire shapes for the remote API.
//!
//! The remote's payloads are loose in a few specific ways: entity IDs arrive
//! as `_id`, a question reference is either a bare ID string or a populated
//! object, a question carries `topics[]` or a single `topic` or neither, and
//! the user's picture may sit under any of three field names. Everything is
//! normalized here, once, so the domain model never sees those shapes.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use url::Url;

use tracker_core::model::{
    Bookmark, BookmarkId, ProgressRecord, Question, QuestionId, QuestionRef, Session, Sheet,
    SheetId, User, UserId,
};

use crate::contract::ApiError;

fn decode_err(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

// ─── Entities ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct SheetDto {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

impl SheetDto {
    pub(crate) fn into_sheet(self) -> Result<Sheet, ApiError> {
        Sheet::new(
            SheetId::new(self.id),
            self.title,
            self.description,
            self.image,
            self.difficulty,
        )
        .map_err(decode_err)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionDto {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    topics: Option<Vec<String>>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(rename = "practiceLink", default)]
    practice_link: Option<String>,
}

impl QuestionDto {
    pub(crate) fn into_question(self) -> Result<Question, ApiError> {
        // `topics[]` wins over a lone `topic`; neither means the aggregator
        // buckets the question under "Other".
        let topics = self
            .topics
            .or_else(|| self.topic.map(|topic| vec![topic]))
            .unwrap_or_default();
        let difficulty = self
            .difficulty
            .as_deref()
            .map_or(tracker_core::model::Difficulty::Unknown, |raw| {
                tracker_core::model::Difficulty::parse(raw)
            });
        // A malformed link degrades to no link rather than failing the list.
        let practice_link = self
            .practice_link
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok());

        Question::new(
            QuestionId::new(self.id),
            self.title,
            topics,
            difficulty,
            practice_link,
        )
        .map_err(decode_err)
    }
}

/// A `questionId` field: bare hex ID or populated question object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum QuestionRefDto {
    Bare(String),
    Populated(QuestionDto),
}

impl QuestionRefDto {
    pub(crate) fn into_question_ref(self) -> Result<QuestionRef, ApiError> {
        match self {
            Self::Bare(id) => Ok(QuestionRef::Bare(QuestionId::new(id))),
            Self::Populated(dto) => Ok(QuestionRef::Populated(dto.into_question()?)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressDto {
    #[serde(rename = "questionId")]
    question: QuestionRefDto,
    #[serde(rename = "isSolved", default)]
    is_solved: bool,
    #[serde(rename = "lastAttempted", default)]
    last_attempted: Option<DateTime<Utc>>,
}

impl ProgressDto {
    pub(crate) fn into_record(self) -> Result<ProgressRecord, ApiError> {
        Ok(ProgressRecord::new(
            self.question.into_question_ref()?,
            self.is_solved,
            self.last_attempted,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookmarkDto {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "questionId")]
    question: QuestionRefDto,
}

impl BookmarkDto {
    pub(crate) fn into_bookmark(self) -> Result<Bookmark, ApiError> {
        Ok(Bookmark::new(
            BookmarkId::new(self.id),
            self.question.into_question_ref()?,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDto {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(rename = "profilePic", default)]
    profile_pic: Option<String>,
}

impl UserDto {
    pub(crate) fn into_user(self) -> User {
        // The one place the three picture spellings are reconciled.
        let avatar = self.picture.or(self.avatar).or(self.profile_pic);
        User::new(
            UserId::new(self.id),
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            avatar,
        )
    }
}

// ─── Envelopes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct SheetsEnvelope {
    pub(crate) sheets: Vec<SheetDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SheetEnvelope {
    pub(crate) sheet: SheetDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsEnvelope {
    pub(crate) questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressListEnvelope {
    pub(crate) progress: Vec<ProgressDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressEnvelope {
    pub(crate) progress: ProgressDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookmarksEnvelope {
    pub(crate) bookmarks: Vec<BookmarkDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookmarkEnvelope {
    pub(crate) bookmark: BookmarkDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginEnvelope {
    token: String,
    user: UserDto,
}

impl LoginEnvelope {
    pub(crate) fn into_session(self) -> Session {
        Session::authenticated(self.token, self.user.into_user())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenEnvelope {
    pub(crate) token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportEnvelope {
    #[serde(default)]
    pub(crate) count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::model::Difficulty;

    #[test]
    fn question_with_topics_array_keeps_all_topics() {
        let dto: QuestionDto = serde_json::from_str(
            r#"{"_id":"q1","title":"Two Sum","topics":["Arrays","Hashing"],"difficulty":"Easy","practiceLink":"https://leetcode.com/problems/two-sum/"}"#,
        )
        .unwrap();
        let question = dto.into_question().unwrap();
        assert_eq!(question.topics().len(), 2);
        assert_eq!(question.difficulty(), Difficulty::Easy);
        assert!(question.practice_link().is_some());
    }

    #[test]
    fn question_with_single_topic_is_coalesced() {
        let dto: QuestionDto =
            serde_json::from_str(r#"{"_id":"q2","title":"LRU Cache","topic":"Design"}"#).unwrap();
        let question = dto.into_question().unwrap();
        assert_eq!(question.topics(), ["Design".to_string()]);
        assert_eq!(question.difficulty(), Difficulty::Unknown);
    }

    #[test]
    fn question_without_topic_field_has_no_topics() {
        let dto: QuestionDto =
            serde_json::from_str(r#"{"_id":"q3","title":"Untagged"}"#).unwrap();
        let question = dto.into_question().unwrap();
        assert!(question.topics().is_empty());
    }

    #[test]
    fn malformed_practice_link_degrades_to_none() {
        let dto: QuestionDto = serde_json::from_str(
            r#"{"_id":"q4","title":"Bad Link","practiceLink":"not a url"}"#,
        )
        .unwrap();
        assert!(dto.into_question().unwrap().practice_link().is_none());
    }

    #[test]
    fn progress_accepts_bare_question_id() {
        let dto: ProgressDto =
            serde_json::from_str(r#"{"questionId":"q1","isSolved":true}"#).unwrap();
        let record = dto.into_record().unwrap();
        assert_eq!(record.question_id(), &QuestionId::new("q1"));
        assert!(record.is_solved());
    }

    #[test]
    fn progress_accepts_populated_question() {
        let dto: ProgressDto = serde_json::from_str(
            r#"{"questionId":{"_id":"q1","title":"Two Sum"},"isSolved":false,"lastAttempted":"2023-11-14T22:13:20Z"}"#,
        )
        .unwrap();
        let record = dto.into_record().unwrap();
        assert_eq!(record.question_id(), &QuestionId::new("q1"));
        assert!(!record.is_solved());
        assert!(record.last_attempted().is_some());
    }

    #[test]
    fn bookmark_with_populated_question_exposes_it() {
        let dto: BookmarkDto = serde_json::from_str(
            r#"{"_id":"b1","questionId":{"_id":"q1","title":"Two Sum","difficulty":"Easy"}}"#,
        )
        .unwrap();
        let bookmark = dto.into_bookmark().unwrap();
        assert_eq!(bookmark.question_id(), &QuestionId::new("q1"));
        assert!(bookmark.question_ref().question().is_some());
    }

    #[test]
    fn user_avatar_coalesces_all_three_spellings() {
        for body in [
            r#"{"_id":"u1","name":"Ada","email":"a@x.com","picture":"https://img/p"}"#,
            r#"{"_id":"u1","name":"Ada","email":"a@x.com","avatar":"https://img/p"}"#,
            r#"{"_id":"u1","name":"Ada","email":"a@x.com","profilePic":"https://img/p"}"#,
        ] {
            let dto: UserDto = serde_json::from_str(body).unwrap();
            assert_eq!(dto.into_user().avatar(), Some("https://img/p"));
        }
    }

    #[test]
    fn user_without_picture_has_no_avatar() {
        let dto: UserDto =
            serde_json::from_str(r#"{"_id":"u1","name":"Ada","email":"a@x.com"}"#).unwrap();
        assert_eq!(dto.into_user().avatar(), None);
    }

    #[test]
    fn login_envelope_builds_an_authenticated_session() {
        let envelope: LoginEnvelope = serde_json::from_str(
            r#"{"token":"tok-1","user":{"_id":"u1","name":"Ada","email":"a@x.com"}}"#,
        )
        .unwrap();
        let session = envelope.into_session();
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.user().unwrap().name(), "Ada");
    }
}
