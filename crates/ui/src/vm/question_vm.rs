use std::collections::{HashMap, HashSet};

use tracker_core::model::{Difficulty, ProgressRecord, Question, QuestionId};
use tracker_core::progress::questions_by_topic;

/// CSS class for the difficulty badge.
#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge-easy",
        Difficulty::Medium => "badge badge-medium",
        Difficulty::Hard => "badge badge-hard",
        Difficulty::Unknown => "badge badge-unknown",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRowVm {
    pub id: QuestionId,
    pub title: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub practice_link: Option<String>,
    pub solved: bool,
    pub bookmarked: bool,
}

/// One accordion section: a topic and its questions, in sheet order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicGroupVm {
    pub topic: String,
    pub rows: Vec<QuestionRowVm>,
}

/// Group questions by primary topic and annotate each row with the user's
/// solved/bookmarked state.
#[must_use]
pub fn map_topic_groups(
    questions: &[Question],
    solved: &HashMap<QuestionId, bool>,
    bookmarked: &HashSet<QuestionId>,
) -> Vec<TopicGroupVm> {
    questions_by_topic(questions)
        .into_iter()
        .map(|(topic, questions)| TopicGroupVm {
            topic,
            rows: questions
                .into_iter()
                .map(|question| QuestionRowVm {
                    id: question.id().clone(),
                    title: question.title().to_owned(),
                    difficulty_label: question.difficulty().label(),
                    difficulty_class: difficulty_class(question.difficulty()),
                    practice_link: question.practice_link().map(ToString::to_string),
                    solved: solved.get(question.id()).copied().unwrap_or(false),
                    bookmarked: bookmarked.contains(question.id()),
                })
                .collect(),
        })
        .collect()
}

/// Fold a freshly returned toggle result into the solved map, keyed by the
/// normalized question ID. The caller's view updates in place; no re-fetch.
pub fn apply_progress(solved: &mut HashMap<QuestionId, bool>, record: &ProgressRecord) {
    solved.insert(record.question_id().clone(), record.is_solved());
}

// ─── Tests ──────────────────────────────────────────────────────────────────
