//! Pure derivation of completion metrics from fetched collections.
//!
//! Nothing here performs I/O or retains state; views re-run these functions
//! whenever their question/progress data changes. Record-to-question
//! matching always goes through `QuestionRef::question_id()`, so bare and
//! populated references behave identically.

use std::collections::{BTreeMap, HashMap};

use crate::model::{ProgressRecord, Question, QuestionId};

/// Bucket label for questions that carry no topic.
pub const OTHER_TOPIC: &str = "Other";

/// Whole-sheet completion numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetCompletion {
    pub total: usize,
    pub solved: usize,
    /// `round(100 * solved / total)`, `0` for an empty sheet.
    pub percentage: u8,
}

/// Per-topic completion numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicStats {
    pub total: usize,
    pub solved: usize,
    /// Questions with any progress record, solved or not.
    pub attempted: usize,
}

impl TopicStats {
    #[must_use]
    pub fn percentage(&self) -> u8 {
        percentage(self.solved, self.total)
    }
}

/// Completion over the user's progress records alone, ignoring sheet
/// membership. This is the profile/overall variant: `attempted` is the
/// record count, not the question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptSummary {
    pub attempted: usize,
    pub solved: usize,
    pub percentage: u8,
}

fn percentage(solved: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (100.0 * solved as f64 / total as f64).round() as u8;
    rounded
}

/// Index progress records by their normalized question key.
///
/// The remote enforces at most one record per question; if duplicates ever
/// arrive, the last one wins. Keys are owned so callers can keep the map
/// alive past the records and fold toggle results into it.
#[must_use]
pub fn solved_lookup(progress: &[ProgressRecord]) -> HashMap<QuestionId, bool> {
    progress
        .iter()
        .map(|record| (record.question_id().clone(), record.is_solved()))
        .collect()
}

/// Sheet-level aggregate: how many of `questions` have a solved record.
#[must_use]
pub fn sheet_completion(
    questions: &[Question],
    progress: &[ProgressRecord],
) -> SheetCompletion {
    let lookup = solved_lookup(progress);
    let solved = questions
        .iter()
        .filter(|question| lookup.get(question.id()).copied().unwrap_or(false))
        .count();

    SheetCompletion {
        total: questions.len(),
        solved,
        percentage: percentage(solved, questions.len()),
    }
}

/// Topic-level aggregate.
///
/// A question contributes to every one of its topics, so summed totals
/// across buckets may exceed the question count; that fan-out is deliberate.
/// A question with no topic lands in the `"Other"` bucket.
#[must_use]
pub fn topic_breakdown(
    questions: &[Question],
    progress: &[ProgressRecord],
) -> BTreeMap<String, TopicStats> {
    let by_question: HashMap<&QuestionId, &ProgressRecord> = progress
        .iter()
        .map(|record| (record.question_id(), record))
        .collect();

    let mut buckets: BTreeMap<String, TopicStats> = BTreeMap::new();
    for question in questions {
        let record = by_question.get(question.id()).copied();
        for topic in topic_labels(question) {
            let stats = buckets.entry(topic.to_owned()).or_default();
            stats.total += 1;
            if let Some(record) = record {
                stats.attempted += 1;
                if record.is_solved() {
                    stats.solved += 1;
                }
            }
        }
    }
    buckets
}

/// Topics worth showing: only buckets with at least one solved question,
/// regardless of how many were merely attempted.
#[must_use]
pub fn active_topics(
    breakdown: &BTreeMap<String, TopicStats>,
) -> Vec<(&str, TopicStats)> {
    breakdown
        .iter()
        .filter(|(_, stats)| stats.solved > 0)
        .map(|(topic, stats)| (topic.as_str(), *stats))
        .collect()
}

/// Overall completion across the user's progress records.
#[must_use]
pub fn attempt_summary(progress: &[ProgressRecord]) -> AttemptSummary {
    let attempted = progress.len();
    let solved = progress.iter().filter(|record| record.is_solved()).count();
    AttemptSummary {
        attempted,
        solved,
        percentage: percentage(solved, attempted),
    }
}

/// Group questions by primary topic for the sheet-detail accordion.
///
/// Unlike `topic_breakdown`, this does not fan out: each question appears
/// exactly once, under its first topic (or `"Other"`).
#[must_use]
pub fn questions_by_topic(questions: &[Question]) -> BTreeMap<String, Vec<&Question>> {
    let mut grouped: BTreeMap<String, Vec<&Question>> = BTreeMap::new();
    for question in questions {
        let topic = question
            .topics()
            .first()
            .map_or(OTHER_TOPIC, String::as_str);
        grouped.entry(topic.to_owned()).or_default().push(question);
    }
    grouped
}

fn topic_labels(question: &Question) -> Vec<&str> {
    if question.topics().is_empty() {
        vec![OTHER_TOPIC]
    } else {
        question.topics().iter().map(String::as_str).collect()
    }
}
