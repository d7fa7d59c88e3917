use std::collections::BTreeMap;

use tracker_core::progress::{AttemptSummary, SheetCompletion, TopicStats};

/// CSS class for a completion bar, banded by percentage.
#[must_use]
pub fn band_class(percentage: u8) -> &'static str {
    match percentage {
        80..=100 => "band band-green",
        50..=79 => "band band-yellow",
        20..=49 => "band band-blue",
        _ => "band band-red",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub solved: usize,
    pub total: usize,
    pub percentage: u8,
    pub band_class: &'static str,
}

#[must_use]
pub fn map_completion(completion: SheetCompletion) -> CompletionVm {
    CompletionVm {
        solved: completion.solved,
        total: completion.total,
        percentage: completion.percentage,
        band_class: band_class(completion.percentage),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRowVm {
    pub topic: String,
    pub solved: usize,
    pub total: usize,
    pub attempted: usize,
    pub percentage: u8,
    pub band_class: &'static str,
}

#[must_use]
pub fn map_topic_rows(breakdown: &BTreeMap<String, TopicStats>) -> Vec<TopicRowVm> {
    breakdown
        .iter()
        .map(|(topic, stats)| TopicRowVm {
            topic: topic.clone(),
            solved: stats.solved,
            total: stats.total,
            attempted: stats.attempted,
            percentage: stats.percentage(),
            band_class: band_class(stats.percentage()),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub attempted: usize,
    pub solved: usize,
    pub percentage: u8,
    pub band_class: &'static str,
}

#[must_use]
pub fn map_summary(summary: AttemptSummary) -> SummaryVm {
    SummaryVm {
        attempted: summary.attempted,
        solved: summary.solved,
        percentage: summary.percentage,
        band_class: band_class(summary.percentage),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
