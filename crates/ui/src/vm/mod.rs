mod progress_vm;
mod question_vm;
mod sheet_vm;
mod time_fmt;

pub use progress_vm::{
    CompletionVm, SummaryVm, TopicRowVm, band_class, map_completion, map_summary,
    map_topic_rows,
};
pub use question_vm::{
    QuestionRowVm, TopicGroupVm, apply_progress, difficulty_class, map_topic_groups,
};
pub use sheet_vm::{SheetCardVm, map_sheet_cards};
pub use time_fmt::format_datetime;
