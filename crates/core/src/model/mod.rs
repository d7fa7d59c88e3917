mod bookmark;
mod ids;
mod progress;
mod question;
mod session;
mod sheet;
mod user;

pub use ids::{BookmarkId, QuestionId, SheetId, UserId};

pub use bookmark::Bookmark;
pub use progress::{ProgressRecord, QuestionRef};
pub use question::{Difficulty, Question, QuestionError};
pub use session::Session;
pub use sheet::{Sheet, SheetDraft, SheetError};
pub use user::User;
