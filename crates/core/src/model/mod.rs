mod app_settings;
mod chat;
mod ids;
mod quiz;
mod review_session;
mod word;

pub use app_settings::{AccentPreference, AppSettings, AppSettingsDraft, AppSettingsError};
pub use chat::{ChatMessage, ChatRole};
pub use ids::{ParseIdError, QuestionId, WordId};
pub use quiz::{AnswerOutcome, QuestionKind, QuizError, QuizQuestion, TestPaper, TestSitting};
pub use review_session::{ReviewMode, ReviewSession};
pub use word::{Phonetic, WordDraft, WordEntry, WordError};
