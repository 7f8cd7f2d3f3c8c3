#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod app_settings_service;
pub mod chat_service;
pub mod error;
pub mod practice_service;
pub mod review_service;
pub mod test_service;
pub mod word_service;

pub use vocab_core::Clock;

pub use ai::{AiService, PracticeTopic, RemoteAiClient, RemoteAiConfig};
pub use app_services::AppServices;
pub use app_settings_service::AppSettingsService;
pub use chat_service::ChatService;
pub use error::{
    AiError, AppServicesError, AppSettingsServiceError, ChatError, ReviewServiceError,
    TestServiceError, WordServiceError,
};
pub use practice_service::PracticeService;
pub use review_service::ReviewService;
pub use test_service::TestService;
pub use word_service::{SyncReport, WordService};
