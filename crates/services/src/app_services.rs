use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::ai::AiService;
use crate::app_settings_service::AppSettingsService;
use crate::chat_service::ChatService;
use crate::error::AppServicesError;
use crate::practice_service::PracticeService;
use crate::review_service::ReviewService;
use crate::test_service::TestService;
use crate::word_service::WordService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    review: Arc<ReviewService>,
    practice: Arc<PracticeService>,
    tests: Arc<TestService>,
    words: Arc<WordService>,
    app_settings: Arc<AppSettingsService>,
    ai: AiService,
    clock: Clock,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// The AI backend is chosen from stored settings at launch: remote when
    /// an API key is configured, canned responses otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let settings = storage.settings.get_settings().await?.unwrap_or_default();
        let ai = AiService::from_settings(&settings);
        Ok(Self::from_storage(&storage, ai, clock))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, ai: AiService, clock: Clock) -> Self {
        Self {
            review: Arc::new(ReviewService::new(Arc::clone(&storage.words))),
            practice: Arc::new(PracticeService::new(ai.clone())),
            tests: Arc::new(TestService::new()),
            words: Arc::new(WordService::new(Arc::clone(&storage.words))),
            app_settings: Arc::new(AppSettingsService::new(Arc::clone(&storage.settings))),
            ai,
            clock,
        }
    }

    /// In-memory storage with the mock AI backend, for tests and demos.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), AiService::mock(), clock)
    }

    #[must_use]
    pub fn review(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn tests(&self) -> Arc<TestService> {
        Arc::clone(&self.tests)
    }

    #[must_use]
    pub fn words(&self) -> Arc<WordService> {
        Arc::clone(&self.words)
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Open a fresh chat conversation against the configured AI backend.
    #[must_use]
    pub fn open_chat(&self) -> ChatService {
        ChatService::new(self.ai.clone(), self.clock)
    }
}
