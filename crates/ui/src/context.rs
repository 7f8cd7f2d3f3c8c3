use std::sync::Arc;

use services::{
    AppSettingsService, ChatService, Clock, PracticeService, ReviewService, TestService,
    WordService,
};

/// Capabilities the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn review(&self) -> Arc<ReviewService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn tests(&self) -> Arc<TestService>;
    fn words(&self) -> Arc<WordService>;
    fn app_settings(&self) -> Arc<AppSettingsService>;
    fn open_chat(&self) -> ChatService;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        Self { app }
    }

    #[must_use]
    pub fn review(&self) -> Arc<ReviewService> {
        self.app.review()
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        self.app.practice()
    }

    #[must_use]
    pub fn tests(&self) -> Arc<TestService> {
        self.app.tests()
    }

    #[must_use]
    pub fn words(&self) -> Arc<WordService> {
        self.app.words()
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        self.app.app_settings()
    }

    #[must_use]
    pub fn open_chat(&self) -> ChatService {
        self.app.open_chat()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.app.clock()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
