use std::sync::Arc;

use storage::repository::AppSettingsRepository;
use vocab_core::model::{AppSettings, AppSettingsDraft};

use crate::error::AppSettingsServiceError;

/// Loads and saves the single settings record.
#[derive(Clone)]
pub struct AppSettingsService {
    repo: Arc<dyn AppSettingsRepository>,
}

impl AppSettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn AppSettingsRepository>) -> Self {
        Self { repo }
    }

    /// Current settings, falling back to defaults before the first save.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError::Storage` on persistence failures.
    pub async fn load(&self) -> Result<AppSettings, AppSettingsServiceError> {
        Ok(self.repo.get_settings().await?.unwrap_or_default())
    }

    /// Validate a draft and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError::Settings` when the draft fails
    /// validation, `AppSettingsServiceError::Storage` on persistence
    /// failures.
    pub async fn save(
        &self,
        draft: AppSettingsDraft,
    ) -> Result<AppSettings, AppSettingsServiceError> {
        let settings = draft.validate()?;
        self.repo.save_settings(&settings).await?;
        Ok(settings)
    }
}
