use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{AppSettingsRepository, StorageError};
use vocab_core::model::{AccentPreference, AppSettings, AppSettingsDraft};

use super::SqliteRepository;

#[async_trait]
impl AppSettingsRepository for SqliteRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT
                api_key,
                api_base_url,
                api_model,
                accent,
                daily_goal,
                auto_play_audio,
                notifications,
                night_mode
            FROM app_settings
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let api_key: Option<String> = row
            .try_get("api_key")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let api_base_url: Option<String> = row
            .try_get("api_base_url")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let api_model: Option<String> = row
            .try_get("api_model")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let accent: String = row
            .try_get("accent")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let daily_goal: i64 = row
            .try_get("daily_goal")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let auto_play_audio: i64 = row
            .try_get("auto_play_audio")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let notifications: i64 = row
            .try_get("notifications")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let night_mode: i64 = row
            .try_get("night_mode")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let accent = AccentPreference::parse(&accent)
            .ok_or_else(|| StorageError::Serialization(format!("unknown accent: {accent}")))?;
        let daily_goal = u16::try_from(daily_goal)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        AppSettings::from_persisted(AppSettingsDraft {
            api_key,
            api_base_url,
            api_model,
            accent,
            daily_goal,
            auto_play_audio: auto_play_audio != 0,
            notifications: notifications != 0,
            night_mode: night_mode != 0,
        })
        .map(Some)
        .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO app_settings (
                id,
                api_key,
                api_base_url,
                api_model,
                accent,
                daily_goal,
                auto_play_audio,
                notifications,
                night_mode
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(id) DO UPDATE SET
                api_key = excluded.api_key,
                api_base_url = excluded.api_base_url,
                api_model = excluded.api_model,
                accent = excluded.accent,
                daily_goal = excluded.daily_goal,
                auto_play_audio = excluded.auto_play_audio,
                notifications = excluded.notifications,
                night_mode = excluded.night_mode
            ",
        )
        .bind(1_i64)
        .bind(settings.api_key())
        .bind(settings.api_base_url())
        .bind(settings.api_model())
        .bind(settings.accent().as_str())
        .bind(i64::from(settings.daily_goal()))
        .bind(i64::from(settings.auto_play_audio()))
        .bind(i64::from(settings.notifications()))
        .bind(i64::from(settings.night_mode()))
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
