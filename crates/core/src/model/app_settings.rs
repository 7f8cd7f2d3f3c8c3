use thiserror::Error;
use url::Url;

/// Which pronunciation the app favors when playing or displaying audio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccentPreference {
    #[default]
    Us,
    Uk,
}

impl AccentPreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Uk => "uk",
        }
    }

    /// Parse a persisted accent value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "us" => Some(Self::Us),
            "uk" => Some(Self::Uk),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppSettings {
    api_key: Option<String>,
    api_base_url: Option<String>,
    api_model: Option<String>,
    accent: AccentPreference,
    daily_goal: u16,
    auto_play_audio: bool,
    notifications: bool,
    night_mode: bool,
}

#[derive(Clone, Debug)]
pub struct AppSettingsDraft {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub api_model: Option<String>,
    pub accent: AccentPreference,
    pub daily_goal: u16,
    pub auto_play_audio: bool,
    pub notifications: bool,
    pub night_mode: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("invalid API base URL")]
    InvalidBaseUrl,

    #[error("daily goal must be at least one word")]
    ZeroDailyGoal,
}

impl Default for AppSettingsDraft {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: None,
            api_model: None,
            accent: AccentPreference::default(),
            daily_goal: 10,
            auto_play_audio: true,
            notifications: true,
            night_mode: false,
        }
    }
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into persisted settings.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if the base URL is present but invalid, or
    /// the daily goal is zero.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let api_base_url = normalize_optional(self.api_base_url);
        let api_model = normalize_optional(self.api_model);

        if let Some(url) = api_base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(AppSettingsError::InvalidBaseUrl);
            }
        }
        if self.daily_goal == 0 {
            return Err(AppSettingsError::ZeroDailyGoal);
        }

        Ok(AppSettings {
            api_key,
            api_base_url,
            api_model,
            accent: self.accent,
            daily_goal: self.daily_goal,
            auto_play_audio: self.auto_play_audio,
            notifications: self.notifications,
            night_mode: self.night_mode,
        })
    }
}

impl AppSettings {
    /// Rehydrate settings from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if the persisted values fail validation.
    pub fn from_persisted(draft: AppSettingsDraft) -> Result<Self, AppSettingsError> {
        draft.validate()
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    #[must_use]
    pub fn api_model(&self) -> Option<&str> {
        self.api_model.as_deref()
    }

    #[must_use]
    pub fn accent(&self) -> AccentPreference {
        self.accent
    }

    #[must_use]
    pub fn daily_goal(&self) -> u16 {
        self.daily_goal
    }

    #[must_use]
    pub fn auto_play_audio(&self) -> bool {
        self.auto_play_audio
    }

    #[must_use]
    pub fn notifications(&self) -> bool {
        self.notifications
    }

    #[must_use]
    pub fn night_mode(&self) -> bool {
        self.night_mode
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: None,
            api_model: None,
            accent: AccentPreference::Us,
            daily_goal: 10,
            auto_play_audio: true,
            notifications: true,
            night_mode: false,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_normalizes_to_none() {
        let settings = AppSettingsDraft {
            api_key: Some("   ".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = AppSettingsDraft {
            api_base_url: Some("not a url".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AppSettingsError::InvalidBaseUrl);
    }

    #[test]
    fn zero_daily_goal_is_rejected() {
        let err = AppSettingsDraft {
            daily_goal: 0,
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AppSettingsError::ZeroDailyGoal);
    }

    #[test]
    fn accent_roundtrips_through_str() {
        assert_eq!(
            AccentPreference::parse(AccentPreference::Uk.as_str()),
            Some(AccentPreference::Uk)
        );
        assert_eq!(AccentPreference::parse("au"), None);
    }
}
