//! AI text generation for the practice and chat tabs.
//!
//! Responses come from a canned table by default so the app works offline;
//! an OpenAI-compatible remote client takes over when an API key is
//! configured in settings.

mod mock;
mod prompt;
mod remote;

pub use prompt::{PracticeTopic, practice_prompt, tutor_prompt};
pub use remote::{RemoteAiClient, RemoteAiConfig};

use vocab_core::model::AppSettings;

use crate::error::AiError;

#[derive(Clone, Default)]
pub struct AiService {
    remote: Option<RemoteAiClient>,
}

impl AiService {
    /// A service that always answers from the canned table.
    #[must_use]
    pub fn mock() -> Self {
        Self { remote: None }
    }

    #[must_use]
    pub fn new(config: Option<RemoteAiConfig>) -> Self {
        Self {
            remote: config.map(RemoteAiClient::new),
        }
    }

    /// Pick the backend from stored settings: remote when an API key is set,
    /// mock otherwise.
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(RemoteAiConfig::from_settings(settings))
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Generate text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns `AiError` when the remote backend fails. The mock backend is
    /// infallible.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        match &self.remote {
            Some(client) => client.generate(prompt).await,
            None => Ok(mock::dispatch(prompt)),
        }
    }
}
