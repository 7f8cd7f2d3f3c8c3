use reqwest::Client;
use serde::{Deserialize, Serialize};

use vocab_core::model::AppSettings;

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
const DEFAULT_MODEL: &str = "glm-4.7-flash";

#[derive(Clone, Debug)]
pub struct RemoteAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl RemoteAiConfig {
    /// Build a config from stored settings; `None` without an API key.
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Option<Self> {
        let api_key = settings.api_key()?.to_string();
        Some(Self {
            base_url: settings
                .api_base_url()
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            api_key,
            model: settings.api_model().unwrap_or(DEFAULT_MODEL).to_string(),
        })
    }
}

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct RemoteAiClient {
    client: Client,
    config: RemoteAiConfig,
}

impl RemoteAiClient {
    #[must_use]
    pub fn new(config: RemoteAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Generate text from a prompt.
    ///
    /// # Errors
    ///
    /// Returns `AiError` when the request fails, the server answers with a
    /// non-success status, or the response carries no content.
    pub async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![RequestMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<RequestMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RequestMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::{AppSettings, AppSettingsDraft};

    #[test]
    fn request_payload_has_the_chat_completions_shape() {
        let payload = ChatRequest {
            model: "glm-4.7-flash".into(),
            messages: vec![RequestMessage {
                role: "user",
                content: "hello".into(),
            }],
            temperature: 0.2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "glm-4.7-flash");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn config_requires_an_api_key() {
        assert!(RemoteAiConfig::from_settings(&AppSettings::default()).is_none());

        let settings = AppSettingsDraft {
            api_key: Some("sk-test".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let config = RemoteAiConfig::from_settings(&settings).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn backend_follows_the_stored_key() {
        use crate::ai::AiService;

        assert!(!AiService::from_settings(&AppSettings::default()).is_remote());

        let settings = AppSettingsDraft {
            api_key: Some("sk-test".into()),
            ..AppSettingsDraft::default()
        }
        .validate()
        .unwrap();
        assert!(AiService::from_settings(&settings).is_remote());
    }
}
