use crate::ai::{AiService, PracticeTopic, practice_prompt};
use crate::error::AiError;

/// Generates practice content for a word and topic.
#[derive(Clone)]
pub struct PracticeService {
    ai: AiService,
}

impl PracticeService {
    #[must_use]
    pub fn new(ai: AiService) -> Self {
        Self { ai }
    }

    /// # Errors
    ///
    /// Returns `AiError` when the remote backend fails.
    pub async fn generate(&self, word: &str, topic: PracticeTopic) -> Result<String, AiError> {
        self.ai.generate(&practice_prompt(word, topic)).await
    }
}
