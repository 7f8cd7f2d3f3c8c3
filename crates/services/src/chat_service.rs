use vocab_core::Clock;
use vocab_core::model::ChatMessage;

use crate::ai::{AiService, tutor_prompt};
use crate::error::ChatError;

/// One conversation with the AI tutor.
///
/// The transcript lives in memory for the lifetime of the chat tab; history
/// is not persisted across launches. Cloning snapshots the transcript, which
/// lets UI code move the service in and out of reactive state.
#[derive(Clone)]
pub struct ChatService {
    ai: AiService,
    clock: Clock,
    messages: Vec<ChatMessage>,
}

impl ChatService {
    #[must_use]
    pub fn new(ai: AiService, clock: Clock) -> Self {
        let now = clock.now();
        let messages = vec![
            ChatMessage::assistant("你好！我是你的AI英语学习助手。有什么我可以帮助你的吗？", now),
            ChatMessage::assistant("可以问我单词释义、语法问题、发音练习等", now),
        ];
        Self {
            ai,
            clock,
            messages,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a learner question and append the tutor's reply to the
    /// transcript. Blank input is dropped and reported as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Ai` when the remote backend fails; the question
    /// stays in the transcript so the learner can retry.
    pub async fn send(&mut self, text: &str) -> Result<bool, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        self.messages.push(ChatMessage::user(text, self.clock.now()));
        let reply = self.ai.generate(&tutor_prompt(text)).await?;
        self.messages
            .push(ChatMessage::assistant(reply, self.clock.now()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::ChatRole;
    use vocab_core::time::fixed_clock;

    #[tokio::test]
    async fn conversation_opens_with_the_greeting() {
        let chat = ChatService::new(AiService::mock(), fixed_clock());
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.messages().iter().all(|m| m.role() == ChatRole::Assistant));
    }

    #[tokio::test]
    async fn send_appends_question_and_reply_in_order() {
        let mut chat = ChatService::new(AiService::mock(), fixed_clock());
        assert!(chat.send("什么是不定式？").await.unwrap());

        let messages = chat.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].role(), ChatRole::User);
        assert_eq!(messages[2].text(), "什么是不定式？");
        assert_eq!(messages[3].role(), ChatRole::Assistant);
        assert!(!messages[3].text().is_empty());
    }

    #[tokio::test]
    async fn blank_input_is_dropped() {
        let mut chat = ChatService::new(AiService::mock(), fixed_clock());
        assert!(!chat.send("   ").await.unwrap());
        assert_eq!(chat.messages().len(), 2);
    }
}
