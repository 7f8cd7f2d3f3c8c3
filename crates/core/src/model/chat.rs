use chrono::{DateTime, Utc};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single timestamped message in the AI tutor conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    role: ChatRole,
    text: String,
    sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at,
        }
    }

    #[must_use]
    pub fn user(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self::new(ChatRole::User, text, sent_at)
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self::new(ChatRole::Assistant, text, sent_at)
    }

    #[must_use]
    pub fn role(&self) -> ChatRole {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn constructors_set_role() {
        let now = fixed_now();
        assert_eq!(ChatMessage::user("hi", now).role(), ChatRole::User);
        assert_eq!(
            ChatMessage::assistant("hello", now).role(),
            ChatRole::Assistant
        );
    }
}
