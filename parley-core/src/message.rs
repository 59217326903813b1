use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Ordered turns shown to the user.
///
/// Display state only: the responder never reads it, and clearing it leaves
/// the knowledge base untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    turns: Vec<ChatMessage>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a log with a single assistant message.
    pub fn with_welcome(text: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatMessage::assistant(text)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.turns.push(message);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of turns sent by the user.
    pub fn user_turns(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.role == MessageRole::User)
            .count()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_display() {
        assert_eq!(MessageRole::User.to_string(), "user");
        assert_eq!(MessageRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_chat_message_serialization() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Hello\""));

        let decoded: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.role, MessageRole::User);
        assert_eq!(decoded.id, msg.id);
    }

    #[test]
    fn test_conversation_log_order_and_clear() {
        let mut log = ConversationLog::with_welcome("hi there");
        log.push(ChatMessage::user("joke"));
        log.push(ChatMessage::assistant("a joke"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.user_turns(), 1);
        assert_eq!(log.turns()[1].content, "joke");
        assert_eq!(log.last().map(|m| m.role), Some(MessageRole::Assistant));

        log.clear();
        assert!(log.is_empty());
    }
}
