//! Session-scoped conversation log: immutable messages, append-only order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the exchange produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One exchanged message. Never mutated after creation; retained only for
/// the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    /// Unix timestamp (milliseconds) when the message was created.
    pub timestamp_ms: i64,
    /// Id of the topic that produced an assistant reply, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Message {
    /// Creates a user message with the current timestamp.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp_ms: now_ms(),
            topic: None,
        }
    }

    /// Creates an assistant message with the current timestamp.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp_ms: now_ms(),
            topic: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Append-only ordered sequence of exchanged messages.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message. Messages are never removed or reordered.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
