use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// One entry in a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    sender: Sender,
    text: String,
    sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Message authored by the signed-in user.
    #[must_use]
    pub fn user(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sent_at,
        }
    }

    /// Message produced by the assistant.
    #[must_use]
    pub fn assistant(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            sent_at,
        }
    }

    #[must_use]
    pub fn sender(&self) -> Sender {
        self.sender
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
