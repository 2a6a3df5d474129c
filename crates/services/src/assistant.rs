use std::fmt;
use std::sync::Arc;

use prep_core::Clock;
use prep_core::model::ChatMessage;

use crate::error::ChatError;

/// Greeting seeded into a fresh transcript.
pub const GREETING: &str = "Hi! I'm your Prepthon AI Buddy — how can I help today?";

/// Produces one assistant reply per accepted user message.
///
/// This is the seam a real chat backend implements; the session core only
/// requires that a reply is produced synchronously.
pub trait AssistantResponder: Send + Sync {
    /// Build the reply to a user prompt.
    fn reply(&self, prompt: &str) -> String;
}

/// Placeholder responder with a fixed reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAssistant;

impl AssistantResponder for CannedAssistant {
    fn reply(&self, _prompt: &str) -> String {
        "(Simulated response) — I would explain this concept and give examples.".to_string()
    }
}

/// Append-only chat transcript plus the responder that answers it.
///
/// Messages are only ever appended, in conversation order; each accepted
/// `send` grows the transcript by exactly two entries.
pub struct ChatService {
    clock: Clock,
    responder: Arc<dyn AssistantResponder>,
    messages: Vec<ChatMessage>,
}

impl ChatService {
    /// Create a service with an empty transcript.
    #[must_use]
    pub fn new(clock: Clock, responder: Arc<dyn AssistantResponder>) -> Self {
        Self {
            clock,
            responder,
            messages: Vec::new(),
        }
    }

    /// Create a service whose transcript opens with the assistant greeting.
    #[must_use]
    pub fn with_greeting(clock: Clock, responder: Arc<dyn AssistantResponder>) -> Self {
        let mut service = Self::new(clock, responder);
        let opened_at = service.clock.now();
        service.messages.push(ChatMessage::assistant(GREETING, opened_at));
        service
    }

    /// Ordered transcript, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message and the responder's reply.
    ///
    /// The submitted text is stored exactly as given; trimming is only used
    /// for the emptiness check.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyMessage` for whitespace-only text, leaving
    /// the transcript untouched.
    pub fn send(&mut self, text: &str) -> Result<(), ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let now = self.clock.now();
        let reply = self.responder.reply(text);
        self.messages.push(ChatMessage::user(text, now));
        self.messages.push(ChatMessage::assistant(reply, now));
        Ok(())
    }
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("messages_len", &self.messages.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
