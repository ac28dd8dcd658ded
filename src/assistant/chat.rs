//! Conversational assistant turns
//!
//! The conversation is plain data owned by the caller. Each turn sends the
//! current context snapshot along with the history, so a changed ledger or
//! currency is picked up on the next message without any session to rebuild.

use serde::{Deserialize, Serialize};

use super::Assistant;

const GREETING: &str = "Hi! I can help you analyze your spending or answer questions about your budget. What would you like to know?";
const EMPTY_REPLY: &str = "I didn't catch that, could you rephrase?";
const OFFLINE_REPLY: &str = "Sorry, I'm having trouble connecting to the network right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Ordered conversation, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// A conversation that opens with the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: GREETING.into(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, role: ChatRole, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
        });
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Send one user message and record both sides of the turn
///
/// Blank messages are ignored and return `None`. Failures are recorded as a
/// neutral apology rather than returned as errors.
pub fn chat_reply(
    assistant: &dyn Assistant,
    context: &str,
    history: &mut ChatHistory,
    message: &str,
) -> Option<String> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    let reply = match assistant.chat(context, history.messages(), message) {
        Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%err, "chat unavailable");
            OFFLINE_REPLY.to_string()
        }
    };

    history.push(ChatRole::User, message);
    history.push(ChatRole::Model, reply.clone());
    Some(reply)
}
