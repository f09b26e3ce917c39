//! Coach chat transcript and panel state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// First message in every transcript.
pub const COACH_GREETING: &str = "Hi! I'm your AI Coach. Stuck on a concept? Ask me anything about tokens, temperature, or prompting!";

/// Reply when no credential is configured.
pub const OFFLINE_REPLY: &str =
    "I'm currently offline (Missing API Key). Please check configuration.";

/// Reply when the provider answered with nothing.
pub const EMPTY_REPLY: &str = "I didn't catch that. Could you rephrase?";

/// Reply when the provider call failed.
pub const FAILURE_REPLY: &str = "I'm having trouble connecting to the neural network right now.";

/// System instruction sent with every coach request.
pub const COACH_SYSTEM_INSTRUCTION: &str = r#"You are the "AI Coach" for the "AI Teacher" educational portfolio.
Your goal is to help students understand AI concepts like Tokens, Temperature, Prompting (CRISP framework), Web-Grounding, and Data Security.
Keep answers brief (under 3 sentences), encouraging, and pedagogical.
Do not write code unless asked.
Tone: Professional, supportive, and slightly futuristic."#;

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// What the completion call needs for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    /// Transcript before the new user message.
    pub history: Vec<ChatMessage>,
    /// The new user message.
    pub message: String,
}

/// Append-only transcript plus the one-outstanding-call guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachPanel {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for CoachPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachPanel {
    /// New panel seeded with the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(COACH_GREETING)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a completion call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the trimmed user message and marks the panel pending.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for blank input
    /// - `CoachBusy` while another turn is outstanding
    pub fn begin_turn(&mut self, text: &str) -> Result<PendingTurn, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::validation("message", "Message cannot be empty"));
        }
        if self.pending {
            return Err(DomainError::new(
                ErrorCode::CoachBusy,
                "The coach is still answering the previous message",
            ));
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        Ok(PendingTurn {
            history,
            message: text.to_string(),
        })
    }

    /// Appends the model reply and clears the pending flag.
    pub fn finish_turn(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::model(reply));
        self.pending = false;
    }
}
