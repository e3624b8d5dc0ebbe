//! Conversation log — the ordered, append-only list of chat turns.
//!
//! The log is owned by whoever drives the chat (the chat route per request,
//! the terminal client per session) and lent to the router, which appends
//! the user turn and the assistant turn for every message it handles.

use serde::{Deserialize, Serialize};

/// Number of trailing turns rendered into the generation prompt.
pub const CONTEXT_TURNS: usize = 6;

pub const WELCOME_MESSAGE: &str = "Hello! I'm Adghal AI, your guide to environmental action. How can I help you make a positive impact today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in the generation transcript.
    #[must_use]
    pub fn transcript_label(self) -> &'static str {
        match self {
            Self::User => "Human",
            Self::Assistant => "Assistant",
        }
    }
}

/// Where an assistant turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Generation backend, or the mock bank standing in for it.
    Ai,
    /// Search backend summary.
    Search,
    /// Direct answer, or a user turn.
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
    #[serde(default)]
    pub provenance: Provenance,
}

impl ConversationTurn {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), provenance: Provenance::None }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>, provenance: Provenance) -> Self {
        Self { role: Role::Assistant, text: text.into(), provenance }
    }
}

/// Append-only turn log.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ConversationTurn>,
}

impl Conversation {
    /// A fresh conversation, seeded with the assistant's welcome turn.
    #[must_use]
    pub fn new() -> Self {
        Self { turns: vec![ConversationTurn::assistant(WELCOME_MESSAGE, Provenance::Ai)] }
    }

    /// Rebuild a log from turns held by a client.
    #[must_use]
    pub fn from_turns(turns: Vec<ConversationTurn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    #[must_use]
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn into_turns(self) -> Vec<ConversationTurn> {
        self.turns
    }

    /// Render the last [`CONTEXT_TURNS`] turns as `Human: …` / `Assistant: …`
    /// lines for the generation prompt.
    #[must_use]
    pub fn context(&self) -> String {
        let start = self.turns.len().saturating_sub(CONTEXT_TURNS);
        self.turns[start..]
            .iter()
            .map(|turn| format!("{}: {}", turn.role.transcript_label(), turn.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
