//! Assistant — the chat persona's decision logic.
//!
//! DESIGN
//! ======
//! Pure building blocks (`classify`, `mock_bank`, `sanitize`,
//! `conversation`) carry no I/O. `router` is the only module that awaits
//! backends, through the search and generation clients it is given.

pub mod classify;
pub mod conversation;
pub mod mock_bank;
pub mod router;
pub mod sanitize;

/// Example prompts offered on the chat screen.
pub const SUGGESTIONS: &[&str] = &[
    "How can I reduce plastic waste?",
    "Tell me about successful reforestation projects",
    "What are current volunteer opportunities near me?",
    "How can I make my home more energy efficient?",
    "What are the latest environmental events this month?",
];
