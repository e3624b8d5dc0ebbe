//! Pattern matcher — literal phrase and keyword rules over user input.
//!
//! DESIGN
//! ======
//! Exact-match sets are compared against the lowercased, trimmed input;
//! keyword sets use substring containment on the lowercased input. No
//! tokenization, no fuzzy matching. Direct-answer categories short-circuit
//! before the current-information keywords are consulted.

use std::fmt;

// =============================================================================
// RULE TABLES
// =============================================================================

const GREETINGS: &[&str] = &["hello", "hi", "hey", "greetings", "hello there", "hi there"];

const IDENTITY_QUESTIONS: &[&str] = &[
    "what is your name?",
    "what's your name?",
    "who are you?",
    "whats your name",
    "what is your name",
    "your name",
    "your name?",
    "name?",
];

const PURPOSE_QUESTIONS: &[&str] =
    &["what do you do?", "what can you do?", "how can you help me?", "what is your purpose?"];

pub(crate) const CREATOR_KEYWORDS: &[&str] = &[
    "who created you",
    "who made you",
    "who built you",
    "who developed you",
    "who programmed you",
    "who is your creator",
    "who's your creator",
    "who powers you",
    "who designed you",
];

const CURRENT_INFO_KEYWORDS: &[&str] = &[
    "current",
    "recent",
    "latest",
    "today",
    "this week",
    "this month",
    "this year",
    "upcoming",
    "event",
    "opportunity",
    "volunteer",
    "when",
    "where",
    "how to join",
    "happening",
    "news",
];

pub const GREETING_REPLY: &str = "Hello! I'm Adghal AI, your environmental assistant. How can I help you make a positive impact on the environment today?";

pub const IDENTITY_REPLY: &str = "I am Adghal AI, your environmental assistant. My name 'Adghal' means 'jungle' in Arabic, reflecting my focus on nature and environmental sustainability.";

pub const CREATOR_REPLY: &str = "I was created by Anas Hmidan, someone who cares deeply about our planet and wants to inspire positive change. With a blend of human creativity and AI technology, I exist to help people like you make a difference for nature and our future.";

pub const PURPOSE_REPLY: &str = "I'm designed to help you find ways to make a positive environmental impact. I can provide information on reducing waste, conserving energy, finding volunteer opportunities, and learning about environmental initiatives. Feel free to ask me anything related to environmental sustainability!";

// =============================================================================
// CATEGORY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Identity,
    Creator,
    Purpose,
    NeedsCurrentInfo,
    General,
}

impl Category {
    /// `true` for categories answered from the literal table without a backend.
    #[must_use]
    pub fn is_direct(self) -> bool {
        matches!(self, Self::Greeting | Self::Identity | Self::Creator | Self::Purpose)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Identity => "identity",
            Self::Creator => "creator",
            Self::Purpose => "purpose",
            Self::NeedsCurrentInfo => "needs_current_info",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify raw user input. Total: every input maps to exactly one category.
#[must_use]
pub fn classify(input: &str) -> Category {
    direct_category(input).unwrap_or_else(|| {
        if needs_current_information(input) { Category::NeedsCurrentInfo } else { Category::General }
    })
}

/// The direct-answer category for `input`, if any.
///
/// Check order is creator, identity, greeting, purpose.
#[must_use]
pub fn direct_category(input: &str) -> Option<Category> {
    let lower = input.to_lowercase();
    let exact = lower.trim();

    if contains_any(&lower, CREATOR_KEYWORDS) {
        Some(Category::Creator)
    } else if IDENTITY_QUESTIONS.contains(&exact) {
        Some(Category::Identity)
    } else if GREETINGS.contains(&exact) {
        Some(Category::Greeting)
    } else if PURPOSE_QUESTIONS.contains(&exact) {
        Some(Category::Purpose)
    } else {
        None
    }
}

#[must_use]
pub fn is_greeting(input: &str) -> bool {
    GREETINGS.contains(&input.to_lowercase().trim())
}

/// `true` when the input mentions anything time-sensitive enough to search for.
#[must_use]
pub fn needs_current_information(input: &str) -> bool {
    contains_any(&input.to_lowercase(), CURRENT_INFO_KEYWORDS)
}

/// Fixed reply for a direct-answer category.
#[must_use]
pub fn direct_answer(category: Category) -> Option<&'static str> {
    match category {
        Category::Greeting => Some(GREETING_REPLY),
        Category::Identity => Some(IDENTITY_REPLY),
        Category::Creator => Some(CREATOR_REPLY),
        Category::Purpose => Some(PURPOSE_REPLY),
        Category::NeedsCurrentInfo | Category::General => None,
    }
}

/// Search query sent to the search backend for a current-information input.
#[must_use]
pub fn search_query(input: &str) -> String {
    format!("environmental {input} current information")
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
