//! Response sanitizer — strips simulated-transcript artifacts from generated
//! text.
//!
//! Text-generation backends continue the `Human:` / `Assistant:` transcript
//! they were prompted with and sometimes invent further turns. Everything
//! that looks like another speaker is cut so only the assistant's own reply
//! survives. The transformation is idempotent.

use std::sync::OnceLock;

use regex::Regex;

const ASSISTANT_MARKER: &str = "Assistant:";

/// Markers after which generated text is treated as an invented continuation.
pub const CUTOFF_MARKERS: &[&str] = &["Human:", "User:", "Question:", "You:", "Person:"];

fn leaked_turn_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?s)Human:.*?Assistant:").expect("static regex"),
            Regex::new(r"(?s)User:.*?Assistant:").expect("static regex"),
        ]
    })
}

fn leading_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^Assistant:\s*").expect("static regex"))
}

/// Clean a generated reply.
///
/// 1. Collapse every `Human:`/`User:` … `Assistant:` span into `Assistant:`.
/// 2. Keep only the first assistant segment.
/// 3. Drop the leading `Assistant:` marker.
/// 4. Cut at the first continuation marker.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for pattern in leaked_turn_patterns() {
        cleaned = pattern.replace_all(&cleaned, ASSISTANT_MARKER).into_owned();
    }

    let first_turn = cleaned
        .split(ASSISTANT_MARKER)
        .nth(1)
        .map(|segment| format!("{ASSISTANT_MARKER}{segment}"));
    if let Some(first_turn) = first_turn {
        cleaned = first_turn;
    }

    cleaned = leading_marker().replace(&cleaned, "").into_owned();

    for marker in CUTOFF_MARKERS {
        if let Some(idx) = cleaned.find(marker) {
            cleaned.truncate(idx);
        }
    }

    cleaned.trim().to_string()
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
