//! Response router — decides which source answers a chat message.
//!
//! DESIGN
//! ======
//! Every message is classified first. Direct-answer categories reply from
//! the literal table with no backend call. Everything else runs an explicit
//! cascade of [`Step`]s, stopping at the first one that produces text:
//!
//! - needs current info: `[Search, Generate, Mock]`
//! - general:            `[Generate, Mock]`
//!
//! The mock step cannot fail, so every message ends with an assistant turn.
//! Backend calls are awaited one at a time.
//!
//! The conversation log is lent to the router. The generation context is
//! rendered from the turns present before the message, then the user turn
//! and the assistant turn are appended.

use rand::Rng;

use super::classify::{Category, classify, direct_answer, search_query};
use super::conversation::{Conversation, ConversationTurn, Provenance};
use super::mock_bank;
use crate::llm::GenerationClient;
use crate::search::{SearchClient, SearchResult, summarize};

/// Non-fatal notice attached when a reply came from the mock bank after a
/// backend failure.
pub const FALLBACK_NOTICE: &str = "Failed to generate a response. Using pre-defined answers instead.";

const CURRENT_INFO_CASCADE: &[Step] = &[Step::Search, Step::Generate, Step::Mock];
const GENERAL_CASCADE: &[Step] = &[Step::Generate, Step::Mock];

// =============================================================================
// TYPES
// =============================================================================

/// One source in the fallback cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Search,
    Generate,
    Mock,
}

impl Step {
    /// Cascade used for a non-direct category.
    #[must_use]
    pub fn cascade(category: Category) -> &'static [Step] {
        if category == Category::NeedsCurrentInfo { CURRENT_INFO_CASCADE } else { GENERAL_CASCADE }
    }
}

/// Everything the caller needs to render one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOutcome {
    /// The assistant turn appended to the conversation.
    pub reply: ConversationTurn,
    pub category: Category,
    /// Results behind a search-sourced reply.
    pub search_results: Option<Vec<SearchResult>>,
    pub notice: Option<String>,
}

#[derive(Clone)]
pub struct ResponseRouter {
    search: SearchClient,
    generation: GenerationClient,
}

// =============================================================================
// ROUTING
// =============================================================================

impl ResponseRouter {
    #[must_use]
    pub fn new(search: SearchClient, generation: GenerationClient) -> Self {
        Self { search, generation }
    }

    /// Answer `input`, appending the user turn and the assistant turn to
    /// `conversation`.
    pub async fn respond<R>(&self, input: &str, conversation: &mut Conversation, rng: &mut R) -> RouterOutcome
    where
        R: Rng + Send + ?Sized,
    {
        let category = classify(input);
        let context = conversation.context();
        conversation.push(ConversationTurn::user(input));

        let outcome = match direct_answer(category) {
            Some(answer) => {
                tracing::info!(%category, "router: direct answer");
                RouterOutcome {
                    reply: ConversationTurn::assistant(answer, Provenance::None),
                    category,
                    search_results: None,
                    notice: None,
                }
            }
            None => self.run_cascade(input, category, &context, rng).await,
        };

        conversation.push(outcome.reply.clone());
        outcome
    }

    async fn run_cascade<R>(&self, input: &str, category: Category, context: &str, rng: &mut R) -> RouterOutcome
    where
        R: Rng + Send + ?Sized,
    {
        let mut failed = false;

        for step in Step::cascade(category) {
            match step {
                Step::Search => {
                    let query = search_query(input);
                    match self.search.search(&query).await {
                        Ok(results) if !results.is_empty() => {
                            tracing::info!(%category, count = results.len(), "router: answered from search");
                            return RouterOutcome {
                                reply: ConversationTurn::assistant(summarize(&results), Provenance::Search),
                                category,
                                search_results: Some(results),
                                notice: None,
                            };
                        }
                        Ok(_) => tracing::info!("router: search found nothing, trying generation"),
                        Err(e) => {
                            tracing::warn!(error = %e, "router: search failed, trying generation");
                            failed = true;
                        }
                    }
                }
                Step::Generate => match self.generation.try_generate(input, context).await {
                    Ok(text) => {
                        tracing::info!(%category, "router: answered from generation");
                        return RouterOutcome {
                            reply: ConversationTurn::assistant(text, Provenance::Ai),
                            category,
                            search_results: None,
                            notice: None,
                        };
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "router: generation failed, using mock response");
                        failed = true;
                    }
                },
                Step::Mock => break,
            }
        }

        let text = mock_bank::respond(input, rng);
        tracing::info!(%category, topic = mock_bank::resolve(input).as_str(), "router: answered from mock bank");
        RouterOutcome {
            reply: ConversationTurn::assistant(text, Provenance::Ai),
            category,
            search_results: None,
            notice: failed.then(|| FALLBACK_NOTICE.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
