//! Result normalization, placeholder results, and summaries.

use std::fmt::Write;

use reqwest::Url;
use serde_json::Value;

use super::types::SearchResult;

const SUMMARY_LIMIT: usize = 3;

pub const NO_RESULTS_SUMMARY: &str = "I couldn't find current information on that topic. Please try a different query or ask me for general advice instead.";
const SUMMARY_PREFIX: &str = "Based on current information I found:";
const SUMMARY_SUFFIX: &str = "This information is based on current search results and may change over time.";

/// Flatten an instant-answer payload into uniform results.
///
/// Takes the top-level abstract (if any) followed by every related topic
/// that carries text and is not itself a nested topic group.
#[must_use]
pub fn normalize(data: &Value) -> Vec<SearchResult> {
    let mut results = Vec::new();

    if let Some(abstract_text) = non_empty_str(data, "Abstract") {
        results.push(SearchResult::new(
            non_empty_str(data, "Heading").unwrap_or("Main Result"),
            abstract_text,
            non_empty_str(data, "AbstractURL").unwrap_or_default(),
        ));
    }

    let topics = data.get("RelatedTopics").and_then(Value::as_array);
    for topic in topics.into_iter().flatten() {
        if topic.get("Topics").is_some_and(|t| !t.is_null()) {
            continue;
        }
        let Some(text) = non_empty_str(topic, "Text") else {
            continue;
        };
        let url = non_empty_str(topic, "FirstURL").unwrap_or_default();
        let title = host_of(url).unwrap_or_else(|| "Related Information".to_string());
        results.push(SearchResult::new(title, text, url));
    }

    results
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// Illustrative results used when the backend answers but finds nothing.
#[must_use]
pub fn placeholder_results(query: &str) -> Vec<SearchResult> {
    let lower = query.to_lowercase();
    if lower.contains("volunteer") || lower.contains("opportunities") {
        vec![
            SearchResult::new(
                "VolunteerMatch.org",
                "There are currently over 5,000 environmental volunteer opportunities available nationwide. Popular options include beach cleanups, tree planting events, and wildlife conservation projects. Many organizations are looking for volunteers for upcoming Earth Day events in April.",
                "https://www.volunteermatch.org/environmental",
            ),
            SearchResult::new(
                "Conservation.org",
                "Conservation International is currently recruiting volunteers for their Ecosystem Monitoring Program. Volunteers help collect data on local ecosystems to track biodiversity and climate change impacts. Training is provided and no prior experience is necessary.",
                "https://www.conservation.org/volunteer",
            ),
        ]
    } else if lower.contains("event") || lower.contains("happening") {
        vec![
            SearchResult::new(
                "EarthDay.org",
                "Earth Day 2023 will be celebrated on April 22nd with thousands of events worldwide. This year's theme is 'Invest In Our Planet' with a focus on climate action. Major cities are hosting sustainability fairs, workshops, and community cleanups throughout April.",
                "https://www.earthday.org/events",
            ),
            SearchResult::new(
                "SierraClub.org",
                "The Sierra Club has announced their summer environmental education series with virtual and in-person events from June through August. Topics include renewable energy, sustainable agriculture, and environmental justice. Registration is now open for all events.",
                "https://www.sierraclub.org/events",
            ),
        ]
    } else {
        vec![
            SearchResult::new(
                "Environmental News Network",
                "Recent environmental initiatives include the launch of the Global Plastic Reduction Pact, with 50 countries committing to reduce single-use plastics by 50% by 2030. Several major corporations have also announced new sustainability goals focusing on carbon neutrality and circular economy principles.",
                "https://www.enn.com/latest",
            ),
            SearchResult::new(
                "GreenMatters.com",
                "The latest environmental technology innovations include new affordable solar panel designs, biodegradable packaging materials made from agricultural waste, and more efficient water purification systems for developing regions. These technologies are expected to become widely available within the next year.",
                "https://www.greenmatters.com/innovations",
            ),
        ]
    }
}

/// Human-readable digest of at most the first three results.
#[must_use]
pub fn summarize(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_SUMMARY.to_string();
    }

    let mut summary = format!("{SUMMARY_PREFIX}\n\n");
    for (i, result) in results.iter().take(SUMMARY_LIMIT).enumerate() {
        let _ = writeln!(summary, "{}. {}", i + 1, result.snippet);
        if !result.url.is_empty() {
            let _ = writeln!(summary, "   Source: {}", result.url);
        }
        summary.push('\n');
    }
    summary.push_str(SUMMARY_SUFFIX);
    summary
}

#[cfg(test)]
#[path = "results_test.rs"]
mod tests;
