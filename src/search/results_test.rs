use super::*;
use serde_json::json;

fn result(n: usize) -> SearchResult {
    SearchResult::new(format!("t{n}"), format!("snippet {n}"), format!("https://example.org/{n}"))
}

// =========================================================================
// normalize
// =========================================================================

#[test]
fn normalize_takes_abstract_then_related_topics() {
    let data = json!({
        "Heading": "Composting",
        "Abstract": "Composting turns scraps into soil.",
        "AbstractURL": "https://en.wikipedia.org/wiki/Compost",
        "RelatedTopics": [
            { "Text": "Vermicompost uses worms.", "FirstURL": "https://duckduckgo.com/Vermicompost" },
            { "Name": "See also", "Topics": [{ "Text": "nested", "FirstURL": "https://x.org" }] },
            { "Text": "", "FirstURL": "https://duckduckgo.com/Empty" },
            { "Text": "No link here." }
        ]
    });

    let results = normalize(&data);
    assert_eq!(
        results,
        vec![
            SearchResult::new(
                "Composting",
                "Composting turns scraps into soil.",
                "https://en.wikipedia.org/wiki/Compost"
            ),
            SearchResult::new("duckduckgo.com", "Vermicompost uses worms.", "https://duckduckgo.com/Vermicompost"),
            SearchResult::new("Related Information", "No link here.", ""),
        ]
    );
}

#[test]
fn null_topics_field_is_not_a_group() {
    let results = normalize(&json!({
        "RelatedTopics": [{ "Text": "Mangroves store carbon.", "FirstURL": "https://example.org/m", "Topics": null }]
    }));
    assert_eq!(results, vec![SearchResult::new("example.org", "Mangroves store carbon.", "https://example.org/m")]);
}

#[test]
fn normalize_defaults_missing_heading_and_url() {
    let results = normalize(&json!({ "Abstract": "Bees pollinate crops.", "Heading": "" }));
    assert_eq!(results, vec![SearchResult::new("Main Result", "Bees pollinate crops.", "")]);
}

#[test]
fn normalize_empty_payload_yields_nothing() {
    assert!(normalize(&json!({ "Abstract": "", "RelatedTopics": [] })).is_empty());
    assert!(normalize(&json!({})).is_empty());
    assert!(normalize(&json!({ "RelatedTopics": "not a list" })).is_empty());
}

#[test]
fn unparseable_first_url_falls_back_to_generic_title() {
    let results = normalize(&json!({ "RelatedTopics": [{ "Text": "Hi", "FirstURL": "not a url" }] }));
    assert_eq!(results[0].title, "Related Information");
    assert_eq!(results[0].url, "not a url");
}

// =========================================================================
// placeholder_results
// =========================================================================

#[test]
fn placeholders_are_topic_conditioned() {
    assert_eq!(placeholder_results("Volunteer near me")[0].title, "VolunteerMatch.org");
    assert_eq!(placeholder_results("new opportunities")[0].title, "VolunteerMatch.org");
    assert_eq!(placeholder_results("events this week")[0].title, "EarthDay.org");
    assert_eq!(placeholder_results("what's happening")[0].title, "EarthDay.org");
    assert_eq!(placeholder_results("solar")[0].title, "Environmental News Network");
}

#[test]
fn placeholders_are_never_empty() {
    for query in ["", "volunteer", "event", "anything"] {
        assert!(!placeholder_results(query).is_empty());
    }
}

// =========================================================================
// summarize
// =========================================================================

#[test]
fn summarize_empty_is_fixed_sentence() {
    assert_eq!(summarize(&[]), NO_RESULTS_SUMMARY);
}

#[test]
fn summarize_uses_only_first_three() {
    let results: Vec<_> = (1..=5).map(result).collect();
    let summary = summarize(&results);

    assert!(summary.starts_with("Based on current information I found:\n\n1. snippet 1\n"));
    assert!(summary.contains("3. snippet 3\n   Source: https://example.org/3\n"));
    assert!(!summary.contains("snippet 4"));
    assert!(!summary.contains("snippet 5"));
    assert!(summary.ends_with("may change over time."));
}

#[test]
fn summarize_omits_source_line_without_url() {
    let summary = summarize(&[SearchResult::new("t", "Only text.", "")]);
    assert_eq!(
        summary,
        "Based on current information I found:\n\n1. Only text.\n\nThis information is based on current search results and may change over time."
    );
}
