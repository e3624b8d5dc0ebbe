//! Learning resources — subject choice, relevance filter, curated padding.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;

use super::types::LearningResource;

/// Minimum list length; short fetches are padded from the curated list.
pub const MIN_LEARNING_RESOURCES: usize = 6;

pub const SUBJECTS: &[&str] = &[
    "climate_change",
    "environmental_protection",
    "sustainability",
    "conservation_of_natural_resources",
    "ecology",
];

const TITLE_KEYWORDS: &[&str] = &[
    "environment",
    "climate",
    "earth",
    "sustainable",
    "ecology",
    "nature",
    "conservation",
    "green",
    "planet",
];

const SUBJECT_KEYWORDS: &[&str] = &["environment", "climate", "ecology"];

const BOOK_LINK_BASE: &str = "https://openlibrary.org";
const COVER_URL_BASE: &str = "https://covers.openlibrary.org/b/id";

/// Uniform-random subject to browse.
pub fn pick_subject<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUBJECTS.choose(rng).copied().unwrap_or(SUBJECTS[0])
}

/// Works from a subject listing whose title, or one of whose subjects,
/// mentions an environmental keyword. Works without a key or title are skipped.
#[must_use]
pub fn relevant_works(data: &Value, subject: &str) -> Vec<LearningResource> {
    let works = data.get("works").and_then(Value::as_array);
    works
        .into_iter()
        .flatten()
        .filter(|work| is_relevant(work))
        .filter_map(|work| to_resource(work, subject))
        .collect()
}

fn is_relevant(work: &Value) -> bool {
    let title = work.get("title").and_then(Value::as_str).unwrap_or_default().to_lowercase();
    if TITLE_KEYWORDS.iter().any(|k| title.contains(k)) {
        return true;
    }
    work.get("subject")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .any(|s| {
            let s = s.to_lowercase();
            SUBJECT_KEYWORDS.iter().any(|k| s.contains(k))
        })
}

fn to_resource(work: &Value, subject: &str) -> Option<LearningResource> {
    let key = work.get("key").and_then(Value::as_str)?;
    let title = work.get("title").and_then(Value::as_str)?;

    let description = work
        .get("description")
        .and_then(|d| d.get("value"))
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .map_or_else(
            || {
                let published = work
                    .get("first_publish_year")
                    .and_then(Value::as_i64)
                    .map_or_else(|| "recently".to_string(), |y| y.to_string());
                format!("A book about {} published {published}.", subject.replace('_', " "))
            },
            str::to_string,
        );

    let image_url = work
        .get("cover_id")
        .and_then(Value::as_i64)
        .map(|id| format!("{COVER_URL_BASE}/{id}-M.jpg"));

    Some(LearningResource {
        id: key.to_string(),
        title: title.to_string(),
        description,
        link: format!("{BOOK_LINK_BASE}{key}"),
        category: "Book".to_string(),
        image_url,
    })
}

/// Top up `resources` from the front of the curated list until it holds
/// [`MIN_LEARNING_RESOURCES`] entries.
pub fn pad_with_curated(resources: &mut Vec<LearningResource>) {
    let needed = MIN_LEARNING_RESOURCES.saturating_sub(resources.len());
    resources.extend(curated_learning_resources().into_iter().take(needed));
}

fn curated(id: &str, title: &str, description: &str, link: &str, category: &str) -> LearningResource {
    LearningResource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        category: category.to_string(),
        image_url: None,
    }
}

/// Hand-picked learning resources used for padding and as the fallback list.
#[must_use]
pub fn curated_learning_resources() -> Vec<LearningResource> {
    let mut climate = curated(
        "1",
        "Climate Change: The Science, Impacts and Solutions",
        "A comprehensive guide to understanding the science of climate change, its global impacts, and potential solutions to mitigate its effects.",
        "https://climate.nasa.gov/evidence/",
        "Guide",
    );
    climate.image_url = Some(
        "https://climate.nasa.gov/system/internal_resources/details/original/103_shutterstock_88550854-740px.jpg"
            .to_string(),
    );

    vec![
        climate,
        curated(
            "2",
            "Sustainable Living: A Practical Guide",
            "Practical tips and strategies for reducing your environmental footprint in everyday life, from energy conservation to waste reduction.",
            "https://www.globalstewards.org/ecotips.htm",
            "Guide",
        ),
        curated(
            "3",
            "Biodiversity and Conservation in the 21st Century",
            "Learn about the importance of biodiversity, current threats to ecosystems, and how conservation efforts are making a difference globally.",
            "https://www.worldwildlife.org/initiatives/wildlife-conservation",
            "Article",
        ),
        curated(
            "4",
            "Renewable Energy Technologies Explained",
            "An overview of different renewable energy sources including solar, wind, hydro, and geothermal, and their role in combating climate change.",
            "https://www.eia.gov/energyexplained/renewable-sources/",
            "Guide",
        ),
        curated(
            "5",
            "The Ocean Plastic Crisis: Solutions for a Cleaner Future",
            "Understand the crisis of plastic pollution in our oceans, its impact on marine life, and what's being done globally to address it.",
            "https://oceanservice.noaa.gov/hazards/marinedebris/",
            "Article",
        ),
        curated(
            "6",
            "Sustainable Agriculture: Feeding the World Without Destroying It",
            "Explore how sustainable farming practices can help protect the environment while ensuring food security for a growing global population.",
            "https://www.nrcs.usda.gov/conservation-basics/conservation-by-state/sustainable-agriculture",
            "Guide",
        ),
        curated(
            "7",
            "Environmental Justice: Ensuring Equity in the Green Transition",
            "An examination of how environmental issues disproportionately affect disadvantaged communities and approaches to ensure a just transition.",
            "https://www.epa.gov/environmentaljustice",
            "Article",
        ),
        curated(
            "8",
            "The Sixth Extinction: Understanding Biodiversity Loss",
            "An exploration of the current mass extinction event, its causes, and what can be done to prevent further loss of species.",
            "https://www.nationalgeographic.com/animals/article/sixth-extinction-explained",
            "Article",
        ),
        curated(
            "9",
            "Green Building Design: Principles and Practices",
            "Learn about sustainable architecture and how green building practices can reduce environmental impact while creating healthier spaces.",
            "https://www.usgbc.org/leed",
            "Guide",
        ),
    ]
}

#[cfg(test)]
#[path = "learning_test.rs"]
mod tests;
