//! Mock response bank — canned answers used when no backend can answer.
//!
//! DESIGN
//! ======
//! A static table from topic to candidate paragraphs. Topic resolution is a
//! first-match-wins keyword scan in a fixed order; overlapping keywords
//! ("help" is a volunteer keyword) resolve to whichever topic is checked
//! first. Selection within a topic draws from the injected random source so
//! tests can seed it.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::classify::{CREATOR_KEYWORDS, contains_any, is_greeting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Plastic,
    Energy,
    Reforestation,
    Volunteer,
    Success,
    Identity,
    Greeting,
    Default,
    Creator,
}

impl Topic {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Energy => "energy",
            Self::Reforestation => "reforestation",
            Self::Volunteer => "volunteer",
            Self::Success => "success",
            Self::Identity => "identity",
            Self::Greeting => "greeting",
            Self::Default => "default",
            Self::Creator => "creator",
        }
    }

    /// Candidate replies for this topic. Never empty.
    #[must_use]
    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Self::Plastic => PLASTIC,
            Self::Energy => ENERGY,
            Self::Reforestation => REFORESTATION,
            Self::Volunteer => VOLUNTEER,
            Self::Success => SUCCESS,
            Self::Identity => IDENTITY,
            Self::Greeting => GREETING,
            Self::Default => DEFAULT,
            Self::Creator => CREATOR,
        }
    }
}

/// Topic keyword rules, scanned in order.
const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (Topic::Plastic, &["plastic", "waste", "recycle"]),
    (Topic::Energy, &["energy", "electricity", "power", "efficient"]),
    (Topic::Reforestation, &["reforestation", "tree", "forest", "plant"]),
    (Topic::Volunteer, &["volunteer", "help", "participate", "join"]),
    (Topic::Success, &["success", "story", "inspire", "example"]),
];

const LOOSE_IDENTITY_KEYWORDS: &[&str] = &["your name", "who are you"];
const LOOSE_IDENTITY_EXACT: &[&str] = &["name?", "what is your name", "whats your name"];

/// Resolve the topic for a general query by keyword scan. Falls back to
/// [`Topic::Default`].
#[must_use]
pub fn resolve_topic(input: &str) -> Topic {
    let lower = input.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map_or(Topic::Default, |(topic, _)| *topic)
}

/// Resolve the topic for any input, including the persona questions the bank
/// answers itself (creator, greeting, identity).
#[must_use]
pub fn resolve(input: &str) -> Topic {
    let lower = input.to_lowercase();
    let exact = lower.trim();

    if contains_any(&lower, CREATOR_KEYWORDS) {
        Topic::Creator
    } else if is_greeting(exact) {
        Topic::Greeting
    } else if contains_any(&lower, LOOSE_IDENTITY_KEYWORDS) || LOOSE_IDENTITY_EXACT.contains(&exact) {
        Topic::Identity
    } else {
        resolve_topic(&lower)
    }
}

/// Uniform-random pick within a topic.
pub fn pick<R: Rng + ?Sized>(topic: Topic, rng: &mut R) -> &'static str {
    topic.responses().choose(rng).copied().unwrap_or(DEFAULT[0])
}

/// Canned reply for `input`. Always non-empty.
///
/// Creator and identity questions get the first entry of their topic;
/// everything else is drawn at random from the resolved topic.
pub fn respond<R: Rng + ?Sized>(input: &str, rng: &mut R) -> &'static str {
    match resolve(input) {
        topic @ (Topic::Creator | Topic::Identity) => topic.responses()[0],
        topic => pick(topic, rng),
    }
}

// =============================================================================
// RESPONSE TABLE
// =============================================================================

const PLASTIC: &[&str] = &[
    "Reducing plastic waste is crucial for our environment! Here are some practical steps you can take: 1) Use reusable shopping bags, water bottles, and food containers, 2) Buy products with minimal packaging, 3) Avoid single-use plastics like straws and cutlery, 4) Participate in local cleanup events, and 5) Support businesses with sustainable practices. Every small action adds up to make a significant difference!",
    "To reduce plastic waste, start by conducting a plastic audit in your home to identify your biggest sources of plastic. Then replace these items with sustainable alternatives like bamboo toothbrushes, beeswax wraps instead of plastic wrap, and refillable cleaning products. Remember that the most sustainable option is using what you already have before buying new eco-friendly products.",
    "Plastic pollution is a global crisis, with about 8 million tons entering our oceans annually. You can help by avoiding microbeads in personal care products, properly recycling plastics according to your local guidelines, and supporting policies that limit single-use plastics. Consider joining community initiatives like The Plastic Free Challenge to connect with others on the same journey.",
];

const ENERGY: &[&str] = &[
    "Making your home more energy efficient not only reduces your carbon footprint but also saves you money! Start with simple changes like switching to LED bulbs (which use 75% less energy), sealing drafts around windows and doors, and using smart power strips to eliminate phantom energy use. For bigger impact, consider a programmable thermostat, adding insulation, or exploring renewable energy options like solar panels.",
    "Energy efficiency at home begins with understanding your energy usage. Many utility companies offer free energy audits to identify areas for improvement. Focus on your heating and cooling systems first, as they typically account for about 50% of home energy use. Regular maintenance of these systems, along with proper insulation and weatherstripping, can significantly reduce your energy consumption.",
    "For a more energy-efficient home, consider the power of passive design. This includes orienting your home to capture natural light, using thermal mass materials to regulate temperature, installing proper insulation, and utilizing natural ventilation. These approaches work with nature rather than against it, reducing the need for artificial heating, cooling, and lighting.",
];

const REFORESTATION: &[&str] = &[
    "Reforestation projects are making remarkable progress worldwide! One inspiring example is the Great Green Wall initiative in Africa, which aims to grow an 8,000km natural wonder across the width of Africa. Another success story is the Atlantic Forest Restoration Pact in Brazil, which has committed to restoring 15 million hectares of degraded lands by 2050. These projects not only capture carbon but also restore biodiversity and support local communities.",
    "The Bonn Challenge is a global effort to bring 350 million hectares of degraded and deforested landscapes into restoration by 2030. So far, 61 countries have made commitments to restore 210 million hectares! In India, the Cauvery Calling project aims to plant 2.42 billion trees in the Cauvery river basin, helping revitalize the river and improve soil health while supporting farmers' livelihoods.",
    "Closer to home, the Plant-for-the-Planet initiative allows children to lead tree-planting campaigns in their communities. They've already planted over 13.6 billion trees worldwide! You can support reforestation by donating to reputable organizations, volunteering for local tree-planting events, or even starting a community tree-planting project in your neighborhood.",
];

const VOLUNTEER: &[&str] = &[
    "There are many ways to volunteer for environmental causes! Look for local chapters of organizations like The Nature Conservancy or Sierra Club, which often organize community cleanups, habitat restoration projects, and citizen science initiatives. Many botanical gardens, wildlife refuges, and state parks also need volunteers for conservation work. Websites like VolunteerMatch.org can help you find environmental opportunities specifically in your area.",
    "Consider volunteering with watershed protection groups that monitor and clean local waterways, or join urban farming initiatives that promote sustainable food systems in cities. If you're interested in education, many nature centers and environmental education organizations need volunteers to help with programs for children and adults. The iNaturalist app also allows you to contribute to biodiversity monitoring from anywhere!",
    "For those interested in policy and advocacy, organizations like Citizens' Climate Lobby train volunteers to engage with elected officials on environmental issues. If you have professional skills in areas like law, marketing, or web development, consider offering pro bono services to environmental nonprofits through platforms like Catchafire.org. Even dedicating a few hours monthly can make a significant difference!",
];

const SUCCESS: &[&str] = &[
    "Here's an inspiring environmental success story: The ozone layer is healing! In the 1980s, scientists discovered that chlorofluorocarbons (CFCs) were depleting the ozone layer, which protects us from harmful UV radiation. The world responded with the Montreal Protocol in 1987, phasing out these harmful chemicals. Today, the ozone hole is shrinking, and scientists predict it could fully recover by 2050. This shows how international cooperation can solve global environmental challenges!",
    "The revival of the American bald eagle is a remarkable conservation success. Once on the brink of extinction with only 417 breeding pairs in the 1960s due to DDT pesticide use, the banning of DDT and protection under the Endangered Species Act helped their population rebound to over 9,700 breeding pairs today. They were removed from the endangered species list in 2007, demonstrating how targeted conservation efforts can bring species back from the edge of extinction.",
    "The restoration of the Loess Plateau in China transformed one of the poorest regions in the country. Centuries of farming and deforestation had turned this once-fertile land into a desert. Through a massive restoration project, they implemented terracing, replanting native vegetation, and sustainable farming practices. Within a decade, they restored over 35,000 square kilometers of land, increased agricultural output, reduced poverty, and significantly decreased soil erosion, proving large-scale ecosystem restoration is possible!",
];

const IDENTITY: &[&str] = &[
    "I am Adghal AI, your environmental assistant. My name 'Adghal' means 'jungle' in Arabic, reflecting my focus on nature and environmental sustainability.",
    "My name is Adghal AI. I'm designed to help you find ways to make a positive environmental impact.",
    "I'm Adghal AI, an assistant focused on environmental issues and sustainability. How can I help you today?",
];

const GREETING: &[&str] = &[
    "Hello! I'm Adghal AI, your environmental assistant. How can I help you make a positive impact on the environment today?",
    "Hi there! I'm Adghal AI, here to help with environmental questions and suggestions. What would you like to know about today?",
    "Greetings! I'm Adghal AI, your guide to environmental action. How can I assist you in making eco-friendly choices today?",
];

const DEFAULT: &[&str] = &[
    "As Adghal AI, I'm passionate about helping you find ways to make a positive environmental impact! Whether you're interested in reducing your carbon footprint, supporting conservation efforts, or learning about sustainable practices, I'm here to provide information and inspiration. What specific environmental topic would you like to explore today?",
    "Environmental action takes many forms, from individual lifestyle changes to community initiatives and policy advocacy. The key is finding approaches that align with your interests and capabilities. Would you like to learn about reducing household waste, supporting biodiversity, sustainable transportation options, or perhaps how to get involved with local environmental groups?",
    "The environmental challenges we face today require collective action, but individual contributions matter too! Small changes in our daily habits can add up to significant positive impacts when adopted widely. I'd be happy to suggest some simple, effective ways you can contribute to environmental protection based on your specific interests or circumstances.",
];

const CREATOR: &[&str] = &[
    "I was created by Anas Hmidan, someone who cares deeply about our planet and wants to inspire positive change. With a blend of human creativity and AI technology, I exist to help people like you make a difference for nature and our future.",
];

#[cfg(test)]
#[path = "mock_bank_test.rs"]
mod tests;
