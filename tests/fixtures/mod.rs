//! Customer messages with the edition they should resolve to.

use gin_concierge::models::category::Category;
use gin_concierge::services::intent::MatchStrategy;

#[derive(Debug, Clone)]
pub struct UtteranceFixture {
    pub message: &'static str,
    pub expected: Option<Category>,
    pub strategy: Option<MatchStrategy>,
    pub description: &'static str,
}

pub const INTENT_FIXTURES: &[UtteranceFixture] = &[
    UtteranceFixture {
        message: "Rotkäppchen",
        expected: Some(Category::Rotkaeppchen),
        strategy: Some(MatchStrategy::Keyword),
        description: "umlaut spelling",
    },
    UtteranceFixture {
        message: "ROTKAEPPCHEN",
        expected: Some(Category::Rotkaeppchen),
        strategy: Some(MatchStrategy::Keyword),
        description: "digraph spelling, upper case",
    },
    UtteranceFixture {
        message: "rotkapp",
        expected: Some(Category::Rotkaeppchen),
        strategy: Some(MatchStrategy::Alias),
        description: "truncated name",
    },
    UtteranceFixture {
        message: "rotkapchen",
        expected: Some(Category::Rotkaeppchen),
        strategy: Some(MatchStrategy::Alias),
        description: "alias that is also a keyword",
    },
    UtteranceFixture {
        message: "Zeig mir Froschkönig",
        expected: Some(Category::Froschkoenig),
        strategy: Some(MatchStrategy::Keyword),
        description: "edition inside a sentence",
    },
    UtteranceFixture {
        message: "Gutshof Classic bitte",
        expected: Some(Category::Classic),
        strategy: Some(MatchStrategy::Keyword),
        description: "multi-word keyword",
    },
    UtteranceFixture {
        message: "stern",
        expected: Some(Category::Sterntaler),
        strategy: Some(MatchStrategy::Token),
        description: "partial word",
    },
    UtteranceFixture {
        message: "limeta",
        expected: Some(Category::Limetta),
        strategy: Some(MatchStrategy::Fuzzy),
        description: "missing letter",
    },
    UtteranceFixture {
        message: "Mandrina",
        expected: Some(Category::Mandarina),
        strategy: Some(MatchStrategy::Fuzzy),
        description: "swallowed vowel",
    },
    UtteranceFixture {
        message: "lasskidk",
        expected: Some(Category::Classic),
        strategy: Some(MatchStrategy::Fuzzy),
        description: "scrambled spelling close to a keyword",
    },
    UtteranceFixture {
        message: "rostka",
        expected: None,
        strategy: None,
        description: "close to rosata only when scored message-first",
    },
    UtteranceFixture {
        message: "Versand nach Österreich",
        expected: None,
        strategy: None,
        description: "no edition named",
    },
    UtteranceFixture {
        message: "xyz",
        expected: None,
        strategy: None,
        description: "below the fuzzy floor",
    },
    UtteranceFixture {
        message: "",
        expected: None,
        strategy: None,
        description: "empty message",
    },
];
