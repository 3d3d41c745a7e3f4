use serde::Serialize;
use std::collections::HashMap;
use strum::Display;
use tracing::debug;

use crate::models::category::Category;
use crate::services::catalog::Catalog;
use crate::services::normalize::normalize;
use crate::services::similarity::FuzzyMetric;

/// Minimum similarity for the fuzzy fallback to accept a keyword.
pub const FUZZY_CUTOFF: f64 = 0.72;

/// One stage of the layered edition matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStrategy {
    /// Whole message equals a known misspelling.
    Alias,
    /// A keyword occurs somewhere in the message.
    Keyword,
    /// A single word overlaps a keyword.
    Token,
    /// Whole message is close enough to a keyword.
    Fuzzy,
}

/// Stages in the order they are tried. The first one that matches wins.
pub const STRATEGY_ORDER: [MatchStrategy; 4] = [
    MatchStrategy::Alias,
    MatchStrategy::Keyword,
    MatchStrategy::Token,
    MatchStrategy::Fuzzy,
];

/// Which edition matched, how, and on what.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentMatch {
    pub category: Category,
    pub strategy: MatchStrategy,
    /// Alias key or keyword that produced the match.
    pub keyword: String,
    /// 1.0 for exact stages, the similarity ratio for fuzzy matches.
    pub score: f64,
}

/// Maps free text to a Gutshof edition.
///
/// Exact and substring stages are cheap and unambiguous; the fuzzy stage is a
/// last resort bounded by a similarity floor so short or generic messages do
/// not resolve to an edition by accident.
#[derive(Debug)]
pub struct IntentClassifier {
    aliases: HashMap<String, Category>,
    keywords: Vec<(Category, Vec<String>)>,
    metric: FuzzyMetric,
    cutoff: f64,
}

impl IntentClassifier {
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_fuzzy(catalog, FuzzyMetric::default(), FUZZY_CUTOFF)
    }

    pub fn with_fuzzy(catalog: &Catalog, metric: FuzzyMetric, cutoff: f64) -> Self {
        let aliases = catalog
            .aliases
            .iter()
            .map(|(alias, category)| (normalize(alias), *category))
            .filter(|(alias, _)| !alias.is_empty())
            .collect();

        let keywords = catalog
            .keywords
            .iter()
            .map(|entry| {
                let mut kws: Vec<String> = Vec::with_capacity(entry.keywords.len());
                for kw in entry.keywords.iter().map(|k| normalize(k)) {
                    if !kw.is_empty() && !kws.contains(&kw) {
                        kws.push(kw);
                    }
                }
                (entry.category, kws)
            })
            .collect();

        Self {
            aliases,
            keywords,
            metric,
            cutoff,
        }
    }

    /// Resolve `text` to an edition, or `None`.
    pub fn extract_intent(&self, text: &str) -> Option<Category> {
        self.classify(text).map(|m| m.category)
    }

    /// Like [`extract_intent`](Self::extract_intent) but reports which stage
    /// matched.
    pub fn classify(&self, text: &str) -> Option<IntentMatch> {
        self.classify_normalized(&normalize(text))
    }

    pub(crate) fn classify_normalized(&self, normalized: &str) -> Option<IntentMatch> {
        let found = STRATEGY_ORDER
            .iter()
            .find_map(|strategy| self.apply(*strategy, normalized));

        if let Some(ref m) = found {
            debug!(
                category = %m.category,
                strategy = %m.strategy,
                keyword = %m.keyword,
                score = m.score,
                "Edition intent matched"
            );
        }
        found
    }

    /// Run a single stage against already normalized text.
    pub fn apply(&self, strategy: MatchStrategy, normalized: &str) -> Option<IntentMatch> {
        match strategy {
            MatchStrategy::Alias => self.match_alias(normalized),
            MatchStrategy::Keyword => self.match_keyword(normalized),
            MatchStrategy::Token => self.match_token(normalized),
            MatchStrategy::Fuzzy => self.match_fuzzy(normalized),
        }
    }

    fn match_alias(&self, normalized: &str) -> Option<IntentMatch> {
        self.aliases.get(normalized).map(|category| IntentMatch {
            category: *category,
            strategy: MatchStrategy::Alias,
            keyword: normalized.to_string(),
            score: 1.0,
        })
    }

    fn match_keyword(&self, normalized: &str) -> Option<IntentMatch> {
        for (category, kws) in &self.keywords {
            if let Some(kw) = kws.iter().find(|kw| normalized.contains(kw.as_str())) {
                return Some(IntentMatch {
                    category: *category,
                    strategy: MatchStrategy::Keyword,
                    keyword: kw.clone(),
                    score: 1.0,
                });
            }
        }
        None
    }

    fn match_token(&self, normalized: &str) -> Option<IntentMatch> {
        for token in normalized.split_whitespace() {
            for (category, kws) in &self.keywords {
                let hit = kws
                    .iter()
                    .find(|kw| kw.as_str() == token || kw.contains(token) || token.contains(kw.as_str()));
                if let Some(kw) = hit {
                    return Some(IntentMatch {
                        category: *category,
                        strategy: MatchStrategy::Token,
                        keyword: kw.clone(),
                        score: 1.0,
                    });
                }
            }
        }
        None
    }

    fn match_fuzzy(&self, normalized: &str) -> Option<IntentMatch> {
        let mut best: Option<(f64, &str, Category)> = None;

        for (category, kws) in &self.keywords {
            for kw in kws {
                // keyword first: the sequence ratio is not symmetric
                let score = self.metric.score(kw, normalized);
                let better = match best {
                    None => true,
                    // equal scores go to the greater keyword
                    Some((best_score, best_kw, _)) => {
                        score > best_score || (score == best_score && kw.as_str() > best_kw)
                    }
                };
                if better {
                    best = Some((score, kw.as_str(), *category));
                }
            }
        }

        best.filter(|(score, _, _)| *score >= self.cutoff)
            .map(|(score, kw, category)| IntentMatch {
                category,
                strategy: MatchStrategy::Fuzzy,
                keyword: kw.to_string(),
                score,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(&Catalog::default())
    }

    #[test]
    fn test_keyword_in_sentence() {
        let m = classifier().classify("Zeig mir Rotkäppchen bitte").unwrap();
        assert_eq!(m.category, Category::Rotkaeppchen);
        assert_eq!(m.strategy, MatchStrategy::Keyword);
    }

    #[test]
    fn test_alias_exact_match() {
        let m = classifier().classify("Rotkaep").unwrap();
        assert_eq!(m.category, Category::Rotkaeppchen);
        assert_eq!(m.strategy, MatchStrategy::Alias);
    }

    #[test]
    fn test_alias_beats_keyword_for_other_category() {
        let mut catalog = Catalog::default();
        catalog.aliases.insert("classic".to_string(), Category::Mandarina);
        let classifier = IntentClassifier::new(&catalog);

        let m = classifier.classify("Classic").unwrap();
        assert_eq!(m.category, Category::Mandarina);
        assert_eq!(m.strategy, MatchStrategy::Alias);

        // Only the whole message counts as an alias
        assert_eq!(classifier.extract_intent("classic bitte"), Some(Category::Classic));
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        assert_eq!(
            classifier().extract_intent("limetta oder classic"),
            Some(Category::Classic)
        );
        assert_eq!(
            classifier().extract_intent("mandarina und rotkaeppchen"),
            Some(Category::Rotkaeppchen)
        );
    }

    #[test]
    fn test_token_stage_matches_partial_name() {
        let m = classifier().classify("frosch").unwrap();
        assert_eq!(m.category, Category::Froschkoenig);
        assert_eq!(m.strategy, MatchStrategy::Token);
        assert_eq!(m.keyword, "froschkoenig");
    }

    #[test]
    fn test_fuzzy_typo() {
        let m = classifier().classify("Sterntahler").unwrap();
        assert_eq!(m.category, Category::Sterntaler);
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
        assert!(m.score >= FUZZY_CUTOFF);
    }

    #[test]
    fn test_fuzzy_scores_keyword_against_message() {
        // "rosata" vs "rostka" is 0.67, the reverse order would give 0.83
        assert_eq!(classifier().extract_intent("rostka"), None);
        assert_eq!(classifier().extract_intent("stritaber"), None);

        let m = classifier().classify("lasskidk").unwrap();
        assert_eq!(m.category, Category::Classic);
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
        assert_eq!(m.keyword, "klassik");
        assert!((m.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_floor_rejects_unrelated_text() {
        assert_eq!(classifier().extract_intent("weinbrand"), None);
        assert_eq!(classifier().extract_intent("was ist mit dem gin"), None);
    }

    #[test]
    fn test_empty_text_has_no_intent() {
        assert_eq!(classifier().extract_intent(""), None);
        assert_eq!(classifier().extract_intent("?!"), None);
    }

    #[test]
    fn test_single_stage_in_isolation() {
        let c = classifier();
        assert!(c.apply(MatchStrategy::Alias, "sterntaler").is_none());
        assert!(c.apply(MatchStrategy::Keyword, "sterntaler").is_some());
        assert!(c.apply(MatchStrategy::Fuzzy, "sterntaler").is_some());
    }

    #[test]
    fn test_jaro_winkler_metric() {
        let c = IntentClassifier::with_fuzzy(&Catalog::default(), FuzzyMetric::JaroWinkler, 0.9);
        let m = c.classify("mandarine").unwrap();
        assert_eq!(m.category, Category::Mandarina);
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        // "abcd" vs "bcde" scores exactly 0.75
        let mut catalog = Catalog::default();
        catalog.keywords = vec![crate::services::catalog::CategoryKeywords {
            category: Category::Rosata,
            keywords: vec!["bcde".to_string()],
        }];
        let c = IntentClassifier::with_fuzzy(&catalog, FuzzyMetric::Sequence, 0.75);
        assert_eq!(c.extract_intent("abcd"), Some(Category::Rosata));
        let strict = IntentClassifier::with_fuzzy(&catalog, FuzzyMetric::Sequence, 0.76);
        assert_eq!(strict.extract_intent("abcd"), None);
    }
}
