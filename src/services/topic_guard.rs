use regex::Regex;

use crate::services::catalog::{Catalog, CatalogError};
use crate::services::normalize::normalize;

/// Allow/deny gate that keeps the assistant on gin topics.
///
/// Allow keywords are checked first and win unconditionally. Deny patterns
/// only block messages with no in-domain signal, and anything matching
/// neither list is let through.
#[derive(Debug)]
pub struct TopicGuard {
    allow: Vec<String>,
    deny: Vec<Regex>,
}

impl TopicGuard {
    pub fn new(catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut allow: Vec<String> = Vec::with_capacity(catalog.topic_keywords.len());
        for keyword in &catalog.topic_keywords {
            let keyword = normalize(keyword);
            if !keyword.is_empty() && !allow.contains(&keyword) {
                allow.push(keyword);
            }
        }

        let deny = catalog
            .off_topic_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CatalogError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { allow, deny })
    }

    /// Whether `text` may be answered. Normalizes the input itself.
    pub fn is_on_topic(&self, text: &str) -> bool {
        self.is_normalized_on_topic(&normalize(text))
    }

    pub(crate) fn is_normalized_on_topic(&self, normalized: &str) -> bool {
        if self.allow.iter().any(|k| normalized.contains(k.as_str())) {
            return true;
        }
        !self.deny.iter().any(|re| re.is_match(normalized))
    }
}
