//! Property-term mention detection.

use ahash::AHashSet;
use regex::Regex;

use crate::detect::Signal;
use crate::error::{PolysiftError, Result};

/// Signal extractor for property-term mentions.
///
/// Matches each term from the expanded search-term set as a whole word,
/// case-insensitively. Multi-word terms (e.g. "glass transition") must
/// appear as a literal phrase with word boundaries on each end.
#[derive(Debug, Clone)]
pub struct PropertySignal {
    /// Each search term with its compiled whole-word pattern, in sorted
    /// term order for deterministic match reporting.
    patterns: Vec<(String, Regex)>,
}

impl PropertySignal {
    /// Create a property signal extractor for the given term set.
    ///
    /// Terms are expected to be lowercase already (the expander guarantees
    /// this); matching is case-insensitive regardless.
    pub fn new(terms: &AHashSet<String>) -> Result<Self> {
        let mut sorted: Vec<&String> = terms.iter().collect();
        sorted.sort();

        let mut patterns = Vec::with_capacity(sorted.len());
        for term in sorted {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            let regex = Regex::new(&pattern).map_err(|e| {
                PolysiftError::filter(format!("Invalid property term pattern for {term:?}: {e}"))
            })?;
            patterns.push((term.clone(), regex));
        }

        Ok(PropertySignal { patterns })
    }

    /// Get the number of search terms.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the term set is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Signal for PropertySignal {
    fn matches(&self, sentence: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(sentence))
            .map(|(term, _)| term.clone())
            .collect()
    }

    fn name(&self) -> &'static str {
        "property"
    }
}
