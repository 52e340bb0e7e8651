//! Inverted term index derived from a [`SynonymGraph`].

use ahash::AHashMap;

use crate::synonym::graph::SynonymGraph;

/// Mapping from lowercase term to its owning canonical term.
///
/// Built as a pure fold over the graph's groups in source-file insertion
/// order. Ownership is first-write-wins: the first canonical processed to
/// claim a lowercase string keeps it, and later canonicals referencing the
/// same string are ignored for indexing. This prevents a narrow technical
/// synonym in a later group from capturing a broad common term (e.g. "Tg"
/// must keep resolving to the glass transition group even if a thermal
/// analysis group lists it too).
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    /// Lowercase term -> canonical term (case-preserved).
    terms: AHashMap<String, String>,
}

impl TermIndex {
    /// Build the index from a synonym graph.
    ///
    /// Each canonical term claims its own lowercase form first, then its
    /// synonyms in list order.
    pub fn build(graph: &SynonymGraph) -> Self {
        let mut terms: AHashMap<String, String> = AHashMap::new();

        for (canonical, synonyms) in graph.iter() {
            terms
                .entry(canonical.to_lowercase())
                .or_insert_with(|| canonical.to_string());
            for synonym in synonyms {
                terms
                    .entry(synonym.to_lowercase())
                    .or_insert_with(|| canonical.to_string());
            }
        }

        TermIndex { terms }
    }

    /// Look up the canonical term owning `term` (matched case-insensitively).
    pub fn canonical(&self, term: &str) -> Option<&str> {
        self.terms.get(&term.to_lowercase()).map(|s| s.as_str())
    }

    /// Get the number of indexed terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
