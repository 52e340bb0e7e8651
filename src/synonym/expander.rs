//! Search-term expansion through the synonym graph.

use ahash::AHashSet;

use crate::synonym::graph::SynonymGraph;
use crate::synonym::index::TermIndex;

/// Expand requested property terms into their full synonym groups.
///
/// Each requested term is trimmed and lowercased; empty terms are dropped.
/// A term that resolves through the [`TermIndex`] contributes its canonical
/// term plus every synonym in the group (all lowercased). A term with no
/// canonical mapping passes through verbatim, so the result is always a
/// superset of the unresolvable requested terms.
///
/// The result is empty only when every requested term is empty or
/// whitespace; the caller is expected to fall back to the literal requested
/// terms in that case.
///
/// # Examples
///
/// ```
/// use polysift::synonym::{SynonymGraph, expand_search_terms};
/// use serde_json::json;
///
/// let graph = SynonymGraph::from_value(&json!({
///     "_thermal": {"Tg": ["glass transition"]}
/// }));
/// let terms = expand_search_terms(&["Tg".to_string(), "Mw".to_string()], &graph);
///
/// assert!(terms.contains("tg"));
/// assert!(terms.contains("glass transition"));
/// assert!(terms.contains("mw")); // unresolved, taken literally
/// ```
pub fn expand_search_terms(requested: &[String], graph: &SynonymGraph) -> AHashSet<String> {
    let index = TermIndex::build(graph);
    let mut search_terms = AHashSet::new();

    for term in requested {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            continue;
        }

        match index.canonical(&term) {
            Some(canonical) => {
                search_terms.insert(canonical.to_lowercase());
                if let Some(synonyms) = graph.synonyms(canonical) {
                    for synonym in synonyms {
                        search_terms.insert(synonym.to_lowercase());
                    }
                }
            }
            None => {
                search_terms.insert(term);
            }
        }
    }

    search_terms
}
