//! Synonym graph loaded from a JSON file.
//!
//! The source file groups canonical terms under category keys. Only category
//! keys starting with the [`CATEGORY_MARKER`] prefix are treated as synonym
//! data; other top-level keys may hold metadata and are ignored. Parsing is
//! tolerant: malformed entries are dropped silently and a missing or
//! unreadable file degrades to an empty graph rather than failing the run.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde_json::Value;

/// Prefix marking a top-level JSON key as a synonym category.
///
/// Keys without this prefix (e.g. a `"comment"` or `"version"` key) are
/// ignored, which allows metadata to live alongside the synonym data.
pub const CATEGORY_MARKER: &str = "_";

/// A mapping from canonical property terms to their synonym lists.
///
/// The graph is flattened across categories at load time. If the same
/// canonical term appears in two categories, the later category's list
/// replaces the earlier one (no merge). Category order and canonical order
/// follow the source file, so the replacement is deterministic.
///
/// Every canonical term is implicitly a member of its own synonym group.
/// The graph is built once per filter run and immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct SynonymGraph {
    /// Canonical terms with their synonym lists, in first-insertion order.
    groups: Vec<(String, Vec<String>)>,
    /// Canonical term -> position in `groups`.
    positions: AHashMap<String, usize>,
}

impl SynonymGraph {
    /// Create an empty synonym graph.
    pub fn new() -> Self {
        SynonymGraph::default()
    }

    /// Load a synonym graph from a JSON file.
    ///
    /// The expected schema is `{category: {canonical: [synonyms...]}}` where
    /// only categories whose key starts with [`CATEGORY_MARKER`] are read.
    /// A missing or malformed file yields an empty graph; the filter then
    /// treats all requested terms literally.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return SynonymGraph::new(),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(data) => Self::from_value(&data),
            Err(_) => SynonymGraph::new(),
        }
    }

    /// Build a synonym graph from an already-parsed JSON value.
    ///
    /// Tolerant: non-object categories, non-array synonym lists, and
    /// non-string list entries are dropped silently.
    pub fn from_value(data: &Value) -> Self {
        let mut graph = SynonymGraph::new();

        let Some(categories) = data.as_object() else {
            return graph;
        };

        for (category, mappings) in categories {
            if !category.starts_with(CATEGORY_MARKER) {
                continue;
            }
            let Some(mappings) = mappings.as_object() else {
                continue;
            };
            for (canonical, syn_list) in mappings {
                let Some(syn_list) = syn_list.as_array() else {
                    continue;
                };
                let synonyms: Vec<String> = syn_list
                    .iter()
                    .filter_map(|s| s.as_str().map(|s| s.to_string()))
                    .collect();
                graph.insert(canonical.clone(), synonyms);
            }
        }

        graph
    }

    /// Insert a synonym group, replacing any existing list for the same
    /// canonical term while keeping its original position.
    fn insert(&mut self, canonical: String, synonyms: Vec<String>) {
        match self.positions.get(&canonical) {
            Some(&pos) => self.groups[pos].1 = synonyms,
            None => {
                self.positions.insert(canonical.clone(), self.groups.len());
                self.groups.push((canonical, synonyms));
            }
        }
    }

    /// Get the synonym list for a canonical term (exact, case-sensitive).
    pub fn synonyms(&self, canonical: &str) -> Option<&[String]> {
        self.positions
            .get(canonical)
            .map(|&pos| self.groups[pos].1.as_slice())
    }

    /// Iterate over `(canonical, synonyms)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(canonical, syns)| (canonical.as_str(), syns.as_slice()))
    }

    /// Get the number of canonical terms in the graph.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the graph has no synonym groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
