//! Synonym graph and search-term expansion for Polysift.
//!
//! This module provides the synonym-aware side of corpus filtering: loading a
//! canonical-term -> synonym-list graph from JSON, inverting it into a
//! term -> canonical index, and expanding requested property terms into their
//! full synonym groups.

pub mod expander;
pub mod graph;
pub mod index;

// Re-export commonly used types
pub use expander::expand_search_terms;
pub use graph::SynonymGraph;
pub use index::TermIndex;
