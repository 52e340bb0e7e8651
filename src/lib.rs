//! # Polysift
//!
//! A synonym-aware corpus filter for polymer-literature mining.
//!
//! Polysift decides, per document, whether it contains credible evidence that
//! some numeric property value is attached to a polymer mention. It does this
//! with term matching over free text rather than a full NLP pipeline: property
//! terms are expanded through a synonym graph, documents are split into rough
//! sentences, and a sentence counts as evidence only when a polymer mention, a
//! property mention, and a numeric value all co-occur in it.
//!
//! ## Features
//!
//! - Synonym graph loading with tolerant parsing
//! - Search-term expansion with first-match-wins term ownership
//! - Heuristic sentence segmentation
//! - Independent polymer / property / value signal detection
//! - Corpus filtering with pass/fail lists and reasons

pub mod cli;
pub mod detect;
pub mod document;
pub mod error;
pub mod filter;
pub mod segment;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
