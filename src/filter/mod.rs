//! Corpus filtering: drive the detector across a folder of documents.

pub mod orchestrator;
pub mod outcome;

// Re-export commonly used types
pub use orchestrator::{CorpusFilter, FilterConfig};
pub use outcome::FilterOutcome;
