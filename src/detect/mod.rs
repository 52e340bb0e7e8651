//! Triple detection: polymer, property, and value signals over sentences.
//!
//! A sentence counts as evidence of a reported polymer property only when all
//! three independent signals co-occur in it: a polymer mention, a property
//! mention from the expanded search-term set, and a numeric value. Order and
//! position within the sentence are not checked; this trades precision for
//! recall at corpus-filtering time, since downstream extraction re-validates
//! exactness.

pub mod polymer;
pub mod property;
pub mod value;

// Re-export all signals for convenient access
pub use polymer::PolymerSignal;
pub use property::PropertySignal;
pub use value::ValueSignal;

use ahash::AHashSet;

use crate::error::Result;

/// Trait for pure signal extractors over a sentence.
///
/// Each extractor returns the set of matches it found, independent of the
/// other signals, so the three can be unit-tested in isolation and composed
/// by logical AND.
pub trait Signal: Send + Sync {
    /// Find all matches of this signal in the sentence.
    fn matches(&self, sentence: &str) -> Vec<String>;

    /// Get the name of this signal (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Detector for (polymer, property, value) triples within a single sentence.
///
/// # Examples
///
/// ```
/// use ahash::AHashSet;
/// use polysift::detect::TripleDetector;
///
/// let mut terms = AHashSet::new();
/// terms.insert("tg".to_string());
/// terms.insert("glass transition".to_string());
/// let detector = TripleDetector::new(&terms).unwrap();
///
/// assert!(detector.sentence_qualifies(
///     "The polymer poly(methyl methacrylate) showed a Tg of 105 °C in this study."
/// ));
/// assert!(!detector.sentence_qualifies(
///     "The sample was characterized using standard methods."
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct TripleDetector {
    polymer: PolymerSignal,
    property: PropertySignal,
    value: ValueSignal,
}

impl TripleDetector {
    /// Create a detector for the given expanded property-term set.
    pub fn new(property_terms: &AHashSet<String>) -> Result<Self> {
        Ok(TripleDetector {
            polymer: PolymerSignal::new(),
            property: PropertySignal::new(property_terms)?,
            value: ValueSignal::new(),
        })
    }

    /// Check whether the sentence contains a (polymer, property, value)
    /// triple. All three signals must be present.
    pub fn sentence_qualifies(&self, sentence: &str) -> bool {
        if self.polymer.matches(sentence).is_empty() {
            return false;
        }
        if self.property.matches(sentence).is_empty() {
            return false;
        }
        !self.value.matches(sentence).is_empty()
    }

    /// Get the polymer signal extractor.
    pub fn polymer(&self) -> &PolymerSignal {
        &self.polymer
    }

    /// Get the property signal extractor.
    pub fn property(&self) -> &PropertySignal {
        &self.property
    }

    /// Get the value signal extractor.
    pub fn value(&self) -> &ValueSignal {
        &self.value
    }
}
