//! Polymer mention detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Signal;

/// Generic polymer nouns matched as whole words, case-insensitively.
pub const POLYMER_TERMS: &[&str] = &[
    "polymer",
    "polymers",
    "macromolecule",
    "macromolecules",
    "copolymer",
    "copolymers",
    "homopolymer",
    "homopolymers",
    "oligomer",
    "oligomers",
];

static POLYMER_NOUN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b(?:{})\b", POLYMER_TERMS.join("|"));
    Regex::new(&pattern).expect("polymer noun pattern should be valid")
});

/// Structural `poly(...)` notation with arbitrary bracketed content,
/// e.g. `poly(methyl methacrylate)`.
static POLY_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bpoly\s*\(\s*([^)]+)\)").expect("poly(...) pattern should be valid")
});

/// Fixed set of poly-prefixed polymer class names.
static POLY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(poly(?:vinyl|styrene|ethylene|propylene|ester|amide|ether|urethane|imide|saccharide))\b",
    )
    .expect("polymer class pattern should be valid")
});

/// Signal extractor for polymer mentions.
///
/// A sentence carries a polymer signal when it contains a generic polymer
/// noun, a structural `poly(...)` pattern, or a poly-prefixed class name.
/// Any one hit is sufficient.
#[derive(Debug, Clone, Default)]
pub struct PolymerSignal;

impl PolymerSignal {
    /// Create a new polymer signal extractor.
    pub fn new() -> Self {
        PolymerSignal
    }
}

impl Signal for PolymerSignal {
    fn matches(&self, sentence: &str) -> Vec<String> {
        let mut hits: Vec<String> = POLYMER_NOUN
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect();

        for captures in POLY_PAREN.captures_iter(sentence) {
            hits.push(format!("poly({})", captures[1].trim()));
        }
        for captures in POLY_CLASS.captures_iter(sentence) {
            hits.push(captures[1].to_string());
        }

        hits
    }

    fn name(&self) -> &'static str {
        "polymer"
    }
}
