//! Parsed document model and the section-parser seam.
//!
//! Corpus documents reach the filter through the [`SectionParser`] trait:
//! a structured view of title, ordered sections, and tables. A minimal
//! HTML-backed implementation ships in [`html`]; richer publisher-specific
//! parsers can plug in behind the same trait.

pub mod html;

// Re-export commonly used types
pub use html::HtmlSectionParser;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named section of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    /// Section name (e.g. "Introduction", "Results").
    pub name: String,
    /// Section body text.
    pub text: String,
}

/// A table with its content flattened to text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table caption, empty if absent.
    #[serde(default)]
    pub caption: String,
    /// Flattened textual content of the table.
    pub content: String,
}

/// Structured form of a corpus document: title, ordered sections, tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Document title, empty if absent.
    pub title: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// Tables in document order.
    pub tables: Vec<Table>,
}

impl ParsedDocument {
    /// Concatenate the title, all non-empty section texts, and all non-empty
    /// flattened table contents into one text blob for sentence segmentation.
    pub fn full_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        for section in &self.sections {
            if !section.text.trim().is_empty() {
                parts.push(section.text.clone());
            }
        }
        for table in &self.tables {
            let content = table.content.trim();
            if !content.is_empty() {
                parts.push(content.to_string());
            }
        }
        parts.join(" ")
    }
}

/// Trait for parsers that turn a source file into a [`ParsedDocument`].
///
/// Implementations must return an error on malformed input; the corpus
/// filter records such documents as failing without aborting the batch.
pub trait SectionParser: Send + Sync {
    /// Parse the document at `path` into its structured form.
    fn parse(&self, path: &Path) -> Result<ParsedDocument>;

    /// Get the name of this parser (for debugging and configuration).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_concatenation() {
        let doc = ParsedDocument {
            title: "A study of blends".to_string(),
            sections: vec![
                Section {
                    name: "Intro".to_string(),
                    text: "First section.".to_string(),
                },
                Section {
                    name: "Empty".to_string(),
                    text: "   ".to_string(),
                },
                Section {
                    name: "Results".to_string(),
                    text: "Second section.".to_string(),
                },
            ],
            tables: vec![
                Table {
                    caption: "Table 1".to_string(),
                    content: "Tg 105 °C".to_string(),
                },
                Table {
                    caption: String::new(),
                    content: "  ".to_string(),
                },
            ],
        };

        assert_eq!(
            doc.full_text(),
            "A study of blends First section. Second section. Tg 105 °C"
        );
    }

    #[test]
    fn test_full_text_empty_document() {
        assert_eq!(ParsedDocument::default().full_text(), "");
    }
}
