//! Minimal HTML-backed section parser.
//!
//! Regex-based tag stripping, good enough to drive corpus filtering: the
//! title element becomes the document title, table elements become flattened
//! tables, and the remaining text becomes a single body section. This is not
//! a faithful publisher-HTML parser; swap in a richer [`SectionParser`]
//! implementation when section-level structure matters.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::{ParsedDocument, Section, SectionParser, Table};
use crate::error::{PolysiftError, Result};

static TITLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern should be valid")
});

static TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<table\b.*?</table>").expect("table pattern should be valid")
});

static CAPTION_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<caption[^>]*>(.*?)</caption>").expect("caption pattern should be valid")
});

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b.*?</(script|style)>")
        .expect("script/style pattern should be valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("tag pattern should be valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// Strip tags and decode the handful of entities common in article HTML.
fn flatten_html(fragment: &str) -> String {
    let text = TAG.replace_all(fragment, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&deg;", "°");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Regex-based HTML section parser.
///
/// Produces a [`ParsedDocument`] with the `<title>` text as title, one
/// `"body"` section holding the tag-stripped page text (script, style, and
/// table elements removed), and one [`Table`] per `<table>` element with its
/// content flattened to text.
#[derive(Debug, Clone, Default)]
pub struct HtmlSectionParser;

impl HtmlSectionParser {
    /// Create a new HTML section parser.
    pub fn new() -> Self {
        HtmlSectionParser
    }
}

impl SectionParser for HtmlSectionParser {
    fn parse(&self, path: &Path) -> Result<ParsedDocument> {
        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Err(PolysiftError::parse(format!(
                "empty file: {}",
                path.display()
            )));
        }
        if !content.contains('<') {
            return Err(PolysiftError::parse(format!(
                "not an HTML document: {}",
                path.display()
            )));
        }

        let title = TITLE_BLOCK
            .captures(&content)
            .map(|captures| flatten_html(&captures[1]))
            .unwrap_or_default();

        let tables: Vec<Table> = TABLE_BLOCK
            .find_iter(&content)
            .map(|m| {
                let block = m.as_str();
                let caption = CAPTION_BLOCK
                    .captures(block)
                    .map(|captures| flatten_html(&captures[1]))
                    .unwrap_or_default();
                Table {
                    caption,
                    content: flatten_html(block),
                }
            })
            .collect();

        let without_noise = SCRIPT_OR_STYLE.replace_all(&content, " ");
        let without_tables = TABLE_BLOCK.replace_all(&without_noise, " ");
        let body = flatten_html(&without_tables);

        Ok(ParsedDocument {
            title,
            sections: vec![Section {
                name: "body".to_string(),
                text: body,
            }],
            tables,
        })
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_str(html: &str) -> Result<ParsedDocument> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(html.as_bytes()).unwrap();
        HtmlSectionParser::new().parse(file.path())
    }

    #[test]
    fn test_parse_title_body_and_table() {
        let doc = parse_str(
            "<html><head><title>Thermal study</title><style>p { color: red }</style></head>\
             <body><p>The copolymer showed a glass transition at 105 °C.</p>\
             <table><caption>Table 1</caption><tr><td>Tg</td><td>105</td></tr></table>\
             </body></html>",
        )
        .unwrap();

        assert_eq!(doc.title, "Thermal study");
        assert_eq!(doc.sections.len(), 1);
        assert!(
            doc.sections[0]
                .text
                .contains("The copolymer showed a glass transition at 105 °C.")
        );
        // Style content is removed from the body.
        assert!(!doc.sections[0].text.contains("color"));
        // Table content is flattened and excluded from the body section.
        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.tables[0].caption, "Table 1");
        assert!(doc.tables[0].content.contains("Tg 105"));
        assert!(!doc.sections[0].text.contains("Tg 105"));
    }

    #[test]
    fn test_parse_entities() {
        let doc = parse_str("<html><body><p>heated to 105&nbsp;&deg;C &amp; held</p></body></html>")
            .unwrap();
        assert!(doc.sections[0].text.contains("heated to 105 °C & held"));
    }

    #[test]
    fn test_parse_missing_title() {
        let doc = parse_str("<html><body><p>no title here</p></body></html>").unwrap();
        assert_eq!(doc.title, "");
    }

    #[test]
    fn test_parse_empty_file_fails() {
        let err = parse_str("   ").unwrap_err();
        assert!(err.to_string().contains("empty file"));
    }

    #[test]
    fn test_parse_non_html_fails() {
        let err = parse_str("just some plain text").unwrap_err();
        assert!(err.to_string().contains("not an HTML document"));
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let result = HtmlSectionParser::new().parse(Path::new("/nonexistent/paper.html"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parser_name() {
        assert_eq!(HtmlSectionParser::new().name(), "html");
    }
}
