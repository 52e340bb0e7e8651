//! Corpus filter orchestrator.
//!
//! Expands the requested property terms once, then scores each document in
//! sorted filename order: parse into structured form, concatenate title +
//! sections + tables, segment into sentences, and pass the document as soon
//! as any sentence carries a (polymer, property, value) triple. Parse
//! failures are recorded per document and never abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::TripleDetector;
use crate::document::{HtmlSectionParser, SectionParser};
use crate::error::Result;
use crate::filter::outcome::FilterOutcome;
use crate::segment::SentenceSegmenter;
use crate::synonym::{SynonymGraph, expand_search_terms};

/// Progress is reported every this many documents when verbose.
const PROGRESS_INTERVAL: usize = 50;

/// Output and verbosity settings for a filter run.
///
/// All output artifacts are optional and independently toggled.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Write one passing document name per line to this file.
    pub output_file: Option<PathBuf>,
    /// Write tab-separated `name<TAB>reason` lines for failing documents.
    pub failures_file: Option<PathBuf>,
    /// Copy passing source files into this directory.
    pub copy_to: Option<PathBuf>,
    /// Report progress and summaries on stderr.
    pub verbose: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            output_file: None,
            failures_file: None,
            copy_to: None,
            verbose: true,
        }
    }
}

/// Filters a corpus of documents by (polymer, property, value) triples.
///
/// Strictly sequential: each document is parsed and scored to completion
/// before the next begins, and all output artifacts preserve the sorted
/// input order for reproducibility.
pub struct CorpusFilter {
    parser: Box<dyn SectionParser>,
    segmenter: SentenceSegmenter,
    config: FilterConfig,
}

impl CorpusFilter {
    /// Create a corpus filter using the built-in HTML section parser.
    pub fn new(config: FilterConfig) -> Self {
        CorpusFilter {
            parser: Box::new(HtmlSectionParser::new()),
            segmenter: SentenceSegmenter::new(),
            config,
        }
    }

    /// Replace the section parser (e.g. with a publisher-specific one).
    pub fn with_parser(mut self, parser: Box<dyn SectionParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Filter the documents in `folder`, returning the passing paths in
    /// sorted order.
    ///
    /// Property terms are expanded through the synonym graph loaded from
    /// `synonyms_path` (missing or malformed file degrades to literal term
    /// matching). Output artifacts configured in [`FilterConfig`] are
    /// written before returning.
    pub fn filter_papers(
        &self,
        folder: &Path,
        property_terms: &[String],
        synonyms_path: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        let graph = match synonyms_path {
            Some(path) => SynonymGraph::load(path),
            None => SynonymGraph::new(),
        };

        let mut search_terms = expand_search_terms(property_terms, &graph);
        if search_terms.is_empty() {
            // Fall back to the literal requested terms.
            search_terms = property_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
        }

        if self.config.verbose {
            let mut preview: Vec<&String> = search_terms.iter().collect();
            preview.sort();
            preview.truncate(15);
            eprintln!(
                "Property search terms ({}): {:?}...",
                search_terms.len(),
                preview
            );
        }

        let html_files = list_html_files(folder)?;
        if html_files.is_empty() {
            if self.config.verbose {
                eprintln!("No HTML files found in {}", folder.display());
            }
            if let Some(output_file) = &self.config.output_file {
                write_lines(output_file, std::iter::empty::<String>())?;
            }
            return Ok(Vec::new());
        }

        let detector = TripleDetector::new(&search_terms)?;

        let mut passing: Vec<PathBuf> = Vec::new();
        let mut failing: Vec<(PathBuf, String)> = Vec::new();

        for (i, path) in html_files.iter().enumerate() {
            if self.config.verbose && (i + 1) % PROGRESS_INTERVAL == 0 {
                eprintln!("  Processed {}/{}...", i + 1, html_files.len());
            }

            let document = match self.parser.parse(path) {
                Ok(document) => document,
                Err(e) => {
                    if self.config.verbose {
                        eprintln!("  Error parsing {}: {}", file_name(path), e);
                    }
                    failing.push((path.clone(), FilterOutcome::parse_error(e.to_string()).reason));
                    continue;
                }
            };

            let outcome = self.evaluate_text(&document.full_text(), &detector);
            if outcome.passed {
                passing.push(path.clone());
            } else {
                failing.push((path.clone(), outcome.reason));
            }
        }

        if self.config.verbose {
            eprintln!("\nPassed: {} / {}", passing.len(), html_files.len());
            eprintln!("Failed: {}", failing.len());
        }

        self.write_artifacts(&passing, &failing)?;

        Ok(passing)
    }

    /// Decide whether `full_text` contains at least one qualifying sentence.
    ///
    /// Short-circuits on the first hit; which sentence triggered the pass is
    /// not recorded.
    pub fn evaluate_text(&self, full_text: &str, detector: &TripleDetector) -> FilterOutcome {
        for sentence in self.segmenter.segment(full_text) {
            if detector.sentence_qualifies(&sentence) {
                return FilterOutcome::pass();
            }
        }
        FilterOutcome::fail()
    }

    fn write_artifacts(&self, passing: &[PathBuf], failing: &[(PathBuf, String)]) -> Result<()> {
        if let Some(output_file) = &self.config.output_file {
            write_lines(output_file, passing.iter().map(|p| file_name(p)))?;
            if self.config.verbose {
                eprintln!("Wrote list to {}", output_file.display());
            }
        }

        if let Some(failures_file) = &self.config.failures_file {
            write_lines(
                failures_file,
                failing
                    .iter()
                    .map(|(p, reason)| format!("{}\t{}", file_name(p), reason)),
            )?;
            if self.config.verbose {
                eprintln!("Wrote failures to {}", failures_file.display());
            }
        }

        if let Some(copy_to) = &self.config.copy_to {
            fs::create_dir_all(copy_to)?;
            for path in passing {
                fs::copy(path, copy_to.join(file_name(path)))?;
            }
            if self.config.verbose {
                eprintln!("Copied to {}", copy_to.display());
            }
        }

        Ok(())
    }
}

impl Default for CorpusFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

/// List `.html` files in `folder`, sorted by path for reproducible order.
fn list_html_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();
    Ok(files)
}

/// Final path component as a display string.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write lines to `path`, creating parent directories as needed. An empty
/// iterator still creates an empty file.
fn write_lines<I, S>(path: &Path, lines: I) -> Result<()>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

/// Convenience wrapper: filter `folder` with default configuration plus the
/// given output settings.
pub fn filter_papers(
    folder: &Path,
    property_terms: &[String],
    synonyms_path: Option<&Path>,
    config: FilterConfig,
) -> Result<Vec<PathBuf>> {
    CorpusFilter::new(config).filter_papers(folder, property_terms, synonyms_path)
}
