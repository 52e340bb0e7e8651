//! Command line argument parsing for the Polysift CLI using clap.

use clap::Parser;
use std::path::PathBuf;

/// Polysift - filter papers by (polymer, property, value) triples
#[derive(Parser, Debug, Clone)]
#[command(name = "polysift")]
#[command(about = "Filter papers by (polymer, property, value) triples using property synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PolysiftArgs {
    /// Folder containing per-paper HTML files
    #[arg(value_name = "FOLDER", default_value = "corpus/papers")]
    pub folder: PathBuf,

    /// Property terms to filter for (e.g. 'glass transition' Tg Mw Mn).
    /// Synonyms from the synonyms file are expanded.
    #[arg(long, num_args = 1.., value_name = "TERM")]
    pub properties: Vec<String>,

    /// File with property names (JSON list or one per line). Overrides --properties
    #[arg(long, value_name = "PATH")]
    pub properties_file: Option<PathBuf>,

    /// Path to the property synonyms JSON file
    #[arg(
        long,
        value_name = "PATH",
        default_value = "extraction/polymer_synonyms.json"
    )]
    pub synonyms: PathBuf,

    /// Write the list of passing papers to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write failing papers with reasons to this file
    #[arg(short, long, value_name = "PATH")]
    pub failures: Option<PathBuf>,

    /// Copy passing papers to this directory
    #[arg(long, value_name = "PATH")]
    pub copy_to: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = PolysiftArgs::parse_from(["polysift"]);
        assert_eq!(args.folder, PathBuf::from("corpus/papers"));
        assert_eq!(
            args.synonyms,
            PathBuf::from("extraction/polymer_synonyms.json")
        );
        assert!(args.properties.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_properties_and_outputs() {
        let args = PolysiftArgs::parse_from([
            "polysift",
            "corpus/2019/papers",
            "--properties",
            "glass transition",
            "Tg",
            "Mw",
            "-o",
            "passing.txt",
            "-f",
            "failing.tsv",
            "--copy-to",
            "passing/",
            "-q",
        ]);

        assert_eq!(args.folder, PathBuf::from("corpus/2019/papers"));
        assert_eq!(args.properties, vec!["glass transition", "Tg", "Mw"]);
        assert_eq!(args.output, Some(PathBuf::from("passing.txt")));
        assert_eq!(args.failures, Some(PathBuf::from("failing.tsv")));
        assert_eq!(args.copy_to, Some(PathBuf::from("passing/")));
        assert!(args.quiet);
    }
}
