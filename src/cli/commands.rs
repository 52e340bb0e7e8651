//! Command implementation for the Polysift CLI.

use std::fs;

use crate::cli::args::PolysiftArgs;
use crate::error::{PolysiftError, Result};
use crate::filter::{CorpusFilter, FilterConfig};

/// How many passing paper names to echo before truncating the listing.
const LISTING_LIMIT: usize = 20;

/// Execute the filter command.
///
/// Configuration errors (missing corpus folder, no property terms) are
/// returned as errors before any document is touched; the binary maps them
/// to a non-zero exit. Zero passing documents is a valid outcome, not an
/// error.
pub fn execute_command(args: PolysiftArgs) -> Result<()> {
    if !args.folder.exists() {
        return Err(PolysiftError::not_found(format!(
            "folder {}",
            args.folder.display()
        )));
    }

    let property_terms = resolve_property_terms(&args)?;
    if property_terms.is_empty() {
        return Err(PolysiftError::invalid_argument(
            "specify --properties or --properties-file",
        ));
    }

    let config = FilterConfig {
        output_file: args.output.clone(),
        failures_file: args.failures.clone(),
        copy_to: args.copy_to.clone(),
        verbose: !args.quiet,
    };

    let filter = CorpusFilter::new(config);
    let passing = filter.filter_papers(&args.folder, &property_terms, Some(&args.synonyms))?;

    if !args.quiet {
        println!("\nPassing papers:");
        for path in passing.iter().take(LISTING_LIMIT) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("  {name}");
        }
        if passing.len() > LISTING_LIMIT {
            println!("  ... and {} more", passing.len() - LISTING_LIMIT);
        }
    }

    Ok(())
}

/// Resolve the requested property terms from the arguments.
///
/// A properties file, when given and present, overrides `--properties`. The
/// file may hold either a JSON list of strings or one term per line.
fn resolve_property_terms(args: &PolysiftArgs) -> Result<Vec<String>> {
    let Some(path) = &args.properties_file else {
        return Ok(args.properties.clone());
    };
    if !path.exists() {
        return Ok(args.properties.clone());
    }

    let text = fs::read_to_string(path)?;
    let text = text.trim();

    if text.starts_with('[') {
        let terms: Vec<String> = serde_json::from_str(text)?;
        Ok(terms)
    } else {
        Ok(text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_with_properties_file(path: &std::path::Path) -> PolysiftArgs {
        PolysiftArgs::parse_from([
            "polysift",
            "--properties",
            "ignored",
            "--properties-file",
            path.to_str().unwrap(),
        ])
    }

    #[test]
    fn test_resolve_terms_from_cli() {
        let args = PolysiftArgs::parse_from(["polysift", "--properties", "Tg", "Mw"]);
        assert_eq!(resolve_property_terms(&args).unwrap(), vec!["Tg", "Mw"]);
    }

    #[test]
    fn test_resolve_terms_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"["glass transition", "Tg"]"#).unwrap();

        let args = args_with_properties_file(file.path());
        assert_eq!(
            resolve_property_terms(&args).unwrap(),
            vec!["glass transition", "Tg"]
        );
    }

    #[test]
    fn test_resolve_terms_from_line_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Tg\n\n  Mw  \nMn\n").unwrap();

        let args = args_with_properties_file(file.path());
        assert_eq!(resolve_property_terms(&args).unwrap(), vec!["Tg", "Mw", "Mn"]);
    }

    #[test]
    fn test_missing_properties_file_falls_back() {
        let args = PolysiftArgs::parse_from([
            "polysift",
            "--properties",
            "Tg",
            "--properties-file",
            "/nonexistent/properties.txt",
        ]);
        assert_eq!(resolve_property_terms(&args).unwrap(), vec!["Tg"]);
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let args = PolysiftArgs::parse_from([
            "polysift",
            "/nonexistent/corpus",
            "--properties",
            "Tg",
        ]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_no_property_terms_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = PolysiftArgs::parse_from(["polysift", dir.path().to_str().unwrap()]);
        assert!(execute_command(args).is_err());
    }
}
