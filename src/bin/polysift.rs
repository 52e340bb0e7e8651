//! Polysift CLI binary.

use clap::Parser;
use polysift::cli::args::PolysiftArgs;
use polysift::cli::commands::execute_command;
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = PolysiftArgs::parse();

    // Execute the filter
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
