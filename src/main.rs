//! jobspy - scrape jobs from various sites
//!
//! A command-line tool that runs a JobSpy search and writes the results
//! as JSON or CSV to a file or stdout.

use clap::Parser;
use jobspy_cli::cli::args::{generate_completions, Cli};
use jobspy_cli::cli::logging::logger_builder;
use jobspy_cli::commands::run_search;
use jobspy_cli::error::{AppError, ScrapeError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; -v overrides RUST_LOG
    logger_builder(cli.verbose).init();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    if let Err(e) = run_search(&cli) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Scrape(e) if e.is_missing_jobspy() => {
            eprintln!();
            eprintln!("Hint: Install the scraper backend with 'pip install python-jobspy'.");
        }
        AppError::Scrape(ScrapeError::Spawn { .. }) => {
            eprintln!();
            eprintln!("Hint: Set [scraper] program in the config file to a Python 3");
            eprintln!("      interpreter, or point --config at one that does.");
        }
        _ => {}
    }
}
