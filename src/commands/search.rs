//! Search command implementation
//!
//! Runs one search through the scraper and exports the result set.

use crate::cli::output::TableDisplay;
use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, ConfigBuilder, OutputConfig, PreviewTarget};
use crate::domain::{JobTable, SearchParams};
use crate::error::Result;
use crate::export::{self, OutputTarget};
use crate::scraper::{JobScraper, ProcessScraper};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Execute a search from parsed CLI arguments
pub fn run_search(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let params = config.search_params();
    let scraper = ProcessScraper::from_config(&config.scraper);
    let target = OutputTarget::from_output(cli.output.as_deref());

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    search_and_export(
        &scraper,
        &params,
        cli.format,
        &target,
        &config.output,
        &mut handle,
    )
}

/// Merge defaults, the config file, and CLI flags
pub fn build_config(cli: &Cli) -> Result<Config> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_site_name(cli.site_name.clone())
        .with_search_term(cli.search_term.clone())
        .with_google_search_term(cli.google_search_term.clone())
        .with_location(cli.location.clone())
        .with_results_wanted(cli.results_wanted)
        .with_hours_old(cli.hours_old)
        .with_country_indeed(cli.country_indeed.clone())
        .with_linkedin_fetch_description(cli.linkedin_fetch_description)
        .with_proxies(cli.proxies.clone())
        .build();

    Ok(config)
}

/// Scrape once and write the result set
///
/// Data for the stdout target and the confirmation line for file targets
/// both go to `out`. Nothing is written if the scrape fails.
pub fn search_and_export<S: JobScraper, W: Write>(
    scraper: &S,
    params: &SearchParams,
    format: OutputFormat,
    target: &OutputTarget,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    for site in params.unknown_sites() {
        log::warn!("Unknown site '{}', passing it to the scraper as-is", site);
    }

    log::info!("Searching {}", params);
    let jobs = scraper.scrape_jobs(params)?;
    log::info!("Found {} jobs", jobs.len());

    match target.file_path(format) {
        Some(path) => {
            match format {
                OutputFormat::Csv => write_csv_file(&jobs, &path, output)?,
                OutputFormat::Json => write_json_file(&jobs, &path)?,
            }
            writeln!(out, "Jobs saved to {}", path.display())?;
        }
        None => match format {
            OutputFormat::Csv => export::write_csv(&jobs, &mut *out)?,
            OutputFormat::Json => export::write_json(&jobs, &mut *out)?,
        },
    }

    Ok(())
}

fn write_json_file(jobs: &JobTable, path: &Path) -> Result<()> {
    let json = export::to_json_string(jobs)?;
    fs::write(path, json + "\n")?;
    log::debug!("Wrote {} rows to {}", jobs.len(), path.display());
    Ok(())
}

fn write_csv_file(jobs: &JobTable, path: &Path, output: &OutputConfig) -> Result<()> {
    match output.csv_preview {
        PreviewTarget::DataFile => {
            // The body write below truncates this file, so only the CSV remains.
            let mut file = File::create(path)?;
            emit_preview(jobs, output.preview_rows, &mut file)?;
        }
        PreviewTarget::Stderr => {
            emit_preview(jobs, output.preview_rows, &mut io::stderr().lock())?;
        }
        PreviewTarget::Off => {}
    }

    let file = File::create(path)?;
    export::write_csv(jobs, BufWriter::new(file))?;
    log::debug!("Wrote {} rows to {}", jobs.len(), path.display());
    Ok(())
}

/// Write the first `rows` rows as a text table
pub fn emit_preview<W: Write>(jobs: &JobTable, rows: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", jobs.head(rows).to_table())?;
    out.flush()
}
