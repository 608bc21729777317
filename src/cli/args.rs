//! CLI argument definitions using clap derive
//!
//! Defines all command-line flags. Search flags are optional so that values
//! from the configuration file can fill in whatever was not given.

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

/// Scrape jobs from various sites
///
/// Runs a JobSpy search and writes the results as JSON or CSV.
#[derive(Parser, Debug)]
#[command(name = "jobspy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated list of sites to scrape: indeed,linkedin,zip_recruiter,glassdoor,google,bayt,naukri
    #[arg(long = "site_name", value_name = "SITES")]
    pub site_name: Option<String>,

    /// Search term for jobs
    #[arg(long = "search_term")]
    pub search_term: Option<String>,

    /// Google specific search term
    #[arg(long = "google_search_term")]
    pub google_search_term: Option<String>,

    /// Location for job search
    #[arg(long)]
    pub location: Option<String>,

    /// Number of results wanted
    #[arg(long = "results_wanted", allow_negative_numbers = true)]
    pub results_wanted: Option<i64>,

    /// How many hours old the jobs can be
    #[arg(long = "hours_old", allow_negative_numbers = true)]
    pub hours_old: Option<i64>,

    /// Country for Indeed search
    #[arg(long = "country_indeed")]
    pub country_indeed: Option<String>,

    /// Fetch LinkedIn job descriptions (slower)
    #[arg(long = "linkedin_fetch_description")]
    pub linkedin_fetch_description: bool,

    /// Comma-separated list of proxies
    #[arg(long)]
    pub proxies: Option<String>,

    /// Output file path without extension. If not provided, outputs to stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "JOBSPY_CONFIG")]
    pub config: Option<String>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values, non-numeric fields quoted
    Csv,
    /// JSON array of row objects
    #[default]
    Json,
}

impl OutputFormat {
    /// File extension appended to the `--output` base path
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
