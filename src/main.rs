use anyhow::Result;
use clap::Parser;
use neurips_harvest::config::{load_config, ScrapeConfig};
use neurips_harvest::export::{CsvSink, OutputSink};
use neurips_harvest::scrape::{Harvester, HttpFetcher};
use neurips_harvest::utils::HttpClient;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// NeurIPS Harvest - Collect NeurIPS proceedings metadata into a CSV file
#[derive(Parser, Debug)]
#[command(name = "neurips-harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scrape paper metadata from the NeurIPS proceedings site", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Proceedings landing page URL
    #[arg(long)]
    base_url: Option<String>,

    /// First year to include
    #[arg(long)]
    start_year: Option<u16>,

    /// Last year to include (inclusive)
    #[arg(long)]
    end_year: Option<u16>,

    /// Directory the output CSV is written into
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seconds to pause between successive year harvests
    #[arg(long)]
    delay: Option<u64>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Configuration file path (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// File/env configuration first, then CLI flags on top.
fn build_config(cli: &Cli) -> Result<ScrapeConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ScrapeConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(start_year) = cli.start_year {
        config.start_year = start_year;
    }
    if let Some(end_year) = cli.end_year {
        config.end_year = end_year;
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(delay) = cli.delay {
        config.courtesy_delay_secs = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = build_config(&cli)?;

    let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs));
    let fetcher = Arc::new(HttpFetcher::new(client));
    let harvester = Harvester::new(fetcher, config.clone());

    let records = harvester.run().await?;
    if records.is_empty() {
        println!("No papers were scraped.");
        return Ok(());
    }

    let sink = CsvSink::new(&config.data_dir);
    let path = sink.write_records(&records)?;

    println!("Total papers scraped: {}", records.len());
    println!("All years' data saved to {}", path.display());
    Ok(())
}
