use book_harvest::config::{CategoryConfig, SourceConfig, VolumesConfig};
use clap::{Parser, ValueEnum};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "book-harvest")]
#[command(about = "Collects book metadata and prices into a JSON dump")]
#[command(version)]
pub struct Args {
    /// Data source to harvest
    #[arg(short, long, value_enum, default_value_t = SourceArg::Category)]
    pub source: SourceArg,

    /// Override the category listing seed URL
    #[arg(long)]
    pub url: Option<String>,

    /// Search query for the volumes API source
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of listing pages to fetch
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Seconds to pause between page fetches
    #[arg(long)]
    pub page_delay: Option<u64>,

    /// API key for the volumes endpoint
    #[arg(long)]
    pub api_key: Option<String>,

    /// Path to a source configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the output file is written into
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// E-commerce category listing (HTML scrape)
    Category,
    /// Volumes search API
    Volumes,
}

/// Default query when the volumes source is selected without one
const DEFAULT_QUERY: &str = "bestsellers";

/// Build the effective source configuration from the command line:
/// the config file (or built-in defaults) with per-flag overrides on top
pub fn build_source_config(args: &Args) -> Result<SourceConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SourceConfig::from_file(path)?,
        None => match args.source {
            SourceArg::Category => SourceConfig::Category(CategoryConfig::default()),
            SourceArg::Volumes => {
                SourceConfig::Volumes(VolumesConfig::new(args.query.as_deref().unwrap_or(DEFAULT_QUERY)))
            }
        },
    };

    match &mut config {
        SourceConfig::Category(category) => {
            if let Some(url) = &args.url {
                category.seed_url = url.clone();
            }
            if let Some(cap) = args.max_pages {
                category.max_pages = Some(cap);
            }
            if let Some(delay) = args.page_delay {
                category.page_delay_secs = delay;
            }
        }
        SourceConfig::Volumes(volumes) => {
            if let Some(query) = &args.query {
                volumes.query = query.clone();
            }
            if let Some(key) = &args.api_key {
                volumes.api_key = Some(key.clone());
            }
        }
    }

    Ok(config)
}
