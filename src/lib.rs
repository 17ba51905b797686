// Re-export modules
pub mod config;
pub mod crawlers;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use results::{Record, ResultTable, Volume};

use config::{CategoryConfig, SourceConfig};
use crawlers::category;
use crawlers::fetch::HttpFetcher;
use std::error::Error;
use std::path::Path;

/// Builder for one category crawl run
pub struct Harvest {
    config: CategoryConfig,
}

impl Harvest {
    /// Create a new Harvest starting from the given listing URL
    pub fn new(seed_url: &str) -> Self {
        Self {
            config: CategoryConfig::new(seed_url),
        }
    }

    /// Apply a full category configuration
    pub fn with_config(mut self, config: CategoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the category configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        match SourceConfig::from_file(path)? {
            SourceConfig::Category(config) => Ok(self.with_config(config)),
            SourceConfig::Volumes(_) => Err("expected a category source configuration".into()),
        }
    }

    /// Cap the number of listing pages fetched in this run
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Set the pause between successive page fetches
    pub fn with_page_delay(mut self, seconds: u64) -> Self {
        self.config.page_delay_secs = seconds;
        self
    }

    /// Run the crawl to completion and return the accumulated table
    pub async fn run(self) -> Result<ResultTable, Box<dyn Error>> {
        let fetcher = HttpFetcher::new();
        category::scrape_all_pages(&fetcher, &self.config).await
    }
}
