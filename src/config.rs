use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the category listing crawler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// URL of the first listing page
    #[serde(default = "default_seed_url")]
    pub seed_url: String,

    /// Maximum number of pages to fetch in one run (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,

    /// Fixed pause between successive page fetches, in seconds
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: u64,

    /// Selector for the enclosing per-item container
    #[serde(default = "default_item_selector")]
    pub item_selector: String,

    /// Selector for the title element inside an item
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Selector for the review-rating element inside an item
    #[serde(default = "default_review_selector")]
    pub review_selector: String,

    /// Selector for the price element inside an item
    #[serde(default = "default_price_selector")]
    pub price_selector: String,

    /// Localized label carried by the "next page" navigation link
    #[serde(default = "default_next_page_label")]
    pub next_page_label: String,
}

impl CategoryConfig {
    /// Create a new configuration with default values
    pub fn new(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            max_pages: None,
            page_delay_secs: default_page_delay_secs(),
            item_selector: default_item_selector(),
            title_selector: default_title_selector(),
            review_selector: default_review_selector(),
            price_selector: default_price_selector(),
            next_page_label: default_next_page_label(),
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self::new(&default_seed_url())
    }
}

/// Configuration for the volumes search API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumesConfig {
    /// Search endpoint URL
    #[serde(default = "default_volumes_endpoint")]
    pub endpoint: String,

    /// Search query text
    pub query: String,

    /// Language restriction applied to results
    #[serde(default = "default_language")]
    pub language: String,

    /// Results requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// API key sent with every request; scoped to this configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl VolumesConfig {
    /// Create a new configuration with default values
    pub fn new(query: &str) -> Self {
        Self {
            endpoint: default_volumes_endpoint(),
            query: query.to_string(),
            language: default_language(),
            page_size: default_page_size(),
            api_key: None,
        }
    }
}

/// Enum containing all source configuration types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceConfig {
    /// Category listing crawler configuration
    Category(CategoryConfig),

    /// Volumes API client configuration
    Volumes(VolumesConfig),
}

impl SourceConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default seed URL: the bestseller shelf of the books category
fn default_seed_url() -> String {
    "https://lista.mercadolivre.com.br/livros-revistas-comics/_Container_os-livros-mais-vendidos_NoIndex_True"
        .to_string()
}

/// Default pause between page fetches
fn default_page_delay_secs() -> u64 {
    2
}

fn default_item_selector() -> String {
    "div.poly-card".to_string()
}

fn default_title_selector() -> String {
    "h2.poly-box.poly-component__title".to_string()
}

fn default_review_selector() -> String {
    "span.poly-reviews__rating".to_string()
}

fn default_price_selector() -> String {
    "span.andes-money-amount.andes-money-amount--cents-superscript".to_string()
}

fn default_next_page_label() -> String {
    "Seguinte".to_string()
}

fn default_volumes_endpoint() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

fn default_language() -> String {
    "pt".to_string()
}

/// Default page size, the endpoint's maximum
fn default_page_size() -> usize {
    40
}
