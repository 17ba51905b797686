use async_trait::async_trait;
use std::time::Duration;

/// Seam between the pagination loop and the network
#[async_trait]
pub trait Fetch {
    /// Retrieve the raw body of one page, or None on any transport failure
    async fn fetch_page(&self, url: &str) -> Option<String>;
}

/// Plain HTTP page fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default request timeout
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                ::log::error!("Error fetching page {}: {}", url, e);
                return None;
            }
        };

        // Non-2xx statuses are transport failures as far as the crawl is concerned
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                ::log::error!("Error fetching page {}: {}", url, e);
                return None;
            }
        };

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                ::log::error!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}
