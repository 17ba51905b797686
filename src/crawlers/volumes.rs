use crate::config::VolumesConfig;
use crate::results::Volume;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Query parameters for one volumes search request
#[derive(Serialize)]
struct VolumesQuery<'a> {
    q: &'a str,
    #[serde(rename = "startIndex")]
    start_index: usize,
    #[serde(rename = "maxResults")]
    max_results: usize,
    #[serde(rename = "langRestrict")]
    lang_restrict: &'a str,
    #[serde(rename = "printType")]
    print_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
}

/// Response payload of the volumes search endpoint
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<VolumeItem>,
}

/// One search result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(default)]
    pub volume_info: VolumeInfo,
    #[serde(default)]
    pub sale_info: SaleInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u64>,
    pub published_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInfo {
    pub list_price: Option<ListPrice>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPrice {
    pub amount: Option<f64>,
    pub currency_code: Option<String>,
}

impl From<VolumeItem> for Volume {
    fn from(item: VolumeItem) -> Self {
        let VolumeItem {
            volume_info,
            sale_info,
        } = item;
        let list_price = sale_info.list_price;

        Self {
            title: volume_info.title,
            authors: if volume_info.authors.is_empty() {
                None
            } else {
                Some(volume_info.authors.join(", "))
            },
            average_rating: volume_info.average_rating,
            ratings_count: volume_info.ratings_count,
            published_date: volume_info.published_date,
            description: volume_info.description,
            price: list_price.as_ref().and_then(|p| p.amount),
            currency: list_price.and_then(|p| p.currency_code),
        }
    }
}

/// True when a response page signals the end of the result set
pub fn is_last_page(items_fetched: usize, page_size: usize) -> bool {
    items_fetched < page_size
}

/// Fetches every result page for the configured query.
///
/// Unlike the category crawl, transport and decode failures here propagate:
/// the API client has no partial-results contract.
pub async fn fetch_all_volumes(config: &VolumesConfig) -> Result<Vec<Volume>, Box<dyn Error>> {
    let client = reqwest::Client::new();
    let mut volumes = Vec::new();
    let mut start_index = 0;

    loop {
        let query = VolumesQuery {
            q: &config.query,
            start_index,
            max_results: config.page_size,
            lang_restrict: &config.language,
            print_type: "books",
            key: config.api_key.as_deref(),
        };

        let response: VolumesResponse = client
            .get(&config.endpoint)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let batch = response.items.len();
        volumes.extend(response.items.into_iter().map(Volume::from));
        ::log::info!(
            "Fetched {} volume(s) starting at index {} (total {})",
            batch,
            start_index,
            volumes.len()
        );

        if is_last_page(batch, config.page_size) {
            break;
        }
        start_index += config.page_size;
    }

    Ok(volumes)
}
