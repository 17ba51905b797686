use crate::config::CategoryConfig;
use crate::crawlers::fetch::Fetch;
use crate::parsers::listing::{self, ListingSelectors};
use crate::results::ResultTable;
use std::error::Error;
use std::time::Duration;
use url::Url;

/// Crawls the category listing from its seed URL and accumulates every
/// extracted record into one table.
///
/// Besides the optional page cap, two conditions end the loop: a fetch
/// failure (whatever was accumulated so far is returned, not an error) and
/// a page without a next-page link (natural end of the listing). There is
/// no cycle detection; termination otherwise relies on the site eventually
/// omitting the link.
pub async fn scrape_all_pages<F: Fetch>(
    fetcher: &F,
    config: &CategoryConfig,
) -> Result<ResultTable, Box<dyn Error>> {
    let selectors = ListingSelectors::compile(config)?;

    let mut table = ResultTable::new();
    let mut current_url = config.seed_url.clone();
    let mut page_num = 1;

    loop {
        ::log::info!("Scraping page {}: {}", page_num, current_url);

        let Some(html) = fetcher.fetch_page(&current_url).await else {
            ::log::warn!("Fetch failed on page {}, keeping partial results", page_num);
            break;
        };

        // Record the page and look up its next-page link, releasing the
        // parsed document before the pause below
        let next_url = {
            let mut page = listing::parse_listing(&html, &selectors);
            table.append(&mut page.records);
            page.next_page_url(&selectors)
        };

        if config.max_pages.is_some_and(|cap| page_num >= cap) {
            ::log::info!("Reached the page cap after page {}", page_num);
            break;
        }

        let Some(next_url) = next_url else {
            ::log::info!("No next-page link on page {}, listing exhausted", page_num);
            break;
        };

        current_url = match resolve_next_url(&current_url, &next_url) {
            Some(resolved) => resolved,
            None => break,
        };
        page_num += 1;

        // Politeness pause between successive fetches
        tokio::time::sleep(Duration::from_secs(config.page_delay_secs)).await;
    }

    ::log::info!("Crawl finished with {} record(s)", table.len());

    Ok(table)
}

/// Resolves a next-page href, possibly relative, against the current page
fn resolve_next_url(current: &str, href: &str) -> Option<String> {
    match Url::parse(current).and_then(|base| base.join(href)) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            ::log::warn!("Unusable next-page link {}: {}", href, e);
            None
        }
    }
}
