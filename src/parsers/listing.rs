use crate::config::CategoryConfig;
use crate::results::Record;
use crate::utils;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;

/// Compiled selector set for one category listing layout
pub struct ListingSelectors {
    item: Selector,
    title: Selector,
    review: Selector,
    price: Selector,
    next_link: Selector,
}

impl ListingSelectors {
    /// Compile the selector strings of a category configuration
    pub fn compile(config: &CategoryConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            item: compile(&config.item_selector)?,
            title: compile(&config.title_selector)?,
            review: compile(&config.review_selector)?,
            price: compile(&config.price_selector)?,
            next_link: compile(&format!("a[title=\"{}\"]", config.next_page_label))?,
        })
    }
}

/// Compiles one selector string, reporting which one was rejected
fn compile(selector: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(selector).map_err(|e| format!("invalid selector `{}`: {}", selector, e).into())
}

/// One parsed listing page: its records plus the document handle the
/// next-page lookup runs against
pub struct ListingPage {
    /// Records extracted from this page, in document order
    pub records: Vec<Record>,
    doc: Html,
}

impl ListingPage {
    /// Target of the "next page" navigation link, or None on the last page
    pub fn next_page_url(&self, selectors: &ListingSelectors) -> Option<String> {
        self.doc
            .select(&selectors.next_link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(|href| href.to_string())
    }
}

/// Parses one category listing page into records.
///
/// Every field of a record is taken from the same enclosing item container,
/// so an item missing its review or price never shifts fields on a
/// neighbouring record. A field whose selector matches nothing inside the
/// container is absent. All records of one page share a single capture
/// timestamp.
pub fn parse_listing(html: &str, selectors: &ListingSelectors) -> ListingPage {
    let doc = Html::parse_document(html);
    let captured_at = utils::capture_timestamp();

    let mut records = Vec::new();
    for item in doc.select(&selectors.item) {
        records.push(Record {
            title: select_text(item, &selectors.title),
            review: select_text(item, &selectors.review),
            price: select_text(item, &selectors.price),
            captured_at: captured_at.clone(),
        });
    }

    ::log::debug!("Listing parser found {} items", records.len());

    ListingPage { records, doc }
}

/// Trimmed text of the first match inside an item, if any
fn select_text(item: ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(collapse_text)
}

/// Collapses an element's text nodes into one whitespace-normalized string
fn collapse_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
