use crate::config::CategoryConfig;
use crate::parsers::listing::{self, ListingSelectors};

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> ListingSelectors {
        ListingSelectors::compile(&CategoryConfig::default()).unwrap()
    }

    /// One listing item in the default markup, with any field omittable
    fn item(title: Option<&str>, review: Option<&str>, price: Option<&str>) -> String {
        let mut html = String::from("<div class=\"poly-card\">");
        if let Some(title) = title {
            html.push_str(&format!(
                "<h2 class=\"poly-box poly-component__title\">{}</h2>",
                title
            ));
        }
        if let Some(review) = review {
            html.push_str(&format!(
                "<span class=\"poly-reviews__rating\">{}</span>",
                review
            ));
        }
        if let Some(price) = price {
            html.push_str(&format!(
                "<span class=\"andes-money-amount andes-money-amount--cents-superscript\">{}</span>",
                price
            ));
        }
        html.push_str("</div>");
        html
    }

    fn page(items: &[String], next_href: Option<&str>) -> String {
        let mut body = items.concat();
        if let Some(href) = next_href {
            body.push_str(&format!(
                "<a title=\"Seguinte\" href=\"{}\">Seguinte</a>",
                href
            ));
        }
        format!("<html><body><ol>{}</ol></body></html>", body)
    }

    #[test]
    fn test_complete_items_fully_populated() {
        let html = page(
            &[
                item(Some("O Hobbit"), Some("4.8"), Some("R$ 54")),
                item(Some("Dom Casmurro"), Some("4.6"), Some("R$ 29")),
                item(Some("1984"), Some("4.7"), Some("R$ 39")),
            ],
            None,
        );

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.records[0].title.as_deref(), Some("O Hobbit"));
        assert_eq!(parsed.records[0].review.as_deref(), Some("4.8"));
        assert_eq!(parsed.records[0].price.as_deref(), Some("R$ 54"));
        assert_eq!(parsed.records[2].title.as_deref(), Some("1984"));
        assert_eq!(parsed.records[2].price.as_deref(), Some("R$ 39"));
    }

    #[test]
    fn test_missing_review_absent_on_that_record_only() {
        let html = page(
            &[
                item(Some("A"), Some("4.1"), Some("R$ 10")),
                item(Some("B"), None, Some("R$ 20")),
                item(Some("C"), Some("4.3"), Some("R$ 30")),
            ],
            None,
        );

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.records[0].review.as_deref(), Some("4.1"));
        assert_eq!(parsed.records[1].review, None);
        assert_eq!(parsed.records[1].title.as_deref(), Some("B"));
        assert_eq!(parsed.records[1].price.as_deref(), Some("R$ 20"));
        assert_eq!(parsed.records[2].review.as_deref(), Some("4.3"));
    }

    #[test]
    fn test_missing_price_absent() {
        let html = page(&[item(Some("A"), Some("4.1"), None)], None);

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].price, None);
    }

    #[test]
    fn test_field_elements_outside_items_ignored() {
        // A stray price span at the top level must not produce a record or
        // leak into a neighbouring one
        let html = format!(
            "<html><body>\
             <span class=\"andes-money-amount andes-money-amount--cents-superscript\">R$ 99</span>\
             {}\
             </body></html>",
            item(Some("A"), Some("4.1"), None)
        );

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].price, None);
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        let parsed = listing::parse_listing("<html><body></body></html>", &selectors());
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_next_page_url() {
        let sel = selectors();

        let with_link = listing::parse_listing(&page(&[], Some("/page2")), &sel);
        assert_eq!(with_link.next_page_url(&sel).as_deref(), Some("/page2"));

        let without_link = listing::parse_listing(&page(&[], None), &sel);
        assert_eq!(without_link.next_page_url(&sel), None);
    }

    #[test]
    fn test_unlabeled_link_is_not_next_page() {
        let sel = selectors();
        let html = "<html><body><a title=\"Anterior\" href=\"/page0\">Anterior</a></body></html>";

        let parsed = listing::parse_listing(html, &sel);
        assert_eq!(parsed.next_page_url(&sel), None);
    }

    #[test]
    fn test_records_of_one_page_share_timestamp() {
        let html = page(
            &[
                item(Some("A"), None, None),
                item(Some("B"), None, None),
            ],
            None,
        );

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].captured_at, parsed.records[1].captured_at);
        // Fixed format: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(parsed.records[0].captured_at.len(), 19);
    }

    #[test]
    fn test_nested_markup_collapsed_to_plain_text() {
        let html = page(
            &["<div class=\"poly-card\">\
                <h2 class=\"poly-box poly-component__title\"><a>  O\n  Hobbit </a></h2>\
                <span class=\"andes-money-amount andes-money-amount--cents-superscript\">\
                <span>R$</span><span>54</span><span>90</span></span>\
                </div>"
                .to_string()],
            None,
        );

        let parsed = listing::parse_listing(&html, &selectors());

        assert_eq!(parsed.records[0].title.as_deref(), Some("O Hobbit"));
        assert_eq!(parsed.records[0].price.as_deref(), Some("R$ 54 90"));
    }

    #[test]
    fn test_invalid_selector_reported() {
        let mut config = CategoryConfig::default();
        config.item_selector = "div[".to_string();

        let result = ListingSelectors::compile(&config);
        assert!(result.is_err());
    }
}
