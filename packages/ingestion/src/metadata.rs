//! Metadata extraction from fetched documents.
//!
//! Each field is an ordered chain of optional lookups, first non-empty wins.
//! This function has no error path: malformed or non-HTML input yields
//! default values for every field except `domain`, which comes from the
//! request URL alone.

use scraper::{Html, Selector};
use url::Url;

use crate::types::ExtractedMetadata;

/// Title used when no source yields a value.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Extract descriptive fields from a document.
///
/// Fallback order per field:
/// - title: `<title>` text, then `og:title`, then `"Untitled"`
/// - description: `meta[name=description]`, then `og:description`, then empty
/// - image_url: `og:image`, then empty
/// - domain: always the host of `source_url`, never page content
pub fn extract_metadata(html: &str, source_url: &Url) -> ExtractedMetadata {
    let document = Html::parse_document(html);

    let title = element_text(&document, "title")
        .or_else(|| meta_content(&document, r#"meta[property="og:title"]"#))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = meta_content(&document, r#"meta[name="description"]"#)
        .or_else(|| meta_content(&document, r#"meta[property="og:description"]"#))
        .unwrap_or_default();

    let image_url = meta_content(&document, r#"meta[property="og:image"]"#).unwrap_or_default();

    // Host of the request URL only; a conflicting og:url must not win.
    let domain = source_url.host_str().unwrap_or_default().to_string();

    ExtractedMetadata {
        title,
        description,
        image_url,
        domain,
    }
}

/// Text of the first matching element, trimmed; `None` when absent or empty.
fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect::<String>().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// `content` attribute of the first matching element, trimmed.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let content = element.value().attr("content")?.trim().to_string();
    (!content.is_empty()).then_some(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn title_prefers_title_element() {
        let html = r#"<html><head>
            <title>Doc Title</title>
            <meta property="og:title" content="OG Title">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.title, "Doc Title");
    }

    #[test]
    fn title_falls_back_to_og_title() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.title, "OG Title");
    }

    #[test]
    fn title_defaults_to_untitled() {
        let meta = extract_metadata("<html><head></head></html>", &url("https://example.com/"));
        assert_eq!(meta.title, "Untitled");
    }

    #[test]
    fn empty_title_element_falls_through() {
        let html = r#"<html><head>
            <title>   </title>
            <meta property="og:title" content="OG Title">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.title, "OG Title");
    }

    #[test]
    fn description_chain() {
        let html = r#"<html><head>
            <meta name="description" content="Plain description">
            <meta property="og:description" content="OG description">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.description, "Plain description");

        let html = r#"<html><head>
            <meta property="og:description" content="OG description">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.description, "OG description");
    }

    #[test]
    fn image_from_og_image_or_empty() {
        let html = r#"<html><head>
            <meta property="og:image" content="https://cdn.example.com/pic.png">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/"));
        assert_eq!(meta.image_url, "https://cdn.example.com/pic.png");

        let meta = extract_metadata("<html></html>", &url("https://example.com/"));
        assert_eq!(meta.image_url, "");
    }

    #[test]
    fn domain_comes_from_request_url_not_document() {
        let html = r#"<html><head>
            <meta property="og:url" content="https://evil.example.net/spoof">
        </head></html>"#;
        let meta = extract_metadata(html, &url("https://example.com/page"));
        assert_eq!(meta.domain, "example.com");
    }

    #[test]
    fn non_html_input_yields_defaults() {
        let meta = extract_metadata("\x00\x01binary garbage", &url("https://example.com/x"));
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.description, "");
        assert_eq!(meta.image_url, "");
        assert_eq!(meta.domain, "example.com");
    }

    #[test]
    fn minimal_document_extracts_title_and_description() {
        let html = r#"<title>Hello</title><meta name="description" content="World">"#;
        let meta = extract_metadata(html, &url("https://example.com/a"));
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.description, "World");
        assert_eq!(meta.image_url, "");
        assert_eq!(meta.domain, "example.com");
    }
}
