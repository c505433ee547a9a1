//! XML sitemap link extraction
//!
//! Streams the document with quick-xml and collects the text of every `loc`
//! element nested under a `url` element, i.e. the standard sitemap schema
//! path `urlset/url/loc`. Elements on other paths (for example the `loc`
//! entries of a sitemap index) are ignored.

use crate::{ExtractError, ExtractResult};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts raw `urlset/url/loc` entries from an XML sitemap document
///
/// # Arguments
///
/// * `content` - The raw XML text
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The `loc` texts in document order
/// * `Err(ExtractError)` - The content is not well-formed XML
pub(super) fn parse_links(content: &str) -> ExtractResult<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut links = Vec::new();
    let mut buf = Vec::new();

    let mut in_url = false;
    let mut in_loc = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"url" => in_url = true,
                b"loc" if in_url => {
                    in_loc = true;
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"url" => in_url = false,
                b"loc" if in_loc => {
                    links.push(std::mem::take(&mut current));
                    in_loc = false;
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_loc => {
                current.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::CData(ref e)) if in_loc => {
                current.push_str(&String::from_utf8_lossy(e));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_locs_in_document_order() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>http://example.com/a</loc></url>
          <url><loc>http://example.com/b</loc><lastmod>2024-01-15</lastmod></url>
          <url><loc>http://example.com/c</loc></url>
        </urlset>"#;

        let links = parse_links(content).unwrap();
        assert_eq!(
            links,
            vec![
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/c"
            ]
        );
    }

    #[test]
    fn test_loc_outside_url_is_ignored() {
        // Sitemap index entries use sitemap/loc, not url/loc
        let content = r#"<sitemapindex>
          <sitemap><loc>http://example.com/sitemap1.xml</loc></sitemap>
        </sitemapindex>"#;

        let links = parse_links(content).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_escaped_entities_are_unescaped() {
        let content =
            "<urlset><url><loc>http://example.com/search?a=1&amp;b=2</loc></url></urlset>";
        let links = parse_links(content).unwrap();
        assert_eq!(links, vec!["http://example.com/search?a=1&b=2"]);
    }

    #[test]
    fn test_mismatched_tags_fail() {
        let content = "<urlset><url><loc>http://example.com/a</url></loc></urlset>";
        assert!(parse_links(content).is_err());
    }

    #[test]
    fn test_plain_text_yields_no_links() {
        // No tags at all is structurally acceptable XML content, just empty
        let links = parse_links("http://example.com/a http://example.com/b").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_content() {
        let links = parse_links("").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_loc_yields_empty_raw_link() {
        // An empty loc is still a raw candidate; URL validation discards it later
        let links = parse_links("<urlset><url><loc></loc></url></urlset>").unwrap();
        assert_eq!(links, vec![""]);
    }
}
