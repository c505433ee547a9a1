//! Link extraction module
//!
//! This module turns raw document content into raw (unvalidated) link
//! strings. Each supported format owns its own grammar:
//! - XML sitemaps (`urlset/url/loc`)
//! - RSS 2.0 feeds (`rss/channel/item/link`)
//! - Plain-text link lists (whitespace-delimited tokens)
//!
//! Extraction is a pure function of the content; scoping and URL validation
//! happen later, in the sitemap module.

mod rss;
mod txt;
mod xml;

use crate::ExtractResult;
use std::fmt;

/// The document formats a sitemap can be read as
///
/// This is a closed set: adding a format means adding a variant here and
/// teaching the detector about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitemapFormat {
    /// Standard XML sitemap (`<urlset><url><loc>...`)
    Xml,
    /// RSS 2.0 feed (`<rss><channel><item><link>...`)
    Rss,
    /// Whitespace-delimited plain-text link list
    Txt,
}

impl SitemapFormat {
    /// All formats, in detection priority order
    ///
    /// Detection evaluates candidates in this order, and an equal link count
    /// keeps the earlier format. Xml before Rss before Txt.
    pub const ALL: [SitemapFormat; 3] = [SitemapFormat::Xml, SitemapFormat::Rss, SitemapFormat::Txt];

    /// Extracts raw link strings from content according to this format's grammar
    ///
    /// The result is unvalidated: tokens that are not URLs at all, or that
    /// point outside the sitemap's directory, are filtered out later.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw document text
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Raw links in document order
    /// * `Err(ExtractError)` - The content does not satisfy this format's
    ///   structural grammar (only possible for `Xml` and `Rss`; `Txt` never
    ///   fails)
    pub fn parse_links(self, content: &str) -> ExtractResult<Vec<String>> {
        match self {
            SitemapFormat::Xml => xml::parse_links(content),
            SitemapFormat::Rss => rss::parse_links(content),
            SitemapFormat::Txt => Ok(txt::parse_links(content)),
        }
    }
}

impl fmt::Display for SitemapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SitemapFormat::Xml => "xml",
            SitemapFormat::Rss => "rss",
            SitemapFormat::Txt => "txt",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SitemapFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(SitemapFormat::Xml),
            "rss" => Ok(SitemapFormat::Rss),
            "txt" | "text" => Ok(SitemapFormat::Txt),
            other => Err(format!("Unknown sitemap format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            SitemapFormat::ALL,
            [SitemapFormat::Xml, SitemapFormat::Rss, SitemapFormat::Txt]
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SitemapFormat::Xml.to_string(), "xml");
        assert_eq!(SitemapFormat::Rss.to_string(), "rss");
        assert_eq!(SitemapFormat::Txt.to_string(), "txt");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("xml".parse::<SitemapFormat>(), Ok(SitemapFormat::Xml));
        assert_eq!("RSS".parse::<SitemapFormat>(), Ok(SitemapFormat::Rss));
        assert_eq!("text".parse::<SitemapFormat>(), Ok(SitemapFormat::Txt));
        assert!("html".parse::<SitemapFormat>().is_err());
    }

    #[test]
    fn test_dispatch_txt_never_fails() {
        let links = SitemapFormat::Txt.parse_links("<<< not xml >>>").unwrap();
        assert_eq!(links, vec!["<<<", "not", "xml", ">>>"]);
    }

    #[test]
    fn test_dispatch_xml_rejects_mismatched_tags() {
        assert!(SitemapFormat::Xml.parse_links("<urlset><url></loc></urlset>").is_err());
        assert!(SitemapFormat::Rss.parse_links("<rss><channel></item></rss>").is_err());
    }
}
