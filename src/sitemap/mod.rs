//! Sitemap entity and format detection
//!
//! This module contains the central `Sitemap` value: a document location
//! paired with the validated, ordered list of page links the document
//! vouches for. Construction runs format-specific extraction followed by
//! the shared scoping rule; the resulting value is read-only.

mod detect;
mod scope;

pub use detect::detect;
pub use scope::{filter_in_scope, root_directory};

use crate::extract::SitemapFormat;
use crate::Result;
use url::Url;

/// A sitemap document and the validated links it vouches for
///
/// A `Sitemap` is built exactly once from a `(location, content)` pair,
/// either with a known format via [`Sitemap::new`] (or the per-format
/// conveniences) or with the format inferred via [`detect`]. The link list
/// is computed at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Sitemap {
    /// URL the document was retrieved from
    location: Url,

    /// The format the content was read as
    format: SitemapFormat,

    /// Raw document text supplied at construction
    content: String,

    /// Validated links, in document order, duplicates retained
    links: Vec<Url>,
}

impl Sitemap {
    /// Builds a sitemap by reading content as the given format
    ///
    /// Extraction runs the format's grammar over the content; the raw links
    /// are then parsed as URLs and filtered to those scoped under the
    /// location's directory. Per-link failures are discarded silently;
    /// only a structural failure of the whole document is an error.
    ///
    /// # Arguments
    ///
    /// * `format` - The format to read the content as
    /// * `location` - URL the document was retrieved from
    /// * `content` - The raw document text
    ///
    /// # Returns
    ///
    /// * `Ok(Sitemap)` - Content satisfied the format's grammar
    /// * `Err(SitemapError)` - Structural parse failure (XML/RSS only)
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_sitemap::{Sitemap, SitemapFormat};
    /// use url::Url;
    ///
    /// let location = Url::parse("http://example.com/sitemap.txt").unwrap();
    /// let content = "http://example.com/a\nhttp://example.com/b".to_string();
    /// let sitemap = Sitemap::new(SitemapFormat::Txt, location, content).unwrap();
    /// assert_eq!(sitemap.links().len(), 2);
    /// ```
    pub fn new(format: SitemapFormat, location: Url, content: String) -> Result<Self> {
        let raw_links = format.parse_links(&content)?;
        let links = scope::filter_in_scope(&location, &raw_links);

        Ok(Self {
            location,
            format,
            content,
            links,
        })
    }

    /// Builds a sitemap from XML sitemap content (`urlset/url/loc`)
    pub fn from_xml(location: Url, content: String) -> Result<Self> {
        Self::new(SitemapFormat::Xml, location, content)
    }

    /// Builds a sitemap from RSS 2.0 feed content (`rss/channel/item/link`)
    pub fn from_rss(location: Url, content: String) -> Result<Self> {
        Self::new(SitemapFormat::Rss, location, content)
    }

    /// Builds a sitemap from a plain-text link list
    pub fn from_txt(location: Url, content: String) -> Result<Self> {
        Self::new(SitemapFormat::Txt, location, content)
    }

    /// Returns the URL the document was retrieved from
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Returns the format the content was read as
    pub fn format(&self) -> SitemapFormat {
        self.format
    }

    /// Returns the raw document text supplied at construction
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the validated links, in document order
    ///
    /// Every link parses as a URL and lives at or below the sitemap's own
    /// directory. Duplicates are not removed.
    pub fn links(&self) -> &[Url] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_construction_computes_links() {
        let sitemap = Sitemap::from_xml(
            location("http://example.com/sitemap.xml"),
            "<urlset><url><loc>http://example.com/page</loc></url></urlset>".to_string(),
        )
        .unwrap();

        assert_eq!(sitemap.links().len(), 1);
        assert_eq!(sitemap.links()[0].as_str(), "http://example.com/page");
        assert_eq!(sitemap.format(), SitemapFormat::Xml);
        assert_eq!(sitemap.location().as_str(), "http://example.com/sitemap.xml");
    }

    #[test]
    fn test_content_is_kept_verbatim() {
        let content = "http://example.com/a";
        let sitemap = Sitemap::from_txt(
            location("http://example.com/sitemap.txt"),
            content.to_string(),
        )
        .unwrap();

        assert_eq!(sitemap.content(), content);
    }

    #[test]
    fn test_out_of_root_entry_is_dropped() {
        let content = "<urlset>\
            <url><loc>http://ex.com/a</loc></url>\
            <url><loc>http://bad.com/x</loc></url>\
            </urlset>";
        let sitemap =
            Sitemap::from_xml(location("http://ex.com/sm.xml"), content.to_string()).unwrap();

        let links: Vec<&str> = sitemap.links().iter().map(Url::as_str).collect();
        assert_eq!(links, vec!["http://ex.com/a"]);
    }

    #[test]
    fn test_malformed_xml_fails_construction() {
        let result = Sitemap::from_xml(
            location("http://example.com/sitemap.xml"),
            "<urlset><url></loc></urlset>".to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_txt_construction_never_fails() {
        let sitemap = Sitemap::from_txt(
            location("http://example.com/sitemap.txt"),
            "<<< random ::: garbage >>>".to_string(),
        )
        .unwrap();
        assert!(sitemap.links().is_empty());
    }

    #[test]
    fn test_duplicate_links_are_retained() {
        let content = "http://example.com/a http://example.com/a";
        let sitemap = Sitemap::from_txt(
            location("http://example.com/sitemap.txt"),
            content.to_string(),
        )
        .unwrap();
        assert_eq!(sitemap.links().len(), 2);
    }
}
