//! Format detection
//!
//! The document format is not declared anywhere, so detection is empirical:
//! read the same content as every format, drop the readings whose grammar
//! rejected it outright, and keep the reading that produced the most
//! validated links.

use crate::extract::SitemapFormat;
use crate::sitemap::Sitemap;
use crate::{Result, SitemapError};
use url::Url;

/// Builds a sitemap from content of unknown format
///
/// All formats are attempted independently over the same
/// `(location, content)` pair, in the fixed order Xml, Rss, Txt. A format
/// whose structural grammar rejects the content is dropped; among the
/// surviving candidates the one with the most validated links wins, and an
/// equal link count keeps the earlier format in that order, so repeated
/// runs over the same input always produce the same result.
///
/// # Arguments
///
/// * `location` - URL the document was retrieved from
/// * `content` - The raw document text
///
/// # Returns
///
/// * `Ok(Sitemap)` - The best surviving candidate
/// * `Err(SitemapError)` - Every format rejected the content
///
/// # Example
///
/// ```
/// use sumi_sitemap::{detect, SitemapFormat};
/// use url::Url;
///
/// let location = Url::parse("http://example.com/sitemap.xml").unwrap();
/// let content = "<urlset><url><loc>http://example.com/page</loc></url></urlset>";
/// let sitemap = detect(&location, content).unwrap();
/// assert_eq!(sitemap.format(), SitemapFormat::Xml);
/// assert_eq!(sitemap.links().len(), 1);
/// ```
pub fn detect(location: &Url, content: &str) -> Result<Sitemap> {
    let mut candidates = Vec::new();

    for format in SitemapFormat::ALL {
        match Sitemap::new(format, location.clone(), content.to_string()) {
            Ok(sitemap) => {
                tracing::debug!(
                    "Candidate {} for {}: {} valid links",
                    format,
                    location,
                    sitemap.links().len()
                );
                candidates.push(sitemap);
            }
            Err(e) => {
                tracing::debug!("Content at {} is not {}: {}", location, format, e);
            }
        }
    }

    best_candidate(candidates).ok_or_else(|| SitemapError::UnknownFormat {
        location: location.to_string(),
    })
}

/// Picks the candidate with the most validated links
///
/// Ties keep the earlier candidate, so the caller's evaluation order is the
/// tie-break priority. Returns None when no candidate survived.
fn best_candidate(candidates: Vec<Sitemap>) -> Option<Sitemap> {
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.links().len() > best.links().len() {
            candidate
        } else {
            best
        }
    })
}
