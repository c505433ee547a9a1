//! URL scoping and validation
//!
//! A sitemap may only vouch for URLs that live at or below its own
//! directory. The scope boundary is the location URL truncated to its
//! containing path segment (the "root directory"), and membership is a
//! literal string-prefix test on the parsed link's serialized form, not a
//! path-segment comparison.

use url::Url;

/// Computes the scope boundary for a sitemap location
///
/// The root directory is the location's string form with everything after
/// the final `/` removed, retaining that `/`. A location with no `/` at all
/// (possible only for non-hierarchical schemes) scopes to itself.
///
/// # Arguments
///
/// * `location` - URL the sitemap document was retrieved from
///
/// # Returns
///
/// The root directory string, ending in `/` for hierarchical URLs
///
/// # Example
///
/// ```
/// use sumi_sitemap::root_directory;
/// use url::Url;
///
/// let location = Url::parse("http://example.com/sitemaps/a.xml").unwrap();
/// assert_eq!(root_directory(&location), "http://example.com/sitemaps/");
/// ```
pub fn root_directory(location: &Url) -> String {
    let location = location.as_str();
    match location.rfind('/') {
        Some(idx) => location[..=idx].to_string(),
        None => location.to_string(),
    }
}

/// Filters raw link strings down to valid, in-scope URLs
///
/// Each raw string is parsed as a URL; strings that do not parse are
/// discarded. A parsed URL survives only if its serialized form starts with
/// the location's root directory. Order is preserved and duplicates are
/// kept. Discards are expected noise in real documents, so they are logged
/// at debug level rather than surfaced as errors.
///
/// # Arguments
///
/// * `location` - URL the sitemap document was retrieved from
/// * `raw_links` - Unvalidated link strings, in document order
///
/// # Returns
///
/// The surviving links, in their original relative order
pub fn filter_in_scope(location: &Url, raw_links: &[String]) -> Vec<Url> {
    let root = root_directory(location);
    let mut links = Vec::new();

    for raw in raw_links {
        match Url::parse(raw) {
            Ok(link) => {
                if link.as_str().starts_with(&root) {
                    links.push(link);
                } else {
                    tracing::debug!("Discarding out-of-scope link {} (root: {})", link, root);
                }
            }
            Err(e) => {
                tracing::debug!("Discarding malformed link {:?}: {}", raw, e);
            }
        }
    }

    links
}
