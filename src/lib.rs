//! Sumi-Sitemap: sitemap ingestion for the Sumi crawler family
//!
//! This crate takes a raw sitemap document together with the URL it was
//! retrieved from, determines the document's format (XML sitemap, RSS 2.0
//! feed, or plain-text link list), extracts the page links it claims, and
//! keeps only the links that are syntactically valid and scoped under the
//! sitemap's own directory.

pub mod extract;
pub mod sitemap;

use thiserror::Error;

/// Main error type for Sumi-Sitemap operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("No recognizable sitemap format for document at {location}")]
    UnknownFormat { location: String },
}

/// Extraction-specific errors
///
/// Raised when content does not satisfy the structural grammar of the format
/// it is being read as. A malformed-XML failure under one format assumption
/// only rules out that format; detection treats it as "try the next one".
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type alias for Sumi-Sitemap operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for link extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use extract::SitemapFormat;
pub use sitemap::{detect, filter_in_scope, root_directory, Sitemap};
