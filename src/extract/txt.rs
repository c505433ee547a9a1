//! Plain-text link extraction
//!
//! Splits the document on whitespace runs (spaces, tabs, newlines); every
//! non-empty token is a raw candidate link. There is no structural grammar
//! to violate, so this extractor never fails: the worst case is zero tokens,
//! or garbage tokens that URL validation discards later.

/// Extracts whitespace-delimited tokens from a plain-text link list
///
/// # Arguments
///
/// * `content` - The raw text
///
/// # Returns
///
/// The non-empty tokens in document order
pub(super) fn parse_links(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}
