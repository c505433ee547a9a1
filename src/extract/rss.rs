//! RSS 2.0 feed link extraction
//!
//! Streams the document with quick-xml and collects the text of every `link`
//! element nested under `item` under `channel`, i.e. the RSS 2.0 schema path
//! `rss/channel/item/link`. The channel's own `link` element is not an item
//! link and is ignored.

use crate::{ExtractError, ExtractResult};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts raw `rss/channel/item/link` entries from an RSS feed document
///
/// # Arguments
///
/// * `content` - The raw XML text
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The item link texts in document order
/// * `Err(ExtractError)` - The content is not well-formed XML
pub(super) fn parse_links(content: &str) -> ExtractResult<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut links = Vec::new();
    let mut buf = Vec::new();

    let mut in_channel = false;
    let mut in_item = false;
    let mut in_link = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"channel" => in_channel = true,
                b"item" if in_channel => in_item = true,
                b"link" if in_item => {
                    in_link = true;
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"channel" => in_channel = false,
                b"item" => in_item = false,
                b"link" if in_link => {
                    links.push(std::mem::take(&mut current));
                    in_link = false;
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_link => {
                current.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::CData(ref e)) if in_link => {
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
