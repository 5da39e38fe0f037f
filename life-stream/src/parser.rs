use crate::types::{AggregatorError, MediaAttachment, ParsedFeed, RawFeedItem, Result};
use feed_rs::parser;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Prefix, QName};
use quick_xml::reader::Reader;
use tracing::{debug, info, warn};

pub struct FeedParser;

impl FeedParser {
    /// Parse an Atom or RSS document into items, in document order.
    ///
    /// An empty document parses to an empty feed rather than an error.
    pub fn parse_feed(content: &str) -> Result<ParsedFeed> {
        if content.trim().is_empty() {
            debug!("Empty document, nothing to parse");
            return Ok(ParsedFeed::default());
        }
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| AggregatorError::Parse(format!("Failed to parse feed: {}", e)))?;

        // feed-rs does not see the rewritten media elements, so they are
        // collected separately and matched up by position.
        let mut media = Self::extract_media(content).unwrap_or_else(|e| {
            warn!("Ignoring media attachments: {}", e);
            Vec::new()
        });

        let items: Vec<RawFeedItem> = feed
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let attachments = media.get_mut(index).map(std::mem::take).unwrap_or_default();
                Self::parse_entry(entry, attachments)
            })
            .collect();

        info!("Parsed feed with {} items", items.len());
        Ok(ParsedFeed { items })
    }

    fn parse_entry(entry: feed_rs::model::Entry, media: Vec<MediaAttachment>) -> RawFeedItem {
        let title = entry.title.map(|t| t.content).unwrap_or_default();
        let summary = entry.summary.map(|s| s.content).unwrap_or_default();
        let content = entry.content.and_then(|c| c.body).unwrap_or_default();
        let updated = entry.updated.or(entry.published);
        let links = entry
            .links
            .into_iter()
            .map(|link| link.href)
            .filter(|href| !href.trim().is_empty())
            .collect();

        RawFeedItem {
            title,
            summary,
            content,
            updated,
            links,
            media,
        }
    }

    /// Media attachments of every `entry`/`item`, one list per item.
    ///
    /// Elements are matched by local name, so namespace-prefixed feeds
    /// (`<atom:entry>`) line up with what feed-rs returns. Accepts both the
    /// rewritten `mediacontent`/`mediaplayer` element names and the `media:`
    /// prefixed ones.
    pub fn extract_media(content: &str) -> Result<Vec<Vec<MediaAttachment>>> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut items: Vec<Vec<MediaAttachment>> = Vec::new();
        let mut in_item = false;
        let mut open_content: Option<MediaAttachment> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match element_kind(e.name()) {
                    Some(Element::Item) => {
                        in_item = true;
                        items.push(Vec::new());
                    }
                    Some(Element::MediaContent) if in_item => {
                        open_content = Some(MediaAttachment {
                            url: attribute(&e, "url").unwrap_or_default(),
                            player_url: None,
                        });
                    }
                    Some(Element::MediaPlayer) => {
                        if let Some(attachment) = open_content.as_mut() {
                            attachment.player_url = attribute(&e, "url");
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match element_kind(e.name()) {
                    Some(Element::MediaContent) if in_item => {
                        if let Some(current) = items.last_mut() {
                            current.push(MediaAttachment {
                                url: attribute(&e, "url").unwrap_or_default(),
                                player_url: None,
                            });
                        }
                    }
                    Some(Element::MediaPlayer) => {
                        if let Some(attachment) = open_content.as_mut() {
                            attachment.player_url = attribute(&e, "url");
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match element_kind(e.name()) {
                    Some(Element::Item) => in_item = false,
                    Some(Element::MediaContent) => {
                        if let (Some(attachment), Some(current)) =
                            (open_content.take(), items.last_mut())
                        {
                            current.push(attachment);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AggregatorError::Parse(format!(
                        "XML error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Item,
    MediaContent,
    MediaPlayer,
}

fn element_kind(name: QName<'_>) -> Option<Element> {
    let prefix = name.prefix();
    match name.local_name().as_ref() {
        b"entry" | b"item" => Some(Element::Item),
        b"mediacontent" => Some(Element::MediaContent),
        b"mediaplayer" => Some(Element::MediaPlayer),
        // plain `content` is the Atom entry body
        b"content" if is_media_prefix(prefix) => Some(Element::MediaContent),
        b"player" if is_media_prefix(prefix) => Some(Element::MediaPlayer),
        _ => None,
    }
}

fn is_media_prefix(prefix: Option<Prefix<'_>>) -> bool {
    prefix.is_some_and(|p| p.as_ref() == b"media")
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}
