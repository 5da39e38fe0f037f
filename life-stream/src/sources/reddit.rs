use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem};
use crate::utils::text::first_href;

pub fn normalize(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: story_title(&item.summary, &settings.reddit_title).to_string(),
        profile: settings.reddit_profile(),
        link: first_href(&item.content).unwrap_or_default().to_string(),
    }
}

/// Everything before the reddit marker.
pub fn story_title<'a>(text: &'a str, reddit_title: &str) -> &'a str {
    match text.find(reddit_title) {
        Some(end) => &text[..end],
        None => text,
    }
}
