use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem};

/// Items shared from Google Reader keep the link they declare.
pub fn normalize_reader(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: item.summary.clone(),
        profile: settings.google_profile(),
        link: item.primary_link().unwrap_or_default().to_string(),
    }
}

pub fn normalize_buzz(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: item.summary.clone(),
        profile: settings.google_profile(),
        link: String::new(),
    }
}
