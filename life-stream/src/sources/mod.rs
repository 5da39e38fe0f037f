//! Per-source normalizers.
//!
//! Each variant turns the raw text of one item into display markup, the
//! profile link of the source, and an optional "read more" link. They are
//! pure functions of the item and the settings.

pub mod blog;
pub mod flickr;
pub mod git;
pub mod google;
pub mod reddit;
pub mod slashdot;
pub mod twitter;

use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem, Result, SourceVariant};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Attribute the twitter linkifier adds to every anchor.
pub(crate) const NEW_WINDOW_ATTR: &str = " target=\"_blank\"";

/// " &" not already starting an entity reference.
static BARE_AMPERSAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" &(#[0-9]+;|#[xX][0-9A-Fa-f]+;|[A-Za-z][A-Za-z0-9]*;)?").unwrap());

/// Run the normalizer for `variant` over `item`, then [`finalize_body`].
pub fn normalize(
    variant: SourceVariant,
    item: &RawFeedItem,
    settings: &Settings,
) -> Result<Normalized> {
    let mut normalized = match variant {
        SourceVariant::Twitter => twitter::normalize(item, settings),
        SourceVariant::Flickr => flickr::normalize(item, settings)?,
        SourceVariant::Git => git::normalize(item, settings),
        SourceVariant::Slashdot => slashdot::normalize(item, settings),
        SourceVariant::Reddit => reddit::normalize(item, settings),
        SourceVariant::GoogleReader => google::normalize_reader(item, settings),
        SourceVariant::GoogleBuzz => google::normalize_buzz(item, settings),
    };
    normalized.body = finalize_body(&normalized.body);
    Ok(normalized)
}

/// Markup cleanup applied to every body: drop new-window attributes and
/// escape bare ampersands. Running it twice changes nothing.
pub fn finalize_body(body: &str) -> String {
    let mut body = body.to_string();
    // removing one occurrence can join the text around it into another
    while body.contains(NEW_WINDOW_ATTR) {
        body = body.replace(NEW_WINDOW_ATTR, "");
    }
    BARE_AMPERSAND
        .replace_all(&body, |caps: &Captures<'_>| match caps.get(1) {
            Some(entity) => format!(" &{}", entity.as_str()),
            None => " &amp;".to_string(),
        })
        .into_owned()
}
