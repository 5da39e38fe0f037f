use crate::config::Settings;
use crate::types::{RawFeedItem, SourceVariant};

/// Work out which service produced a buzz item.
///
/// The title, minus its "Buzz by <name> from " prefix, names the provider.
/// Items shared through Google Reader are further told apart by marker
/// strings in their summary.
pub fn classify(item: &RawFeedItem, settings: &Settings) -> SourceVariant {
    let prefix = settings.buzz_title_prefix();
    let provider = item.title.strip_prefix(&prefix).unwrap_or(&item.title);

    match provider {
        "Twitter" => SourceVariant::Twitter,
        "Flickr" => SourceVariant::Flickr,
        "Google Reader" => {
            if item.summary.contains(&settings.slashdot_title) {
                SourceVariant::Slashdot
            } else if item.summary.contains(&settings.reddit_title) {
                SourceVariant::Reddit
            } else {
                SourceVariant::GoogleReader
            }
        }
        other if is_git_activity(other, &settings.git_username) => SourceVariant::Git,
        _ => SourceVariant::GoogleBuzz,
    }
}

/// "<username>'s Activity", with the apostrophe raw or entity-escaped.
fn is_git_activity(title: &str, git_username: &str) -> bool {
    let Some(rest) = title.strip_prefix(git_username) else {
        return false;
    };
    ["'s Activity", "&#39;s Activity", "&amp;#39;s Activity"].contains(&rest)
}
