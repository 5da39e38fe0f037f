use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem};
use crate::utils::text::partitioned;

pub fn normalize(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: link_gist(&item.summary, &settings.git_username),
        profile: settings.git_profile(),
        link: String::new(),
    }
}

/// Wrap a leading "<username> updated gist: <id>" (or "created") in a link
/// to the gist. Other activity is returned unchanged.
pub fn link_gist(text: &str, username: &str) -> String {
    for kind in ["updated", "created"] {
        let gist_text = format!("{} {} gist: ", username, kind);
        if !text.starts_with(&gist_text) {
            continue;
        }
        let gist_id = partitioned(&gist_text, " ", text).unwrap_or_default();
        let linked = format!("{}{}", gist_text, gist_id);
        let anchor = format!(
            "<a href=\"http://gist.github.com/{}\">{}</a>",
            gist_id, linked
        );
        return text.replacen(&linked, &anchor, 1);
    }
    text.to_string()
}
