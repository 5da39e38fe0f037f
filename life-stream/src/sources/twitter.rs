use super::NEW_WINDOW_ATTR;
use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(([[:alnum:]]+://)|www\.)([^[:space:]]*)([[:alnum:]#?/&=])").unwrap()
});
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(^|\s)@([a-z0-9_]+)").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(^|\s)#([a-z0-9_]+)").unwrap());

pub fn normalize(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: format_tweet(&item.summary, &settings.twitter_username),
        profile: settings.twitter_profile(),
        link: String::new(),
    }
}

/// Strip the "<username>: " self-reference and add anchors for URLs,
/// mentions and hashtags.
pub fn format_tweet(text: &str, username: &str) -> String {
    let own_prefix = format!("{}: ", username);
    let text = text.strip_prefix(&own_prefix).unwrap_or(text);
    linkify(text)
}

pub fn linkify(text: &str) -> String {
    let text = URL.replace_all(text, |caps: &Captures<'_>| {
        let shown = &caps[0];
        let href = if caps.get(2).is_some() {
            shown.to_string()
        } else {
            format!("http://{}", shown)
        };
        format!("<a href=\"{}\"{}>{}</a>", href, NEW_WINDOW_ATTR, shown)
    });
    let text = MENTION.replace_all(&text, |caps: &Captures<'_>| {
        format!(
            "{}<a href=\"http://twitter.com/{}\"{}>@{}</a>",
            &caps[1], &caps[2], NEW_WINDOW_ATTR, &caps[2]
        )
    });
    let text = HASHTAG.replace_all(&text, |caps: &Captures<'_>| {
        format!(
            "{}<a href=\"http://twitter.com/search?q=%23{}\"{}>#{}</a>",
            &caps[1], &caps[2], NEW_WINDOW_ATTR, &caps[2]
        )
    });
    text.into_owned()
}
