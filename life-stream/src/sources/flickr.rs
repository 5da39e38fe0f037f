use crate::config::Settings;
use crate::types::{AggregatorError, MediaAttachment, Normalized, RawFeedItem, Result};

const LARGE_SUFFIX: &str = "_b.jpg";
const THUMBNAIL_SUFFIX: &str = "_s_d.jpg";

/// More thumbnails than this wrap onto a new line and need a clearing break.
const THUMBNAILS_PER_ROW: usize = 2;

pub fn normalize(item: &RawFeedItem, settings: &Settings) -> Result<Normalized> {
    let (body, count) = thumbnails(&item.media);
    if count == 0 {
        return Err(AggregatorError::MissingField {
            field: "media thumbnails",
        });
    }
    Ok(Normalized {
        body,
        profile: settings.flickr_profile(),
        link: String::new(),
    })
}

/// Thumbnail markup for the attachments, and how many images it holds.
pub fn thumbnails(media: &[MediaAttachment]) -> (String, usize) {
    let mut text = String::new();
    let mut count = 0;
    for attachment in media {
        let Some(player_url) = attachment.player_url.as_deref() else {
            continue;
        };
        let img = player_url.replace(LARGE_SUFFIX, THUMBNAIL_SUFFIX);
        if img.contains(THUMBNAIL_SUFFIX) {
            count += 1;
            text.push_str(&format!(
                "<a href=\"{}\"><img src=\"{}\" /></a>",
                attachment.url, img
            ));
        }
    }
    if count > THUMBNAILS_PER_ROW {
        text.push_str("<br clear=\"both\" />");
    }
    (text, count)
}
