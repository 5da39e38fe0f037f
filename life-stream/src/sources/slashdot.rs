use crate::config::Settings;
use crate::types::{Normalized, RawFeedItem};
use crate::utils::text::first_href;

const WRITES: &str = " writes \"";
const BOILERPLATE: &str = "Read more of this story at Slashdot.";

pub fn normalize(item: &RawFeedItem, settings: &Settings) -> Normalized {
    Normalized {
        body: format_story(&item.summary, &settings.slashdot_title),
        profile: settings.slashdot_profile(),
        link: first_href(&item.content).unwrap_or_default().to_string(),
    }
}

/// Join the story title to its text with ": ", dropping the submitter
/// preamble and the trailing boilerplate.
pub fn format_story(text: &str, slashdot_title: &str) -> String {
    let joined = match text.find(WRITES) {
        Some(writes_pos) => {
            let title_end = text.find(slashdot_title).unwrap_or(0);
            // keep the opening quote of the submission
            let quote_pos = writes_pos + WRITES.len() - 1;
            format!("{}: {}", &text[..title_end], &text[quote_pos..])
        }
        None => text.replace(slashdot_title, ": "),
    };
    joined.replace(BOILERPLATE, "")
}
