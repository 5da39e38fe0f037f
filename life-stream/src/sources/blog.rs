use crate::types::{AggregatorError, BlogEntry, RawFeedItem, Result};
use crate::utils::text::partitioned;
use chrono::{DateTime, Utc};

/// Build a blog entry from an RSS item, keeping only the first paragraph.
pub fn normalize(item: &RawFeedItem, now: DateTime<Utc>) -> Result<BlogEntry> {
    let published = item
        .updated
        .ok_or(AggregatorError::MissingField { field: "pubDate" })?;

    let description = if item.summary.trim().is_empty() {
        &item.content
    } else {
        &item.summary
    };

    Ok(BlogEntry {
        link: item.primary_link().unwrap_or_default().to_string(),
        title: item.title.clone(),
        body: first_paragraph(description).to_string(),
        time: crate::duration::relative_time_at(published, now),
    })
}

/// Contents of the first `<p>` element, or the whole text when there is none.
pub fn first_paragraph(html: &str) -> &str {
    partitioned("<p>", "</p>", html).unwrap_or(html).trim()
}
