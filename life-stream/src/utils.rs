/// Text helpers shared by the normalizers.
pub mod text {
    /// The first portion of `text` that follows `start` and precedes `end`.
    ///
    /// Returns `None` when `start` does not occur. A missing `end` yields
    /// everything after `start`.
    pub fn partitioned<'a>(start: &str, end: &str, text: &'a str) -> Option<&'a str> {
        let from = text.find(start)? + start.len();
        let rest = &text[from..];
        match rest.find(end) {
            Some(to) => Some(&rest[..to]),
            None => Some(rest),
        }
    }

    /// Value of the first `href="..."` attribute in a chunk of markup.
    pub fn first_href(markup: &str) -> Option<&str> {
        partitioned("href=\"", "\"", markup).filter(|href| !href.is_empty())
    }
}
