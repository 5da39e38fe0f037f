#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use life_stream::{RawFeedItem, Settings};
use std::sync::Once;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Nothing listens on port 1, so connections are refused straight away.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/feed";

pub fn settings() -> Settings {
    Settings::default()
}

pub fn item(title: &str, summary: &str) -> RawFeedItem {
    RawFeedItem {
        title: title.to_string(),
        summary: summary.to_string(),
        updated: Some(Utc.with_ymd_and_hms(2010, 6, 1, 11, 0, 0).unwrap()),
        ..Default::default()
    }
}

pub fn buzz_title(provider: &str) -> String {
    format!("Buzz by Stephen McDonald from {}", provider)
}

/// The clock the fixture feeds are read against.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2010, 6, 1, 12, 0, 0).unwrap()
}

/// Serve `body` with `status` to every connection until the test ends.
pub async fn spawn_responder(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/feed", addr)
}

pub const BUZZ_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/">
  <title>Google Buzz</title>
  <id>tag:google.com,2010:buzz-feed/public/posted/1</id>
  <updated>2010-06-01T11:00:00.000Z</updated>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Twitter</title>
    <id>tag:google.com,2010:buzz/1</id>
    <updated>2010-06-01T11:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://www.google.com/buzz/1"/>
    <summary type="html">stephen_mcd: reading @alice on http://example.com/x #rust</summary>
  </entry>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Flickr</title>
    <id>tag:google.com,2010:buzz/2</id>
    <updated>2010-05-31T12:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://www.google.com/buzz/2"/>
    <summary type="html">3 new photos</summary>
    <media:content url="http://flickr.com/photos/stephen_mcd/1">
      <media:player url="http://farm.static.flickr.com/1_b.jpg"/>
    </media:content>
    <media:content url="http://flickr.com/photos/stephen_mcd/2">
      <media:player url="http://farm.static.flickr.com/2_b.jpg"/>
    </media:content>
    <media:content url="http://flickr.com/photos/stephen_mcd/3">
      <media:player url="http://farm.static.flickr.com/3_b.jpg"/>
    </media:content>
  </entry>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Google Reader</title>
    <id>tag:google.com,2010:buzz/3</id>
    <updated>2010-05-25T12:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://www.google.com/buzz/3"/>
    <summary type="html">Story Title - Slashdot - someone writes "It happened." Read more of this story at Slashdot.</summary>
    <content type="html">&lt;a href="http://slashdot.org/story/1"&gt;Story Title&lt;/a&gt;</content>
  </entry>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Google Reader</title>
    <id>tag:google.com,2010:buzz/4</id>
    <updated>2010-06-01T09:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://example.org/shared"/>
    <summary type="html">An article worth reading</summary>
  </entry>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Google Reader</title>
    <id>tag:google.com,2010:buzz/5</id>
    <updated>2010-06-01T11:59:30.000Z</updated>
    <link rel="alternate" type="text/html" href="http://www.google.com/buzz/5"/>
    <summary type="html">A reddit link - reddit.com: what's new online! - shared</summary>
    <content type="html">&lt;a href="http://www.reddit.com/r/rust/1"&gt;link&lt;/a&gt;</content>
  </entry>
  <entry>
    <title type="html">stephen-mcd&amp;#39;s Activity</title>
    <id>tag:google.com,2010:buzz/6</id>
    <updated>2009-01-01T12:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://github.com/stephen-mcd"/>
    <summary type="html">stephen-mcd created gist: 12345 tidy up</summary>
  </entry>
  <entry>
    <title type="html">Buzz by Stephen McDonald from Buzz</title>
    <id>tag:google.com,2010:buzz/7</id>
    <updated>2010-06-01T10:00:00.000Z</updated>
    <link rel="alternate" type="text/html" href="http://www.google.com/buzz/7"/>
    <summary type="html">Rock &amp; roll</summary>
  </entry>
</feed>
"#;

pub const BLOG_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Steve's blog</title>
    <link>http://steve-mc.tumblr.com/</link>
    <description>A blog</description>
    <item>
      <title>First post</title>
      <link>http://steve-mc.tumblr.com/post/1</link>
      <guid>http://steve-mc.tumblr.com/post/1</guid>
      <description>&lt;p&gt;Opening paragraph.&lt;/p&gt;&lt;p&gt;Second paragraph.&lt;/p&gt;</description>
      <pubDate>Tue, 01 Jun 2010 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Older post</title>
      <link>http://steve-mc.tumblr.com/post/0</link>
      <guid>http://steve-mc.tumblr.com/post/0</guid>
      <description>No paragraphs here</description>
      <pubDate>Sat, 01 May 2010 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>
"#;
