//! End-to-end run over the cache core: normalize a feed with duplicate
//! titles, cache it, re-save it, and find it again by date.

use async_trait::async_trait;
use feed_rs::model::Feed;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use rss_news_reader::cache::search::search_by_date;
use rss_news_reader::cache::SnapshotStore;
use rss_news_reader::error::Result;
use rss_news_reader::feed::normalize::normalize;
use rss_news_reader::feed::FeedSource;
use rss_news_reader::{RssError, SaveOutcome};

const TECH_NEWS_XML: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
<title>Tech News!!</title>
<link>https://technews.example/</link>
<item><title>Breaking</title><link>https://technews.example/breaking-1</link><pubDate>Mon, 01 Jan 2024 10:00:00 GMT</pubDate></item>
<item><title>Breaking</title><link>https://technews.example/breaking-2</link><pubDate>Tue, 02 Jan 2024 10:00:00 GMT</pubDate></item>
<item><title>Other</title><link>https://technews.example/other</link><pubDate>Wed, 03 Jan 2024 09:00:00 GMT</pubDate></item>
</channel></rss>"#;

/// Canned feed source standing in for the network.
struct CannedFeed(&'static str);

#[async_trait]
impl FeedSource for CannedFeed {
    async fn fetch(&self, _url: &str) -> Result<Feed> {
        feed_rs::parser::parse(self.0.as_bytes())
            .map_err(|e| RssError::FeedMalformed(e.to_string()))
    }
}

#[tokio::test]
async fn fetch_normalize_cache_and_search() {
    let source = CannedFeed(TECH_NEWS_XML);
    let feed = source.fetch("https://technews.example/rss").await.unwrap();
    let snapshot = normalize(&feed).unwrap();

    // Duplicate "Breaking" collapsed to its first occurrence.
    assert_eq!(snapshot.feed_title, "Tech News!!");
    assert_eq!(snapshot.posts.len(), 2);
    assert_eq!(snapshot.posts[0].title, "Breaking");
    assert_eq!(snapshot.posts[0].date, "20240101");
    assert_eq!(snapshot.posts[1].title, "Other");

    let dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(dir.path());

    // First save writes Tech_News-<today>.json, second is a no-op.
    let path = match store.save(&snapshot).unwrap() {
        SaveOutcome::Written(p) => p,
        other => panic!("expected a write, got {:?}", other),
    };
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("Tech_News-"), "unexpected name {}", name);
    assert!(name.ends_with(".json"));
    assert!(matches!(
        store.save(&snapshot).unwrap(),
        SaveOutcome::AlreadyCached(_)
    ));

    // Cache round trip preserves the snapshot exactly.
    let loaded: Vec<_> = store
        .load_all()
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].1, snapshot);

    // The kept "Breaking" is found by its date; the dropped duplicate's
    // date matches nothing.
    let matches = search_by_date(&store, "20240101").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].posts.len(), 1);
    assert_eq!(matches[0].posts[0].title, "Breaking");
    assert_eq!(matches[0].posts[0].link, "https://technews.example/breaking-1");

    assert!(matches!(
        search_by_date(&store, "20240102"),
        Err(RssError::NotFound(_))
    ));
}
