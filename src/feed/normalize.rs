//! Raw feed → snapshot conversion.
//!
//! Entries are walked in source order; the first entry carrying a given title
//! wins and later duplicates are dropped. A non-duplicate entry missing a
//! required field (title, published timestamp, primary link) fails the whole
//! call; the caller decides whether that is fatal.

use feed_rs::model::{Entry, Feed};
use log::info;
use std::collections::HashSet;

use crate::error::{Result, RssError};
use crate::feed::{Post, Snapshot};
use crate::utils::DATE_STAMP_FORMAT;

pub fn normalize(feed: &Feed) -> Result<Snapshot> {
    let feed_title = feed
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .ok_or_else(|| RssError::FeedMalformed("feed has no title".to_string()))?;
    let feed_link = feed
        .links
        .first()
        .map(|l| l.href.clone())
        .ok_or_else(|| RssError::FeedMalformed("feed has no link".to_string()))?;

    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut posts = Vec::new();
    for entry in &feed.entries {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .ok_or_else(|| RssError::FeedMalformed("entry has no title".to_string()))?;
        // Duplicate titles are skipped before field validation, so a repeat
        // of an already-kept post never fails the call.
        if seen_titles.contains(&title) {
            continue;
        }
        let post = entry_to_post(entry, title.clone())?;
        seen_titles.insert(title);
        posts.push(post);
    }

    info!(
        "Normalized feed '{}': {} of {} entries kept",
        feed_title,
        posts.len(),
        feed.entries.len()
    );
    Ok(Snapshot {
        feed_title,
        feed_link,
        posts,
    })
}

fn entry_to_post(entry: &Entry, title: String) -> Result<Post> {
    let published = entry.published.ok_or_else(|| {
        RssError::FeedMalformed(format!("entry '{}' has no published date", title))
    })?;
    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .ok_or_else(|| RssError::FeedMalformed(format!("entry '{}' has no link", title)))?;
    let links = entry.links.iter().map(|l| l.href.clone()).collect();

    Ok(Post {
        title,
        date: published.format(DATE_STAMP_FORMAT).to_string(),
        link,
        links,
    })
}
