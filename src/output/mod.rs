//! Console presentation: the shared limit rule plus the plain-text and JSON
//! renderers. The PDF and HTML exporters consume the same selected
//! subsequence through [`select_posts`].

use crate::cache::search::SearchMatch;
use crate::error::Result;
use crate::feed::{Post, Snapshot};

pub mod html;
pub mod pdf;

pub const SEPARATOR: &str =
    "********************************************************************";

/// The effective posts to display. A limit of 0 means no limit, and a limit
/// larger than the snapshot selects everything; otherwise the first `limit`
/// posts in snapshot order.
pub fn select_posts(snapshot: &Snapshot, limit: usize) -> &[Post] {
    if limit == 0 || limit > snapshot.posts.len() {
        &snapshot.posts
    } else {
        &snapshot.posts[..limit]
    }
}

/// Human-readable rendering of the selected posts.
pub fn render_plain(snapshot: &Snapshot, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Blog title {}\n", snapshot.feed_title));
    out.push_str(&format!("Blog link {}\n", snapshot.feed_link));
    for post in select_posts(snapshot, limit) {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&render_post(post));
    }
    out
}

/// JSON rendering of the selected posts: the snapshot with only the selected
/// subsequence, pretty-printed like a cache entry.
pub fn render_json(snapshot: &Snapshot, limit: usize) -> Result<String> {
    let limited = Snapshot {
        feed_title: snapshot.feed_title.clone(),
        feed_link: snapshot.feed_link.clone(),
        posts: select_posts(snapshot, limit).to_vec(),
    };
    serde_json::to_string_pretty(&limited)
        .map_err(|e| crate::error::RssError::Io(format!("rendering JSON: {}", e)))
}

/// Historical search results, grouped by the cache file they came from.
pub fn render_search_results(matches: &[SearchMatch]) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push_str("\nSearch results:\n");
    for m in matches {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("File name: {}\n", m.file.display()));
        for post in &m.posts {
            out.push_str(SEPARATOR);
            out.push('\n');
            out.push_str(&render_post(post));
        }
    }
    out
}

fn render_post(post: &Post) -> String {
    let mut out = String::new();
    out.push_str(&format!("title {}\n", post.title));
    out.push_str(&format!("date {}\n", post.date));
    out.push_str(&format!("link {}\n", post.link));
    out.push_str(&format!("links {}\n", post.links.join(", ")));
    out
}
