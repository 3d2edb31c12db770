//! HTML export of a snapshot selection.
//!
//! Export files are plain artifacts sharing the cache filename derivation
//! with an `.html` extension; unlike cache entries they are overwritten
//! freely on every run.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::derive_file_name;
use crate::error::{Result, RssError};
use crate::feed::Snapshot;
use crate::output::select_posts;
use crate::utils::format_display_date;

pub const HTML_EXTENSION: &str = ".html";

pub fn save_to_html(snapshot: &Snapshot, limit: usize, out_dir: &Path) -> Result<PathBuf> {
    let document = build_html(snapshot, limit)?;

    fs::create_dir_all(out_dir)
        .map_err(|e| RssError::ExportWriteFailure(format!("creating {}: {}", out_dir.display(), e)))?;
    let path = out_dir.join(derive_file_name(&snapshot.feed_title, HTML_EXTENSION));
    fs::write(&path, document)
        .map_err(|e| RssError::ExportWriteFailure(format!("writing {}: {}", path.display(), e)))?;
    info!("Saved HTML export to {}", path.display());
    Ok(path)
}

fn build_html(snapshot: &Snapshot, limit: usize) -> Result<String> {
    let mut html = String::from("<html>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", snapshot.feed_title));
    html.push_str(&format!(
        "<h2><a href=\"{0}\">{0}</a></h2>\n<hr>\n",
        snapshot.feed_link
    ));
    for post in select_posts(snapshot, limit) {
        html.push_str(&format!("<p><h3>{}</h3>\n", post.title));
        html.push_str(&format!("{}<br>\n", format_display_date(&post.date)?));
        html.push_str(&format!("<a href=\"{0}\">{0}</a><br>\n", post.link));
        for media in &post.links {
            if media.ends_with(".jpg") {
                html.push_str(&format!("<img src=\"{}\">\n", media));
            }
        }
        html.push_str("</p>\n<hr>\n");
    }
    html.push_str("</body>\n</html>\n");
    Ok(html)
}
