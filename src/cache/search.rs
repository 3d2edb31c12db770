//! Historical lookup over the cache directory.

use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

use crate::cache::SnapshotStore;
use crate::error::{Result, RssError};
use crate::feed::Post;
use crate::utils::DATE_STAMP_FORMAT;

/// Matching posts from one cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub file: PathBuf,
    pub posts: Vec<Post>,
}

/// A search date must be exactly the yyyymmdd form used in cache entries.
pub fn validate_date_argument(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, DATE_STAMP_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            RssError::InvalidDateArgument(format!("'{}' is not a yyyymmdd date", date))
        })
}

/// Scan every cached snapshot for posts matching `date`, grouped by source
/// file. The cache directory must already exist; zero matches across the
/// whole directory is an error, not an empty result.
pub fn search_by_date(store: &SnapshotStore, date: &str) -> Result<Vec<SearchMatch>> {
    if !store.dir().is_dir() {
        return Err(RssError::CacheDirectoryMissing(
            store.dir().display().to_string(),
        ));
    }

    let mut matches = Vec::new();
    let mut files_scanned = 0usize;
    for item in store.load_all()? {
        let (file, snapshot) = item?;
        files_scanned += 1;
        let posts: Vec<Post> = snapshot
            .posts
            .iter()
            .filter(|post| post_matches(post, date))
            .cloned()
            .collect();
        if !posts.is_empty() {
            matches.push(SearchMatch { file, posts });
        }
    }
    info!(
        "Search for {} scanned {} cache files, matched {}",
        date,
        files_scanned,
        matches.iter().map(|m| m.posts.len()).sum::<usize>()
    );

    if matches.is_empty() {
        return Err(RssError::NotFound(format!(
            "no cached posts match {}",
            date
        )));
    }
    Ok(matches)
}

/// A post matches when ANY of its string fields equals the query — broader
/// than a publication-date lookup: a title or link that happens to equal the
/// query string also matches. Callers relying on search results must expect
/// that breadth.
fn post_matches(post: &Post, date: &str) -> bool {
    post.title == date || post.date == date || post.link == date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Snapshot;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn post(title: &str, date: &str) -> Post {
        Post {
            title: title.to_string(),
            date: date.to_string(),
            link: format!("https://example.com/{}", title.to_lowercase()),
            links: vec![],
        }
    }

    fn save(dir: &TempDir, feed_title: &str, posts: Vec<Post>) {
        let store = SnapshotStore::new(dir.path());
        store
            .save(&Snapshot {
                feed_title: feed_title.to_string(),
                feed_link: "https://example.com/".to_string(),
                posts,
            })
            .unwrap();
    }

    #[test]
    fn date_argument_validation() {
        assert!(validate_date_argument("20220826").is_ok());
        assert!(matches!(
            validate_date_argument("26-08-2022"),
            Err(RssError::InvalidDateArgument(_))
        ));
        assert!(validate_date_argument("2022").is_err());
        assert!(validate_date_argument("20221301").is_err());
    }

    #[test]
    fn finds_posts_by_date_grouped_by_file() {
        let dir = TempDir::new().unwrap();
        save(&dir, "Feed One", vec![post("Hit", "20240101"), post("Miss", "20240102")]);
        save(&dir, "Feed Two", vec![post("Also", "20240101")]);

        let store = SnapshotStore::new(dir.path());
        let matches = search_by_date(&store, "20240101").unwrap();
        assert_eq!(matches.len(), 2);
        let total: usize = matches.iter().map(|m| m.posts.len()).sum();
        assert_eq!(total, 2);
        for m in &matches {
            assert!(m.posts.iter().all(|p| p.date == "20240101"));
        }
    }

    #[test]
    fn any_field_equality_also_matches_titles() {
        let dir = TempDir::new().unwrap();
        save(&dir, "Feed", vec![post("20990101", "20240101")]);

        let store = SnapshotStore::new(dir.path());
        let matches = search_by_date(&store, "20990101").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].posts[0].title, "20990101");
    }

    #[test]
    fn zero_matches_is_not_found() {
        let dir = TempDir::new().unwrap();
        save(&dir, "Feed", vec![post("Old", "20240101")]);

        let store = SnapshotStore::new(dir.path());
        assert!(matches!(
            search_by_date(&store, "20990101"),
            Err(RssError::NotFound(_))
        ));
    }

    #[test]
    fn missing_directory_fails_before_scanning() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("missing"));
        assert!(matches!(
            search_by_date(&store, "20240101"),
            Err(RssError::CacheDirectoryMissing(_))
        ));
    }

    #[test]
    fn corrupt_file_aborts_the_search() {
        let dir = TempDir::new().unwrap();
        save(&dir, "Feed", vec![post("Hit", "20240101")]);
        std::fs::write(dir.path().join("zz_broken.json"), "not json").unwrap();

        let store = SnapshotStore::new(dir.path());
        assert!(matches!(
            search_by_date(&store, "20240101"),
            Err(RssError::CacheCorruption(_))
        ));
    }
}
