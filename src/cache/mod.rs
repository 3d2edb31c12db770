//! File-backed snapshot cache.
//!
//! One snapshot becomes one pretty-printed JSON file named
//! `sanitize(feed_title)-yyyymmdd.json` inside the news directory. Entries
//! are write-once: a save whose derived name already exists is a no-op, so
//! repeated runs on the same day never rewrite history. Nothing here ever
//! deletes an entry.
//!
//! The directory is process-wide shared state with no locking; concurrent
//! external writers may race the exists-check and are out of scope.

use chrono::{Local, NaiveDate};
use log::info;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Result, RssError};
use crate::feed::Snapshot;
use crate::utils::DATE_STAMP_FORMAT;

pub mod search;

/// Extension of cache entries. Export collaborators reuse the same filename
/// derivation with their own extensions.
pub const CACHE_FILE_EXTENSION: &str = ".json";

/// Strip a feed title down to filesystem-safe characters: anything outside
/// ASCII alphanumerics and the Cyrillic block becomes a separator, and
/// separator runs collapse to single underscores.
///
/// Titles that differ only in punctuation collapse to the same name. That
/// collision risk is accepted: such feeds cache into one file per day.
pub fn sanitize_title(title: &str) -> String {
    let spaced: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || ('\u{0400}'..='\u{04FF}').contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Filename for a snapshot of `title` taken on `date`. Pure function; the
/// store fixes `date` to today via [`derive_file_name`].
pub fn file_name_for(title: &str, date: NaiveDate, extension: &str) -> String {
    format!(
        "{}-{}{}",
        sanitize_title(title),
        date.format(DATE_STAMP_FORMAT),
        extension
    )
}

/// Filename for a snapshot of `title` taken today.
pub fn derive_file_name(title: &str, extension: &str) -> String {
    file_name_for(title, Local::now().date_naive(), extension)
}

/// What a save did: wrote a new entry, or found today's entry already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written(PathBuf),
    AlreadyCached(PathBuf),
}

/// Persists and loads snapshots under one cache directory.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `snapshot` would be cached today.
    pub fn entry_path(&self, snapshot: &Snapshot) -> PathBuf {
        self.dir
            .join(derive_file_name(&snapshot.feed_title, CACHE_FILE_EXTENSION))
    }

    /// True iff today's entry for this feed title is already on disk.
    pub fn exists(&self, snapshot: &Snapshot) -> bool {
        self.entry_path(snapshot).is_file()
    }

    /// Write the snapshot unless today's entry already exists. Creates the
    /// cache directory on first use. The existing-entry case is the
    /// documented idempotence behavior, not an error.
    pub fn save(&self, snapshot: &Snapshot) -> Result<SaveOutcome> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| RssError::Io(format!("creating {}: {}", self.dir.display(), e)))?;

        let path = self.entry_path(snapshot);
        if path.is_file() {
            info!("File {} found. No need to cache", path.display());
            return Ok(SaveOutcome::AlreadyCached(path));
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| RssError::Io(format!("serializing snapshot: {}", e)))?;
        fs::write(&path, json)
            .map_err(|e| RssError::Io(format!("writing {}: {}", path.display(), e)))?;
        info!("News saved to {}", path.display());
        Ok(SaveOutcome::Written(path))
    }

    /// Lazily yield every cache entry under the news directory (recursively),
    /// one parsed snapshot at a time. A missing directory yields nothing;
    /// callers that require its presence check first (see
    /// [`search::search_by_date`]). A file that fails to parse surfaces as
    /// [`RssError::CacheCorruption`] naming the file, never a silent skip.
    pub fn load_all(&self) -> Result<SnapshotIter> {
        let mut files = Vec::new();
        if self.dir.is_dir() {
            collect_cache_files(&self.dir, &mut files)
                .map_err(|e| RssError::Io(format!("scanning {}: {}", self.dir.display(), e)))?;
        }
        files.sort();
        Ok(SnapshotIter {
            files: files.into_iter(),
        })
    }
}

fn collect_cache_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_cache_files(&path, out)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.ends_with(CACHE_FILE_EXTENSION))
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Iterator over `(path, snapshot)` pairs. Each `next()` opens, parses, and
/// closes exactly one file, so only one entry is resident at a time no matter
/// how large the cache directory grows.
pub struct SnapshotIter {
    files: std::vec::IntoIter<PathBuf>,
}

impl Iterator for SnapshotIter {
    type Item = Result<(PathBuf, Snapshot)>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.files.next()?;
        Some(read_snapshot(path))
    }
}

fn read_snapshot(path: PathBuf) -> Result<(PathBuf, Snapshot)> {
    let file = File::open(&path)
        .map_err(|e| RssError::Io(format!("opening {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = serde_json::from_reader(reader)
        .map_err(|e| RssError::CacheCorruption(format!("{}: {}", path.display(), e)))?;
    Ok((path, snapshot))
}
