pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod output;
pub mod utils;

// Re-export the cache and feed surface most callers need
pub use cache::{SaveOutcome, SnapshotStore};
pub use error::{Result, RssError};
pub use feed::{Post, Snapshot};
