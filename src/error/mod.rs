use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RssError {
    /// Network/connectivity issues while reaching the feed host
    #[error("Feed Unreachable: {0}")]
    FeedUnreachable(String),

    /// The feed (or one of its entries) is missing a required field
    #[error("Feed Malformed: {0}")]
    FeedMalformed(String),

    /// The feed URL does not parse as a URL at all
    #[error("Invalid Feed URL: {0}")]
    InvalidFeedUrl(String),

    /// `--date` argument not in yyyymmdd form
    #[error("Invalid Date Argument: {0}")]
    InvalidDateArgument(String),

    /// Historical search requested before any cache exists
    #[error("Cache Directory Missing: {0}")]
    CacheDirectoryMissing(String),

    /// A cache file exists but fails to parse; names the file
    #[error("Cache Corruption: {0}")]
    CacheCorruption(String),

    /// Historical search ran but matched nothing
    #[error("Not Found: {0}")]
    NotFound(String),

    /// PDF/HTML collaborator could not write its output directory or file
    #[error("Export Write Failure: {0}")]
    ExportWriteFailure(String),

    /// Cache directory creation or cache write failures
    #[error("IO Error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for RssError {
    fn from(err: serde_json::Error) -> Self {
        RssError::FeedMalformed(format!("JSON serialization/deserialization error: {}", err))
    }
}

impl From<std::io::Error> for RssError {
    fn from(err: std::io::Error) -> Self {
        RssError::Io(err.to_string())
    }
}

impl RssError {
    /// Process exit code reported for this error kind. Everything is terminal
    /// for the current invocation; codes only distinguish user mistakes from
    /// environment failures in scripts.
    pub fn exit_code(&self) -> i32 {
        match self {
            RssError::InvalidFeedUrl(_) | RssError::InvalidDateArgument(_) => 2,
            _ => 1,
        }
    }
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, RssError>;
