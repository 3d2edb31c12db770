use std::env;

/// Runtime configuration. Folder names and fetch behavior were module-level
/// constants in earlier revisions; they are now loaded once and passed into
/// each component explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_dir: String,
    pub pdf_dir: String,
    pub html_dir: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            news_dir: env::var("RSS_NEWS_DIR").unwrap_or_else(|_| "news".to_string()),
            pdf_dir: env::var("RSS_PDF_DIR").unwrap_or_else(|_| "news_pdf".to_string()),
            html_dir: env::var("RSS_HTML_DIR").unwrap_or_else(|_| "news_html".to_string()),
            fetch_timeout_secs: env::var("RSS_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            user_agent: env::var("RSS_USER_AGENT")
                .unwrap_or_else(|_| concat!("rss-news-reader/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }

    pub fn validate_and_log(&self) {
        log::info!("Application Configuration Loaded: {:?}", self);
        if self.news_dir.is_empty() {
            log::error!("RSS_NEWS_DIR cannot be empty.");
        }
        if self.fetch_timeout_secs == 0 {
            log::warn!("RSS_FETCH_TIMEOUT_SECS is 0; feed requests will never time out.");
        }
    }
}
