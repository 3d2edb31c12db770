use clap::Parser;

/// Command-line RSS reader with a local news cache.
#[derive(Parser, Debug)]
#[command(name = "rss-news-reader", version, about, after_help = "Enjoy the program!")]
pub struct Cli {
    /// RSS feed URL
    #[arg(long, required_unless_present = "date")]
    pub url: Option<String>,

    /// Print result as JSON in stdout
    #[arg(short, long)]
    pub json: bool,

    /// Outputs verbose status messages
    #[arg(long)]
    pub verbose: bool,

    /// Limit news topics if this parameter provided
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Search news by this date (yyyymmdd) in the local cache instead of fetching
    #[arg(long)]
    pub date: Option<String>,

    /// Save results as PDF file
    #[arg(long = "to_pdf")]
    pub to_pdf: bool,

    /// Save results as HTML file
    #[arg(long = "to_html")]
    pub to_html: bool,
}

impl Cli {
    /// The limit handed to the presentation layer. Missing, zero, and
    /// negative values all mean "no limit".
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            Some(n) if n > 0 => n as usize,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_limit_means_no_limit() {
        let cli = Cli::try_parse_from(["rss-news-reader", "--url", "https://x/", "--limit", "-5"])
            .unwrap();
        assert_eq!(cli.effective_limit(), 0);
    }

    #[test]
    fn missing_limit_means_no_limit() {
        let cli = Cli::try_parse_from(["rss-news-reader", "--url", "https://x/"]).unwrap();
        assert_eq!(cli.effective_limit(), 0);
    }

    #[test]
    fn positive_limit_passes_through() {
        let cli = Cli::try_parse_from(["rss-news-reader", "--url", "https://x/", "--limit", "3"])
            .unwrap();
        assert_eq!(cli.effective_limit(), 3);
    }

    #[test]
    fn url_is_required_without_date() {
        assert!(Cli::try_parse_from(["rss-news-reader"]).is_err());
        assert!(Cli::try_parse_from(["rss-news-reader", "--date", "20240101"]).is_ok());
    }
}
