use clap::Parser;
use log::info;
use std::path::Path;

use rss_news_reader::cache::{search, SnapshotStore};
use rss_news_reader::cli::Cli;
use rss_news_reader::config::Config;
use rss_news_reader::error::{Result, RssError};
use rss_news_reader::feed::normalize::normalize;
use rss_news_reader::feed::{FeedClient, FeedSource};
use rss_news_reader::{output, utils};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = utils::setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(err) = run(&cli).await {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<()> {
    info!("Program started");
    let config = Config::from_env();
    config.validate_and_log();
    let store = SnapshotStore::new(&config.news_dir);

    // Historical-search mode replaces the live fetch entirely.
    if let Some(date) = &cli.date {
        search::validate_date_argument(date)?;
        info!("Searching news...");
        let matches = search::search_by_date(&store, date)?;
        print!("{}", output::render_search_results(&matches));
        info!("Program ended");
        return Ok(());
    }

    let url = cli
        .url
        .as_deref()
        .ok_or_else(|| RssError::InvalidFeedUrl("no feed URL provided".to_string()))?;

    let client = FeedClient::new(&config)?;
    info!("Getting RSS-feed");
    let feed = client.fetch(url).await?;
    info!("Getting posts");
    let snapshot = normalize(&feed)?;

    let limit = cli.effective_limit();
    if cli.json {
        info!("JSON mode on");
        println!("{}", output::render_json(&snapshot, limit)?);
    } else {
        info!("Plain text mode on");
        print!("{}", output::render_plain(&snapshot, limit));
    }

    store.save(&snapshot)?;

    if cli.to_pdf {
        output::pdf::save_to_pdf(&snapshot, limit, Path::new(&config.pdf_dir))?;
    }
    if cli.to_html {
        output::html::save_to_html(&snapshot, limit, Path::new(&config.html_dir))?;
    }

    info!("Program ended");
    Ok(())
}
