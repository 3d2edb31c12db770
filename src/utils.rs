use chrono::NaiveDate;
use log::info;

use crate::error::{Result, RssError};

/// Compact date form used in cache filenames and post records.
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d";

pub fn setup_logging(verbose: bool) -> std::result::Result<(), fern::InitError> {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    info!("Logging initialized.");
    Ok(())
}

/// Reformat a stored yyyymmdd date for human-readable output (dd/mm/yyyy).
/// Stored snapshots always carry valid stamps, but exports render whatever is
/// on disk, so a bad value is surfaced rather than panicking.
pub fn format_display_date(date_stamp: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(date_stamp, DATE_STAMP_FORMAT)
        .map_err(|e| RssError::FeedMalformed(format!("bad date stamp '{}': {}", date_stamp, e)))?;
    Ok(date.format("%d/%m/%Y").to_string())
}
