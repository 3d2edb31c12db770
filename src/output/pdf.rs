//! PDF export of a snapshot selection.
//!
//! Text-only rendering with the built-in Helvetica faces: feed heading and
//! link, then one separator-delimited block per selected post with its
//! display date, link, and media links. Pagination is a simple line cursor
//! that opens a fresh page when the current one runs out.

use anyhow::Context;
use log::info;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::cache::derive_file_name;
use crate::error::{Result, RssError};
use crate::feed::{Post, Snapshot};
use crate::output::{select_posts, SEPARATOR};
use crate::utils::format_display_date;

pub const PDF_EXTENSION: &str = ".pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 7.0;

pub fn save_to_pdf(snapshot: &Snapshot, limit: usize, out_dir: &Path) -> Result<PathBuf> {
    let posts = select_posts(snapshot, limit);
    let mut dates = Vec::with_capacity(posts.len());
    for post in posts {
        dates.push(format_display_date(&post.date)?);
    }

    let doc = build_document(snapshot, posts, &dates)
        .map_err(|e| RssError::ExportWriteFailure(format!("building PDF: {:#}", e)))?;

    fs::create_dir_all(out_dir)
        .map_err(|e| RssError::ExportWriteFailure(format!("creating {}: {}", out_dir.display(), e)))?;
    let path = out_dir.join(derive_file_name(&snapshot.feed_title, PDF_EXTENSION));
    let file = File::create(&path)
        .map_err(|e| RssError::ExportWriteFailure(format!("creating {}: {}", path.display(), e)))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RssError::ExportWriteFailure(format!("writing {}: {}", path.display(), e)))?;
    info!("Saved PDF export to {}", path.display());
    Ok(path)
}

fn build_document(
    snapshot: &Snapshot,
    posts: &[Post],
    dates: &[String],
) -> anyhow::Result<PdfDocumentReference> {
    let (doc, page, layer) = PdfDocument::new(
        snapshot.feed_title.clone(),
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("loading Helvetica")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("loading Helvetica-Bold")?;

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };
    cursor.line(&doc, &snapshot.feed_title, 16.0, &bold);
    cursor.line(&doc, &snapshot.feed_link, 11.0, &regular);

    for (post, date) in posts.iter().zip(dates) {
        cursor.line(&doc, SEPARATOR, 10.0, &regular);
        cursor.line(&doc, &post.title, 12.0, &bold);
        cursor.line(&doc, date, 10.0, &regular);
        cursor.line(&doc, &post.link, 10.0, &regular);
        for media in &post.links {
            cursor.line(&doc, media, 9.0, &regular);
        }
    }
    Ok(doc)
}

/// Line cursor over the current layer; opens a new page when the remaining
/// height runs out.
struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn line(&mut self, doc: &PdfDocumentReference, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN_MM {
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH_MM.into()),
                Mm(PAGE_HEIGHT_MM.into()),
                "Layer 1",
            );
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.layer.use_text(
            text.to_string(),
            size.into(),
            Mm(MARGIN_MM.into()),
            Mm(self.y.into()),
            font,
        );
        self.y -= LINE_HEIGHT_MM;
    }
}
