//! Tabular exports of the full store and the JSON snapshot of the last fetch.

mod csv;
mod snapshot;
mod spreadsheet;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Article, ExportFormat};

pub use self::csv::export_csv;
pub use self::snapshot::write_snapshot;
pub use self::spreadsheet::export_spreadsheet;

pub const HEADERS: [&str; 4] = ["Title", "Source", "URL", "Date"];

/// Write `articles` in `format` to its fixed file name under `data_dir`,
/// replacing any earlier export.
pub fn export(format: ExportFormat, articles: &[Article], data_dir: &Path) -> Result<PathBuf> {
    let path = data_dir.join(format.file_name());
    match format {
        ExportFormat::Csv => export_csv(articles, &path)?,
        ExportFormat::Excel => export_spreadsheet(articles, &path)?,
    }
    tracing::info!("Exported {} articles to {:?}", articles.len(), path);
    Ok(path)
}
