use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::models::Article;

use super::HEADERS;

/// Write a single-sheet workbook: a bold header row, then one row per article.
pub fn export_spreadsheet(articles: &[Article], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, article) in articles.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &article.title)?;
        worksheet.write_string(row, 1, &article.source)?;
        worksheet.write_string(row, 2, &article.url)?;
        worksheet.write_string(row, 3, &article.published)?;
    }
    worksheet.autofit();

    workbook.save(path)?;
    Ok(())
}
