use std::path::Path;

use crate::error::Result;
use crate::models::Article;

use super::HEADERS;

pub fn export_csv(articles: &[Article], path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for article in articles {
        writer.write_record([
            &article.title,
            &article.source,
            &article.url,
            &article.published,
        ])?;
    }
    writer.flush()?;
    Ok(())
}
