use std::path::Path;

use crate::error::Result;
use crate::models::Article;

/// Replace the JSON snapshot with the records from the latest fetch.
pub fn write_snapshot(articles: &[Article], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(articles)?;
    std::fs::write(path, content)?;
    tracing::debug!("Wrote snapshot of {} articles to {:?}", articles.len(), path);
    Ok(())
}
