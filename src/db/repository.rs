use std::path::PathBuf;

use rusqlite::{params, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::Article;

use super::schema::{INSERT_ARTICLE, SCHEMA, SELECT_ARTICLES};

/// The article store.
///
/// Only the database path is held. Every operation opens its own
/// connection and closes it before returning.
pub struct Repository {
    db_path: PathBuf,
}

impl Repository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    async fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path).await?;
        Ok(conn)
    }

    /// Create the `news` table if it does not exist yet. Safe to call on every start.
    pub async fn initialize(&self) -> Result<()> {
        let conn = self.open().await?;
        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;
        conn.close().await?;
        Ok(())
    }

    /// Insert a batch of articles, skipping any whose title is already stored.
    ///
    /// A title conflict is not an error. Any other failure aborts the batch.
    /// Returns how many rows were actually added.
    pub async fn insert_many(&self, articles: &[Article]) -> Result<usize> {
        if articles.is_empty() {
            return Ok(0);
        }

        let articles = articles.to_vec();
        let conn = self.open().await?;
        let inserted = conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                let mut inserted = 0;
                {
                    let mut stmt = tx.prepare(INSERT_ARTICLE)?;
                    for article in &articles {
                        inserted += stmt.execute(params![
                            article.title,
                            article.source,
                            article.url,
                            article.published,
                        ])?;
                    }
                }
                tx.commit()?;
                Ok(inserted)
            })
            .await?;
        conn.close().await?;

        tracing::debug!("Inserted {} new articles into {:?}", inserted, self.db_path);
        Ok(inserted)
    }

    /// Every stored article. Callers must not rely on the order.
    pub async fn fetch_all(&self) -> Result<Vec<Article>> {
        let conn = self.open().await?;
        let articles = conn
            .call(|conn| {
                let mut stmt = conn.prepare(SELECT_ARTICLES)?;
                let articles = stmt
                    .query_map([], article_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(articles)
            })
            .await?;
        conn.close().await?;
        Ok(articles)
    }

    #[allow(dead_code)]
    pub async fn count(&self) -> Result<usize> {
        let conn = self.open().await?;
        let count = conn
            .call(|conn| {
                let count = conn.query_row("SELECT COUNT(*) FROM news", [], |row| {
                    row.get::<_, usize>(0)
                })?;
                Ok(count)
            })
            .await?;
        conn.close().await?;
        Ok(count)
    }
}

// Rows written by older tools may carry NULLs outside the title column.
fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        title: row.get(0)?,
        source: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        published: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup_repo() -> (TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::new(dir.path().join("news.db"));
        repo.initialize().await.unwrap();
        (dir, repo)
    }

    fn article(title: &str, source: &str) -> Article {
        Article::new(title, source, format!("http://example.com/{}", title), "2024-01-01")
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_dir, repo) = setup_repo().await;
        repo.insert_many(&[article("A", "BBC")]).await.unwrap();

        repo.initialize().await.unwrap();
        repo.initialize().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_same_batch_twice_stores_one() {
        let (_dir, repo) = setup_repo().await;
        let batch = vec![Article::new("A", "BBC", "http://x", "2024-01-01")];

        assert_eq!(repo.insert_many(&batch).await.unwrap(), 1);
        assert_eq!(repo.insert_many(&batch).await.unwrap(), 0);

        let stored = repo.fetch_all().await.unwrap();
        assert_eq!(stored, batch);
    }

    #[tokio::test]
    async fn test_overlapping_batches_keep_first_values() {
        let (_dir, repo) = setup_repo().await;

        repo.insert_many(&[article("A", "BBC"), article("B", "BBC")])
            .await
            .unwrap();
        let inserted = repo
            .insert_many(&[article("A", "CNN"), article("C", "CNN")])
            .await
            .unwrap();
        assert_eq!(inserted, 1);

        let stored = repo.fetch_all().await.unwrap();
        assert_eq!(stored.len(), 3);

        let a = stored.iter().find(|s| s.title == "A").unwrap();
        assert_eq!(a.source, "BBC");

        let mut titles: Vec<_> = stored.iter().map(|s| s.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_duplicates_within_one_batch() {
        let (_dir, repo) = setup_repo().await;

        let inserted = repo
            .insert_many(&[article("A", "BBC"), article("A", "CNN"), article("B", "BBC")])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_leaves_store_unchanged() {
        let (_dir, repo) = setup_repo().await;
        repo.insert_many(&[article("A", "BBC")]).await.unwrap();

        assert_eq!(repo.insert_many(&[]).await.unwrap(), 0);
        assert_eq!(repo.fetch_all().await.unwrap(), vec![article("A", "BBC")]);
    }

    #[tokio::test]
    async fn test_fetch_all_round_trips_fields() {
        let (_dir, repo) = setup_repo().await;
        let batch = vec![
            Article::new("Rates \"held\", again", "Reuters", "https://r.com/1", "2024-02-03"),
            Article::new("Überraschung", "Der Spiegel", "https://s.de/2", "2024-02-04"),
        ];

        repo.insert_many(&batch).await.unwrap();
        let stored = repo.fetch_all().await.unwrap();

        assert_eq!(stored.len(), batch.len());
        for article in &stored {
            assert!(batch.contains(article), "unexpected row {:?}", article);
        }
    }

    #[tokio::test]
    async fn test_store_persists_across_instances() {
        let (dir, repo) = setup_repo().await;
        repo.insert_many(&[article("A", "BBC")]).await.unwrap();

        let reopened = Repository::new(dir.path().join("news.db"));
        reopened.initialize().await.unwrap();
        assert_eq!(reopened.fetch_all().await.unwrap(), vec![article("A", "BBC")]);
    }

    #[tokio::test]
    async fn test_insert_without_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::new(dir.path().join("news.db"));

        let result = repo.insert_many(&[article("A", "BBC")]).await;
        assert!(result.is_err());
    }
}
