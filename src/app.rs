use std::path::PathBuf;

use crate::config::Config;
use crate::db::Repository;
use crate::error::Result;
use crate::export;
use crate::models::{ArticleQuery, ExportFormat};
use crate::news::NewsClient;

/// Outcome of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Articles returned by the API this run
    pub fetched: usize,
    /// Articles that were new to the store
    pub inserted: usize,
    /// Unique articles in the store after the run
    pub total: usize,
    pub exported: Option<PathBuf>,
}

pub struct App {
    config: Config,
    repository: Repository,
    client: NewsClient,
}

impl App {
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let api_key = config.api_key()?.to_string();

        std::fs::create_dir_all(&config.data_dir)?;

        let repository = Repository::new(config.db_path());
        repository.initialize().await?;

        let client = NewsClient::new(
            api_key,
            config.base_url.clone(),
            config.language.clone(),
            config.page_size,
            config.request_timeout(),
        )?;

        Ok(Self {
            config,
            repository,
            client,
        })
    }

    /// Fetch, store, snapshot and optionally export.
    ///
    /// A failed fetch returns before anything is written.
    pub async fn run(&self, query: &ArticleQuery, format: Option<ExportFormat>) -> Result<RunSummary> {
        let articles = self.client.fetch_headlines(query).await?;
        let inserted = self.repository.insert_many(&articles).await?;
        tracing::debug!("Fetched {} articles, {} new", articles.len(), inserted);

        export::write_snapshot(&articles, &self.config.snapshot_path())?;

        let stored = self.repository.fetch_all().await?;
        tracing::debug!("Store at {:?} holds {} articles", self.config.db_path(), stored.len());
        let exported = match format {
            Some(format) => Some(export::export(format, &stored, &self.config.data_dir)?),
            None => None,
        };

        Ok(RunSummary {
            fetched: articles.len(),
            inserted,
            total: stored.len(),
            exported,
        })
    }
}
