//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::models::{ArticleQuery, ExportFormat};

/// News Aggregator CLI: fetch top headlines into a local store.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News source identifier (example: bbc-news)
    #[arg(long)]
    pub source: Option<String>,

    /// Keyword filter
    #[arg(long)]
    pub keyword: Option<String>,

    /// Earliest publish date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Export every stored article after fetching
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// NewsAPI key, overrides the config file
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Directory for the database, snapshot and exports
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Path to a config.toml to use instead of the default one
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn query(&self) -> ArticleQuery {
        ArticleQuery {
            source: self.source.clone(),
            keyword: self.keyword.clone(),
            date: self.date.clone(),
        }
    }
}
