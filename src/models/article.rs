use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A normalized headline as it is stored and exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
    /// Publish date as `YYYY-MM-DD`
    pub published: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            url: url.into(),
            published: published.into(),
        }
    }
}

/// Optional filters for a single headlines request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub source: Option<String>,
    pub keyword: Option<String>,
    /// Lower bound on publish date, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "news.csv",
            ExportFormat::Excel => "news.xlsx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
        }
    }
}
