use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Article, ArticleQuery};

pub const NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";
pub const MAX_PAGE_SIZE: u32 = 100;

const USER_AGENT_STRING: &str = concat!("news-aggregator/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: String,
    source: RawSource,
    url: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<String>,
    message: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let published: String = raw.published_at.chars().take(10).collect();
        Article::new(raw.title, raw.source.name, raw.url, published)
    }
}

pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: String,
    page_size: u32,
}

impl NewsClient {
    pub fn new(
        api_key: String,
        base_url: String,
        language: String,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .user_agent(USER_AGENT_STRING)
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
            language,
            page_size: page_size.min(MAX_PAGE_SIZE),
        })
    }

    /// Query parameters for one request. Empty filters are left out.
    fn query_params(&self, query: &ArticleQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("language", self.language.clone()),
            ("pageSize", self.page_size.to_string()),
        ];

        let filters = [
            ("sources", &query.source),
            ("q", &query.keyword),
            ("from", &query.date),
        ];
        for (name, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((name, value.to_string()));
            }
        }

        params
    }

    /// Fetch a single page of headlines and normalize them.
    ///
    /// Any non-success status or unexpected body shape is an error; nothing
    /// is retried.
    pub async fn fetch_headlines(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        tracing::debug!("Requesting headlines from {} with {:?}", self.base_url, query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => AppError::NewsApi {
                    status: status.as_u16(),
                    code: err.code.unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                },
                Err(_) => anyhow::anyhow!("Failed to fetch headlines: HTTP {}", status).into(),
            });
        }

        let bytes = response.bytes().await?;
        let headlines: HeadlinesResponse = serde_json::from_slice(&bytes)?;

        let articles: Vec<Article> = headlines.articles.into_iter().map(Article::from).collect();
        tracing::debug!("Received {} articles", articles.len());

        Ok(articles)
    }
}
