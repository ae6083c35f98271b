mod fetcher;

pub use fetcher::{NewsClient, MAX_PAGE_SIZE, NEWS_API_URL};
