mod article;

pub use article::{Article, ArticleQuery, ExportFormat};
