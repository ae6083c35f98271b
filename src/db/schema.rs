pub const SCHEMA: &str = r#"
-- news table; title is the dedupe key
CREATE TABLE IF NOT EXISTS news (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    source TEXT,
    url TEXT,
    published TEXT
);
"#;

pub const INSERT_ARTICLE: &str = r#"INSERT INTO news (title, source, url, published)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(title) DO NOTHING"#;

pub const SELECT_ARTICLES: &str =
    "SELECT title, source, url, published FROM news ORDER BY id";
