use clap::Parser;

mod app;
mod cli;
mod config;
mod db;
mod error;
mod export;
mod models;
mod news;

use app::App;
use cli::Cli;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(key) = &cli.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    let app = App::new(config).await?;

    println!("Fetching news...");
    let summary = app.run(&cli.query(), cli.export).await?;
    println!("Fetched {} articles ({} new)", summary.fetched, summary.inserted);

    if let (Some(format), Some(path)) = (cli.export, &summary.exported) {
        println!("Exported to {} ({})", format.label(), path.display());
    }
    println!("Total unique articles stored: {}", summary.total);

    Ok(())
}
