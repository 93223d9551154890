pub mod app;
pub mod message;
pub mod seed;

use app::{App, AppError};
use mosaic_config::GalleryConfig;
use seed::SeedError;
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error;

const DEFAULT_WIDTH: u32 = 1280;

#[derive(Error, Debug)]
enum StartupError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("Invalid initial width: {0}")]
    Width(String),
}

async fn start() -> Result<(), StartupError> {
    let mut args = std::env::args().skip(1);

    let items = match args.next().map(PathBuf::from) {
        Some(path) => seed::load_seed(&path).await?,
        None => seed::sample_items(),
    };

    let width = match args.next() {
        Some(raw) => raw.parse().map_err(|_| StartupError::Width(raw))?,
        None => DEFAULT_WIDTH,
    };

    let config = GalleryConfig::load_or_default();
    let mut app = App::new(items, width, config)?;

    app.run(tokio::io::BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
