//! Initial gallery contents

use mosaic_types::GalleryItem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads a JSON array of `{ "id": .., "image": .. }` records.
pub async fn load_seed(path: &Path) -> Result<Vec<GalleryItem>, SeedError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let items: Vec<GalleryItem> = serde_json::from_str(&contents)?;
    info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Built-in gallery used when no seed file is given
pub fn sample_items() -> Vec<GalleryItem> {
    (1..=11)
        .map(|id: i64| GalleryItem::new(id, format!("images/image-{id}.webp")))
        .collect()
}
