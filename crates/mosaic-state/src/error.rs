use mosaic_config::ConfigError;
use thiserror::Error;

use crate::collection::CollectionError;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Invalid initial items: {0}")]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type GalleryResult<T> = Result<T, GalleryError>;
