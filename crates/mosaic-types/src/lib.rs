pub mod types;

pub use types::{GalleryItem, HeaderState, ItemId, RenderItem, TileKind};
