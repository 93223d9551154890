pub mod collection;
pub mod controller;
pub mod error;
pub mod selection;
pub mod viewport;

pub use collection::{CollectionError, ItemCollection, reorder};
pub use controller::{GalleryController, GalleryFrame, GalleryMessage};
pub use error::GalleryError;
pub use selection::SelectionSet;
pub use viewport::{ResizeHub, ResizeSubscription, ViewportTracker, columns_for_width};
