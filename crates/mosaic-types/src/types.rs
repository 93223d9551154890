use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a gallery item across reorders and re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One displayable media entry. `source` is opaque to the gallery (URL or path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    #[serde(alias = "image")]
    pub source: String,
}

impl GalleryItem {
    pub fn new(id: impl Into<ItemId>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// The tile at display position 0, drawn larger than the rest
    Lead,
    #[default]
    Standard,
}

impl TileKind {
    pub fn for_position(index: usize) -> Self {
        if index == 0 {
            TileKind::Lead
        } else {
            TileKind::Standard
        }
    }

    pub fn is_lead(self) -> bool {
        matches!(self, TileKind::Lead)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Lead => write!(f, "Lead"),
            TileKind::Standard => write!(f, "Standard"),
        }
    }
}

/// Visual props handed to the presentation layer for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    pub id: ItemId,
    pub source: String,
    pub selected: bool,
    pub is_first: bool,
    pub tile: TileKind,
    pub tile_height: u32,
    pub row: usize,
    pub column: usize,
}

/// What the bar above the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderState {
    #[default]
    Title,
    Selection {
        count: usize,
    },
}

impl HeaderState {
    pub fn from_selected_count(count: usize) -> Self {
        if count == 0 {
            HeaderState::Title
        } else {
            HeaderState::Selection { count }
        }
    }

    /// Whether the bulk delete action is offered
    pub fn shows_delete(&self) -> bool {
        matches!(self, HeaderState::Selection { .. })
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HeaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderState::Title => write!(f, "Gallery"),
            HeaderState::Selection { count } => write!(f, "{} images selected", count),
        }
    }
}
