//! Grid container geometry derived from item count and column count

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Height reserved per grid row when sizing the container
pub const DEFAULT_ROW_HEIGHT: u32 = 280;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Grid layout requested with zero columns")]
    ZeroColumns,
}

/// Geometry of the grid container. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub row_count: usize,
    pub container_height: u32,
}

impl GridLayout {
    /// Row and column of the cell holding the item at `index`
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayoutDeriver {
    pub row_height: u32,
}

impl GridLayoutDeriver {
    pub fn new(row_height: u32) -> Self {
        Self { row_height }
    }

    pub fn try_layout(&self, item_count: usize, columns: usize) -> Result<GridLayout, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }

        Ok(self.compute(item_count, columns))
    }

    /// Zero columns is an upstream bug: it panics in debug builds and
    /// degrades to a single column otherwise.
    pub fn layout(&self, item_count: usize, columns: usize) -> GridLayout {
        debug_assert!(columns > 0, "grid layout requested with zero columns");

        self.try_layout(item_count, columns).unwrap_or_else(|err| {
            error!("{err}; clamping to a single column");
            self.compute(item_count, 1)
        })
    }

    fn compute(&self, item_count: usize, columns: usize) -> GridLayout {
        let row_count = item_count.div_ceil(columns);
        let container_height =
            u32::try_from(row_count).map_or(u32::MAX, |rows| rows.saturating_mul(self.row_height));

        GridLayout {
            columns,
            row_count,
            container_height,
        }
    }
}

impl Default for GridLayoutDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_HEIGHT)
    }
}

/// Layout using the default row height
pub fn layout(item_count: usize, columns: usize) -> GridLayout {
    GridLayoutDeriver::default().layout(item_count, columns)
}
