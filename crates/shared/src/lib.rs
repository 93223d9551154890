pub mod grid_layout;

pub use grid_layout::{DEFAULT_ROW_HEIGHT, GridLayout, GridLayoutDeriver, LayoutError, layout};
