use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_DIR: &str = "mosaic";
const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LayoutMode {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutMode {
    pub const ALL: &'static [Self] = &[Self::Mobile, Self::Desktop];
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Mobile => write!(f, "Mobile"),
            LayoutMode::Desktop => write!(f, "Desktop"),
        }
    }
}

/// Width threshold and the column counts on either side of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_breakpoint: u32,
    pub mobile_columns: usize,
    pub desktop_columns: usize,
}

impl Breakpoints {
    /// Widths up to and including the breakpoint are mobile.
    pub fn mode_for_width(&self, width: u32) -> LayoutMode {
        if width <= self.mobile_breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn columns(&self, mode: LayoutMode) -> usize {
        match mode {
            LayoutMode::Mobile => self.mobile_columns,
            LayoutMode::Desktop => self.desktop_columns,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            mobile_columns: 2,
            desktop_columns: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub mobile_breakpoint: u32,
    pub mobile_columns: usize,
    pub desktop_columns: usize,
    /// Vertical space the container reserves per row
    pub row_height: u32,
    /// Row height of the drop zone the tiles snap to
    pub slot_height: u32,
    pub lead_tile_height: u32,
    pub tile_height: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        Self {
            mobile_breakpoint: breakpoints.mobile_breakpoint,
            mobile_columns: breakpoints.mobile_columns,
            desktop_columns: breakpoints.desktop_columns,
            row_height: 280,
            slot_height: 267,
            lead_tile_height: 260,
            tile_height: 170,
        }
    }
}

impl GalleryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.mobile_breakpoint = breakpoints.mobile_breakpoint;
        self.mobile_columns = breakpoints.mobile_columns;
        self.desktop_columns = breakpoints.desktop_columns;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_tile_heights(mut self, lead: u32, standard: u32) -> Self {
        self.lead_tile_height = lead;
        self.tile_height = standard;
        self
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile_breakpoint: self.mobile_breakpoint,
            mobile_columns: self.mobile_columns,
            desktop_columns: self.desktop_columns,
        }
    }

    pub fn tile_height_for(&self, is_lead: bool) -> u32 {
        if is_lead {
            self.lead_tile_height
        } else {
            self.tile_height
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_columns == 0 {
            return Err(ConfigError::Invalid(
                "mobile_columns must be greater than zero".to_string(),
            ));
        }

        if self.desktop_columns == 0 {
            return Err(ConfigError::Invalid(
                "desktop_columns must be greater than zero".to_string(),
            ));
        }

        if self.row_height == 0 {
            return Err(ConfigError::Invalid(
                "row_height must be greater than zero".to_string(),
            ));
        }

        if self.slot_height > self.row_height {
            return Err(ConfigError::Invalid(
                "slot_height cannot exceed row_height".to_string(),
            ));
        }

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the user config if one exists, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = default_path() else {
            warn!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
