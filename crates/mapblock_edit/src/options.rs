use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    EngineError, Result,
    brush::{BrushSettings, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE},
    surface::WorldPoint,
};

pub const DEFAULT_MAP_WIDTH: i32 = 256;
pub const DEFAULT_MAP_HEIGHT: i32 = 256;

/// Persistent editor settings, stored as `options.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    pub brush_size: i32,
    pub brush_mode: bool,

    pub default_width: i32,
    pub default_height: i32,

    /// World position of grid cell (0, 0)
    pub map_origin: WorldPoint,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            brush_size: MIN_BRUSH_SIZE,
            brush_mode: false,
            default_width: DEFAULT_MAP_WIDTH,
            default_height: DEFAULT_MAP_HEIGHT,
            map_origin: WorldPoint::ZERO,
        }
    }
}

impl EditorOptions {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let mut options: EditorOptions = toml::from_str(txt).map_err(|e| EngineError::invalid_options(e))?;
        options.brush_size = options.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EngineError::invalid_options(e))
    }

    /// Loads options from `path`, a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(path)?;
        match Self::from_toml_str(&txt) {
            Ok(options) => Ok(options),
            Err(err) => {
                log::error!("Error reading options file {}: {err}", path.display());
                Err(err)
            }
        }
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn brush(&self) -> BrushSettings {
        BrushSettings::new(self.brush_size, self.brush_mode)
    }
}
