use std::path::{Path, PathBuf};

use crate::{
    EngineError, MapBlock, Result, limits,
    refresh::RepaintSink,
    surface::SurfaceDescriptor,
};

use super::PaintController;

/// Smallest map block the editor creates.
pub const MIN_CREATE_SIZE: i32 = 16;

impl PaintController {
    /// Replaces the active map block with a fresh, all free one.
    ///
    /// Dimensions below [`MIN_CREATE_SIZE`] are raised to it.
    pub fn create_map_block<S: RepaintSink + ?Sized>(&mut self, width: i32, height: i32, surfaces: &[SurfaceDescriptor], sink: &mut S) -> Result<()> {
        let width = limits::clamp_dimension(width, MIN_CREATE_SIZE);
        let height = limits::clamp_dimension(height, MIN_CREATE_SIZE);
        let map_block = MapBlock::new(width, height)?;
        log::info!("Created map block {width}x{height}");
        self.reload(map_block, surfaces, sink)
    }

    /// Loads `path` and makes it the active map block.
    ///
    /// On failure the current map block stays active.
    pub fn open_file<S: RepaintSink + ?Sized>(&mut self, path: impl AsRef<Path>, surfaces: &[SurfaceDescriptor], sink: &mut S) -> Result<()> {
        let map_block = MapBlock::load_file(path)?;
        self.reload(map_block, surfaces, sink)
    }

    /// Saves the active map block to `path`, or to its own file name.
    ///
    /// Returns the path written to, which also becomes the map block's file name.
    pub fn save_file(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        let Some(map_block) = &mut self.map_block else {
            return Err(EngineError::NoMapBlock);
        };
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => map_block.file_name.clone().ok_or(EngineError::NoFileName)?,
        };
        map_block.save_file(&target)?;
        Ok(target)
    }
}
