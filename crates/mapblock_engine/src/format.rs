//! Persisted map block format
//!
//! ```text
//! offset 0:  i32 LE  version (always 0)
//! offset 4:  i32 LE  width
//! offset 8:  i32 LE  height
//! offset 12: u8[height * (width / 8 + 1)]  bit packed rows, MSB first
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Cursor, Read, Write},
    path::Path,
};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::{EngineError, MapBlock, Result, map_block::check_dimensions, payload_len};

/// Current (and only) format version.
pub const VERSION: i32 = 0;

/// Size of the version/width/height header in bytes.
pub const HEADER_SIZE: usize = 12;

impl MapBlock {
    /// Reads a map block from `reader`.
    ///
    /// Nothing past the payload is consumed. A failed load never yields a
    /// partially filled grid.
    pub fn load<R: Read>(reader: &mut R) -> Result<Self> {
        let result = read_map_block(reader);
        if let Err(err) = &result {
            log::error!("Failed to load map block: {err}");
        }
        result
    }

    /// Parses a complete file image, trailing bytes are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let block = Self::load(&mut cursor)?;
        let rest = bytes.len() - cursor.position() as usize;
        if rest > 0 {
            log::error!("Failed to load map block: {rest} bytes after payload");
            return Err(EngineError::TrailingData { count: rest });
        }
        Ok(block)
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| EngineError::open_file(path, e.to_string()))?;
        let mut block = Self::load(&mut BufReader::new(file))?;
        block.file_name = Some(path.to_path_buf());
        log::info!("Loaded map block {}x{} from {}", block.width(), block.height(), path.display());
        Ok(block)
    }

    /// Writes header and payload to `writer`.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<LittleEndian>(VERSION)?;
        writer.write_i32::<LittleEndian>(self.width())?;
        writer.write_i32::<LittleEndian>(self.height())?;
        writer.write_all(self.data())?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(HEADER_SIZE + self.data().len());
        result.extend_from_slice(&VERSION.to_le_bytes());
        result.extend_from_slice(&self.width().to_le_bytes());
        result.extend_from_slice(&self.height().to_le_bytes());
        result.extend_from_slice(self.data());
        result
    }

    /// Saves to `path` and remembers it as the file name.
    pub fn save_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| EngineError::open_file(path, e.to_string()))?;
        let mut writer = BufWriter::new(file);
        self.save(&mut writer)?;
        writer.flush()?;
        self.file_name = Some(path.to_path_buf());
        log::info!("Saved map block to {}", path.display());
        Ok(())
    }
}

fn read_map_block<R: Read>(reader: &mut R) -> Result<MapBlock> {
    let version = reader.read_i32::<LittleEndian>()?;
    if version != VERSION {
        return Err(EngineError::UnsupportedVersion { version });
    }
    let width = reader.read_i32::<LittleEndian>()?;
    let height = reader.read_i32::<LittleEndian>()?;
    check_dimensions(width, height)?;

    let expected = payload_len(width, height);
    let mut data = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut data)?;
    if data.len() != expected {
        return Err(EngineError::DataLengthMismatch { expected, actual: data.len() });
    }
    MapBlock::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(version: i32, width: i32, height: i32) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes
    }

    #[test]
    fn test_header_layout() {
        let mut block = MapBlock::new(10, 2).unwrap();
        block.set_blocked(1, 1, true);
        let bytes = block.to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE + 4);
        assert_eq!(&bytes[0..HEADER_SIZE], header(0, 10, 2).as_slice());
        assert_eq!(&bytes[HEADER_SIZE..], &[0, 0, 0x40, 0]);
    }

    #[test]
    fn test_save_matches_to_bytes() {
        let mut block = MapBlock::new(17, 5).unwrap();
        block.set_blocked(16, 4, true);
        let mut out = Vec::new();
        block.save(&mut out).unwrap();
        assert_eq!(out, block.to_bytes());
    }

    #[test]
    fn test_version_mismatch() {
        let mut bytes = header(1, 8, 1);
        bytes.extend_from_slice(&[0, 0]);
        assert!(matches!(MapBlock::from_bytes(&bytes), Err(EngineError::UnsupportedVersion { version: 1 })));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = header(0, 8, 1);
        assert!(matches!(MapBlock::from_bytes(&bytes[..7]), Err(EngineError::Io(_))));
    }

    #[test]
    fn test_non_positive_dimensions() {
        let bytes = header(0, 0, 4);
        assert!(matches!(MapBlock::from_bytes(&bytes), Err(EngineError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_huge_dimensions_rejected_before_allocation() {
        let bytes = header(0, i32::MAX, i32::MAX);
        assert!(matches!(MapBlock::from_bytes(&bytes), Err(EngineError::PayloadTooLarge { .. })));
    }

    #[test]
    fn test_trailing_data() {
        let mut bytes = MapBlock::new(8, 1).unwrap().to_bytes();
        bytes.push(0xFF);
        assert!(matches!(MapBlock::from_bytes(&bytes), Err(EngineError::TrailingData { count: 1 })));

        // stream loading leaves the rest for the caller
        let mut cursor = Cursor::new(bytes.as_slice());
        assert!(MapBlock::load(&mut cursor).is_ok());
        assert_eq!(cursor.position() as usize, bytes.len() - 1);
    }
}
