use std::path::{Path, PathBuf};

use crate::{EngineError, Position, Rectangle, Result, limits};

/// Mask for column `x % 8`, most significant bit first.
const BITMASK: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// Bytes reserved per grid row.
///
/// This is always `width / 8 + 1`, one byte more than needed when `width` is a
/// multiple of 8. Persisted files depend on this layout, changing it requires a
/// new format version.
#[inline]
pub fn row_bytes(width: i32) -> usize {
    (width.max(0) / 8 + 1) as usize
}

/// Length of the cell payload for a grid of the given dimensions.
#[inline]
pub fn payload_len(width: i32, height: i32) -> usize {
    row_bytes(width) * height.max(0) as usize
}

/// Bit-packed blocked/free occupancy grid.
///
/// One bit per cell, rows are stored one after another and every row starts
/// on a byte boundary. A cleared bit is a free cell.
///
/// `Default` yields the uninitialized grid without storage; it reports
/// `is_valid() == false` and is rejected by editors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapBlock {
    width: i32,
    height: i32,
    data: Vec<u8>,

    /// File this grid was loaded from or last saved to.
    pub file_name: Option<PathBuf>,
}

impl MapBlock {
    /// Creates a grid with all cells free.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for non positive sizes and `PayloadTooLarge`
    /// when the cells need more than [`limits::MAX_PAYLOAD_BYTES`].
    pub fn new(width: i32, height: i32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; payload_len(width, height)],
            file_name: None,
        })
    }

    /// Builds a grid around existing row data; `data` must have exactly
    /// [`payload_len`] bytes.
    pub(crate) fn from_raw(width: i32, height: i32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = payload_len(width, height);
        if data.len() != expected {
            return Err(EngineError::DataLengthMismatch { expected, actual: data.len() });
        }
        Ok(Self {
            width,
            height,
            data,
            file_name: None,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw row data, see [`row_bytes`] for the layout.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && !self.data.is_empty()
    }

    /// Byte index and mask for a cell.
    ///
    /// The range check admits `x == width` and `y == height`. Column `width`
    /// lands in the spare byte of the row when there is one; row `height` is
    /// past the storage and yields `None` like any other unmapped cell.
    fn bit_location(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || x > self.width || y < 0 || y > self.height {
            return None;
        }
        let byte_pos = y as usize * row_bytes(self.width) + x as usize / 8;
        if byte_pos >= self.data.len() {
            return None;
        }
        Some((byte_pos, BITMASK[x as usize % 8]))
    }

    /// Returns `true` for blocked cells and for every coordinate outside the grid.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.bit_location(x, y) {
            Some((byte_pos, mask)) => self.data[byte_pos] & mask != 0,
            None => true,
        }
    }

    pub fn is_blocked_at(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.is_blocked(pos.x, pos.y)
    }

    /// Sets or clears a cell. Writes outside the grid are ignored.
    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        let Some((byte_pos, mask)) = self.bit_location(x, y) else {
            return;
        };
        if blocked {
            self.data[byte_pos] |= mask;
        } else {
            self.data[byte_pos] &= !mask;
        }
    }

    /// Applies [`MapBlock::set_blocked`] to every cell of `rect`.
    pub fn fill_rect(&mut self, rect: Rectangle, blocked: bool) {
        for pos in rect.cells() {
            self.set_blocked(pos.x, pos.y, blocked);
        }
    }

    /// Frees every cell, including spare row bits.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of blocked cells inside `0..width` x `0..height`.
    pub fn blocked_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_blocked(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

pub(crate) fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    if !limits::is_within_limits(width, height) {
        return Err(EngineError::PayloadTooLarge {
            width,
            height,
            bytes: limits::payload_bytes(width, height),
            max_bytes: limits::MAX_PAYLOAD_BYTES,
        });
    }
    Ok(())
}
