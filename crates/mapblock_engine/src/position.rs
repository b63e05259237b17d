use serde::{Deserialize, Serialize};

/// A cell coordinate, either grid-global or surface-local depending on context.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Componentwise sum, clamped to the `i32` range.
    pub fn saturating_add(self, rhs: Position) -> Position {
        Position::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
}

/// Half open cell rectangle: `start` is inclusive, `start + size` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn from(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            start: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    /// Exclusive right edge, clamped to `i32::MAX`
    pub fn right(&self) -> i32 {
        self.start.x.saturating_add(self.size.width)
    }

    /// Exclusive bottom edge, clamped to `i32::MAX`
    pub fn bottom(&self) -> i32 {
        self.start.y.saturating_add(self.size.height)
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.left()..self.right()
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.top()..self.bottom()
    }

    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.left() <= pos.x && pos.x < self.right() && self.top() <= pos.y && pos.y < self.bottom()
    }

    /// Moves the rectangle by `offset`, keeping its size. The start saturates
    /// at the `i32` range instead of wrapping.
    pub fn translated(&self, offset: Position) -> Rectangle {
        Rectangle {
            start: self.start.saturating_add(offset),
            size: self.size,
        }
    }

    /// Iterates all cells row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        self.y_range().flat_map(move |y| self.x_range().map(move |x| Position::new(x, y)))
    }
}
