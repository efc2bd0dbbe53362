// LIFECELL
pub mod grid;
pub mod grid_view;
pub use grid::Grid;
pub use grid_view::GridView;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }
}

impl From<(u32, u32)> for Position {
    fn from(pos: (u32, u32)) -> Self {
        Position::new(pos.0, pos.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count. Computed in `usize` so that large but valid
    /// dimensions never overflow the multiply.
    #[inline]
    pub fn size(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub fn index(&self, pos: Position) -> usize {
        (pos.y() as usize) * (self.width as usize) + (pos.x() as usize)
    }

    /// Signed bounds test, for coordinates coming from outside the grid
    /// (pointer input, explicit cell accesses).
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        0 <= x && x < (self.width as i32) && 0 <= y && y < (self.height as i32)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from(dim: (u32, u32)) -> Self {
        Dimensions::new(dim.0, dim.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offset {
    x: i32,
    y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl From<(i32, i32)> for Offset {
    fn from(coords: (i32, i32)) -> Self {
        Offset::new(coords.0, coords.1)
    }
}

/// The 8 cells horizontally, vertically and diagonally adjacent to a cell.
pub const MOORE_NEIGHBORHOOD: [Offset; 8] = [
    Offset::new(0, -1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
    Offset::new(0, 1),
    Offset::new(-1, 1),
    Offset::new(-1, 0),
    Offset::new(-1, -1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_large_dimensions_does_not_overflow() {
        // 65536 * 65536 exceeds u32::MAX but is a perfectly valid grid size
        let dim = Dimensions::new(65_536, 65_536);
        assert_eq!(dim.size(), 4_294_967_296);
    }

    #[test]
    fn index_is_row_major() {
        let dim = Dimensions::new(7, 3);
        assert_eq!(dim.index(Position::new(0, 0)), 0);
        assert_eq!(dim.index(Position::new(4, 2)), 18);
    }

    #[test]
    fn contains_rejects_negative_and_past_the_end_coordinates() {
        let dim = Dimensions::new(4, 3);
        assert!(dim.contains(0, 0));
        assert!(dim.contains(3, 2));
        assert!(!dim.contains(-1, 0));
        assert!(!dim.contains(0, -1));
        assert!(!dim.contains(4, 0));
        assert!(!dim.contains(0, 3));
    }
}
