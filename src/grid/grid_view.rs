// LIFECELL
use super::{Grid, Offset, Position};

/// Read lens centred on one cell. Relative reads landing outside the grid
/// yield `T::default()`: the hard border policy, no wraparound.
pub struct GridView<'a, T: Copy + Default> {
    pos: Position,
    grid: &'a Grid<T>,
}

impl<'a, T: Copy + Default> GridView<'a, T> {
    pub fn new(grid: &'a Grid<T>, pos: Position) -> Self {
        Self { pos, grid }
    }

    pub fn cell(&self) -> T {
        self.grid.get(self.pos)
    }

    pub fn get_relative(&self, offset: Offset) -> T {
        let x = (self.pos.x() as i32) + offset.x();
        let y = (self.pos.y() as i32) + offset.y();
        if self.grid.dim().contains(x, y) {
            self.grid.get(Position::new(x as u32, y as u32))
        } else {
            T::default()
        }
    }
}
