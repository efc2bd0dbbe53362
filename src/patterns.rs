// External libraries
use cascade::cascade;

// LIFECELL
use crate::engine::CellState;
use crate::grid::{Dimensions, Grid, Position};

/// Horizontal period-2 oscillator on a 5x5 grid.
pub fn blinker() -> Grid<CellState> {
    let mut grid = Grid::new(Dimensions::new(5, 5));
    grid = cascade!(
        grid;
        ..set(Position::new(1, 2), CellState::Alive);
        ..set(Position::new(2, 2), CellState::Alive);
        ..set(Position::new(3, 2), CellState::Alive);
    );
    grid
}

/// Checks that a grid holds exactly the blinker, either in its original
/// horizontal phase or flipped to vertical.
pub fn is_blinker(grid: &Grid<CellState>, flipped: bool) -> bool {
    let cell_is_valid = |x: usize, y: usize, cell: CellState| {
        let on_blinker = if flipped {
            x == 2 && (1..=3).contains(&y)
        } else {
            y == 2 && (1..=3).contains(&x)
        };
        cell.is_alive() == on_blinker
    };

    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if !cell_is_valid(x, y, *cell) {
                return false;
            }
        }
    }
    true
}

/// The standard 5-cell glider, heading towards the bottom-right corner.
pub fn glider() -> Grid<CellState> {
    let mut grid = Grid::new(Dimensions::new(16, 16));
    grid = cascade!(
        grid;
        ..set(Position::new(1, 0), CellState::Alive);
        ..set(Position::new(2, 1), CellState::Alive);
        ..set(Position::new(0, 2), CellState::Alive);
        ..set(Position::new(1, 2), CellState::Alive);
        ..set(Position::new(2, 2), CellState::Alive);
    );
    grid
}

pub fn gosper_glider_gun() -> Grid<CellState> {
    let mut grid = Grid::new(Dimensions::new(100, 50));
    grid = cascade!(
        grid;
        ..set(Position::new(1, 5), CellState::Alive);
        ..set(Position::new(1, 6), CellState::Alive);
        ..set(Position::new(2, 5), CellState::Alive);
        ..set(Position::new(2, 6), CellState::Alive);
        ..set(Position::new(11, 5), CellState::Alive);
        ..set(Position::new(11, 6), CellState::Alive);
        ..set(Position::new(11, 7), CellState::Alive);
        ..set(Position::new(12, 4), CellState::Alive);
        ..set(Position::new(12, 8), CellState::Alive);
        ..set(Position::new(13, 3), CellState::Alive);
        ..set(Position::new(13, 9), CellState::Alive);
        ..set(Position::new(14, 3), CellState::Alive);
        ..set(Position::new(14, 9), CellState::Alive);
        ..set(Position::new(15, 6), CellState::Alive);
        ..set(Position::new(16, 4), CellState::Alive);
        ..set(Position::new(16, 8), CellState::Alive);
        ..set(Position::new(17, 5), CellState::Alive);
        ..set(Position::new(17, 6), CellState::Alive);
        ..set(Position::new(17, 7), CellState::Alive);
        ..set(Position::new(18, 6), CellState::Alive);
        ..set(Position::new(21, 3), CellState::Alive);
        ..set(Position::new(21, 4), CellState::Alive);
        ..set(Position::new(21, 5), CellState::Alive);
        ..set(Position::new(22, 3), CellState::Alive);
        ..set(Position::new(22, 4), CellState::Alive);
        ..set(Position::new(22, 5), CellState::Alive);
        ..set(Position::new(23, 2), CellState::Alive);
        ..set(Position::new(23, 6), CellState::Alive);
        ..set(Position::new(25, 1), CellState::Alive);
        ..set(Position::new(25, 2), CellState::Alive);
        ..set(Position::new(25, 6), CellState::Alive);
        ..set(Position::new(25, 7), CellState::Alive);
        ..set(Position::new(35, 3), CellState::Alive);
        ..set(Position::new(35, 4), CellState::Alive);
        ..set(Position::new(36, 3), CellState::Alive);
        ..set(Position::new(36, 4), CellState::Alive);
    );
    grid
}

pub fn r_pentomino() -> Grid<CellState> {
    let mut grid = Grid::new(Dimensions::new(201, 201));
    grid = cascade!(
        grid;
        ..set(Position::new(100, 99), CellState::Alive);
        ..set(Position::new(101, 99), CellState::Alive);
        ..set(Position::new(99, 100), CellState::Alive);
        ..set(Position::new(100, 100), CellState::Alive);
        ..set(Position::new(100, 101), CellState::Alive);
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_matches_its_own_checker() {
        let grid = blinker();
        assert!(is_blinker(&grid, false));
        assert!(!is_blinker(&grid, true));
    }

    #[test]
    fn builders_place_the_expected_number_of_cells() {
        let alive = |grid: &Grid<CellState>| grid.iter().filter(|cell| cell.is_alive()).count();
        assert_eq!(alive(&blinker()), 3);
        assert_eq!(alive(&glider()), 5);
        assert_eq!(alive(&gosper_glider_gun()), 36);
        assert_eq!(alive(&r_pentomino()), 5);
    }
}
