// Standard library
use std::mem;

// External libraries
use log::{debug, trace};
use rand::Rng;

// LIFECELL
use crate::error::EngineError;
use crate::grid::{Dimensions, Grid, GridView, Position, MOORE_NEIGHBORHOOD};

/// Probability for a cell to come out alive of a [`AutomatonEngine::randomize`] call.
pub const ALIVE_PROBABILITY: f64 = 0.25;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

use self::CellState::{Alive, Dead};

impl Default for CellState {
    fn default() -> Self {
        Dead
    }
}

impl CellState {
    #[inline]
    pub fn is_alive(&self) -> bool {
        *self == Alive
    }

    #[inline]
    pub fn toggled(&self) -> Self {
        match self {
            Dead => Alive,
            Alive => Dead,
        }
    }
}

// Each cell is weighted against its Moore neighborhood: every live neighbor
// contributes 2 and the live centre cell itself contributes 1. The resulting
// code lies in 0..=17, where (code / 2) is the number of live neighbors and
// (code % 2) the state of the cell itself.
fn transfer_code(view: &GridView<'_, CellState>) -> usize {
    let mut code = if view.cell().is_alive() { 1 } else { 0 };
    for offset in &MOORE_NEIGHBORHOOD {
        if view.get_relative(*offset).is_alive() {
            code += 2;
        }
    }
    code
}

/// New state of a cell, indexed by its transfer code. Each pair of entries
/// corresponds to a certain number of live neighbors; the first of the pair
/// is the result if the cell is dead, the second if it is alive.
pub const TRANSFER_TABLE: [CellState; 18] = [
    Dead, Dead, // 0 live neighbors -> dead cell
    Dead, Dead, // 1 live neighbors -> dead cell
    Dead, Alive, // 2 live neighbors -> cell keeps its current state
    Alive, Alive, // 3 live neighbors -> live cell
    Dead, Dead, // 4 live neighbors -> dead cell
    Dead, Dead, // 5 live neighbors -> dead cell
    Dead, Dead, // 6 live neighbors -> dead cell
    Dead, Dead, // 7 live neighbors -> dead cell
    Dead, Dead, // 8 live neighbors -> dead cell
];

/// Conway's Game of Life over two equally sized grids. The engine is the
/// exclusive owner of both: `current` is the authoritative generation and
/// `next` the scratch buffer overwritten by every [`AutomatonEngine::step`].
#[derive(Debug)]
pub struct AutomatonEngine {
    current: Grid<CellState>,
    next: Grid<CellState>,
    generation: u64,
}

impl AutomatonEngine {
    /// Creates an engine with every cell dead.
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        let dim = Dimensions::new(width as u32, height as u32);
        debug!("creating {}x{} automaton engine", width, height);
        Ok(Self {
            current: Grid::new(dim),
            next: Grid::new(dim),
            generation: 0,
        })
    }

    /// Creates an engine seeded from a prebuilt pattern grid.
    pub fn with_grid(current: Grid<CellState>) -> Self {
        if current.dim().size() == 0 {
            panic!("{}", ERR_EMPTY_GRID)
        }
        let next = Grid::new(*current.dim());
        Self {
            current,
            next,
            generation: 0,
        }
    }

    /// Sets every cell independently to alive with probability 0.25.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        let dim = *self.current.dim();
        for y in 0..dim.height() {
            for x in 0..dim.width() {
                let state = if rng.random_bool(ALIVE_PROBABILITY) {
                    Alive
                } else {
                    Dead
                };
                self.current.set(Position::new(x, y), state);
            }
        }
        self.generation = 0;
        debug!("randomized {}x{} grid", dim.width(), dim.height());
    }

    /// Sets every cell to dead.
    pub fn clear(&mut self) {
        self.current.fill(Dead);
        self.generation = 0;
        debug!("cleared grid");
    }

    /// Advances the automaton by one generation.
    ///
    /// Every cell of the new generation is a function of the prior `current`
    /// grid only: results are written into the scratch buffer, then the two
    /// buffers are swapped in O(1). No cell ever observes a neighbor already
    /// updated within the same step.
    pub fn step(&mut self) {
        let dim = *self.current.dim();
        for y in 0..dim.height() {
            for x in 0..dim.width() {
                let pos = Position::new(x, y);
                let code = transfer_code(&self.current.view(pos));
                self.next.set(pos, TRANSFER_TABLE[code]);
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("computed generation {}", self.generation);
    }

    /// Flips the state of cell `(x, y)` and returns its new state.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<CellState, EngineError> {
        if !self.current.dim().contains(x, y) {
            return Err(EngineError::OutOfBounds { x, y });
        }
        let pos = Position::new(x as u32, y as u32);
        let state = self.current.get(pos).toggled();
        self.current.set(pos, state);
        Ok(state)
    }

    /// Returns the current state of cell `(x, y)`.
    pub fn read_cell(&self, x: i32, y: i32) -> Result<CellState, EngineError> {
        if !self.current.dim().contains(x, y) {
            return Err(EngineError::OutOfBounds { x, y });
        }
        Ok(self.current.get(Position::new(x as u32, y as u32)))
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        *self.current.dim()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Full current grid, for display collaborators.
    #[inline]
    pub fn grid(&self) -> &Grid<CellState> {
        &self.current
    }

    /// Row slices of the current grid, top to bottom.
    pub fn rows<'a>(&'a self) -> std::slice::Chunks<'a, CellState> {
        self.current.rows()
    }
}

const ERR_EMPTY_GRID: &str = "Pattern grid must hold at least one cell.";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Build a 5x5 engine with the centre cell in `centre` state and the
    // first `n_neighbors` cells of its Moore neighborhood alive.
    fn engine_with_neighbors(centre: CellState, n_neighbors: usize) -> AutomatonEngine {
        let mut engine = AutomatonEngine::new(5, 5).unwrap();
        if centre.is_alive() {
            engine.toggle_cell(2, 2).unwrap();
        }
        for offset in MOORE_NEIGHBORHOOD.iter().take(n_neighbors) {
            engine.toggle_cell(2 + offset.x(), 2 + offset.y()).unwrap();
        }
        engine
    }

    #[test]
    fn transfer_table_encodes_the_classical_rule() {
        for count in 0..=8 {
            for state in &[Dead, Alive] {
                let code = 2 * count + if state.is_alive() { 1 } else { 0 };
                let expected = match count {
                    2 => *state,
                    3 => Alive,
                    _ => Dead,
                };
                assert_eq!(TRANSFER_TABLE[code], expected);
            }
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut engine = AutomatonEngine::new(7, 4).unwrap();
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut engine = engine_with_neighbors(Dead, 3);
        engine.step();
        assert_eq!(engine.read_cell(2, 2), Ok(Alive));
    }

    #[test]
    fn cell_with_two_neighbors_keeps_its_state() {
        let mut engine = engine_with_neighbors(Dead, 2);
        engine.step();
        assert_eq!(engine.read_cell(2, 2), Ok(Dead));

        let mut engine = engine_with_neighbors(Alive, 2);
        engine.step();
        assert_eq!(engine.read_cell(2, 2), Ok(Alive));
    }

    #[test]
    fn cell_dies_outside_two_or_three_neighbors() {
        for n_neighbors in &[0usize, 1, 4, 5, 6, 7, 8] {
            for centre in &[Dead, Alive] {
                let mut engine = engine_with_neighbors(*centre, *n_neighbors);
                engine.step();
                assert_eq!(engine.read_cell(2, 2), Ok(Dead));
            }
        }
    }

    #[test]
    fn border_neighbors_count_as_dead() {
        // A single live corner cell has 0 live neighbors, not 3: cells
        // outside the grid never count as alive.
        let mut engine = AutomatonEngine::new(3, 3).unwrap();
        engine.toggle_cell(0, 0).unwrap();
        engine.step();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn step_reads_only_the_prior_generation() {
        // Horizontal blinker: in-place updates would kill (2, 2) before its
        // vertical neighbors are evaluated and break the oscillation.
        let mut engine = AutomatonEngine::new(5, 5).unwrap();
        for x in 1..=3 {
            engine.toggle_cell(x, 2).unwrap();
        }
        engine.step();
        assert_eq!(engine.read_cell(2, 1), Ok(Alive));
        assert_eq!(engine.read_cell(2, 2), Ok(Alive));
        assert_eq!(engine.read_cell(2, 3), Ok(Alive));
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn toggle_flips_exactly_the_targeted_cell() {
        let mut engine = AutomatonEngine::new(4, 4).unwrap();
        assert_eq!(engine.toggle_cell(1, 2), Ok(Alive));
        assert_eq!(engine.population(), 1);
        assert_eq!(engine.read_cell(1, 2), Ok(Alive));
        assert_eq!(engine.toggle_cell(1, 2), Ok(Dead));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn out_of_grid_accesses_are_reported() {
        let mut engine = AutomatonEngine::new(4, 3).unwrap();
        assert_eq!(
            engine.read_cell(4, 0),
            Err(EngineError::OutOfBounds { x: 4, y: 0 })
        );
        assert_eq!(
            engine.read_cell(0, -1),
            Err(EngineError::OutOfBounds { x: 0, y: -1 })
        );
        assert_eq!(
            engine.toggle_cell(-1, 2),
            Err(EngineError::OutOfBounds { x: -1, y: 2 })
        );
        assert_eq!(
            engine.toggle_cell(2, 3),
            Err(EngineError::OutOfBounds { x: 2, y: 3 })
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            AutomatonEngine::new(0, 5).unwrap_err(),
            EngineError::InvalidDimension { width: 0, height: 5 }
        );
        assert_eq!(
            AutomatonEngine::new(5, -1).unwrap_err(),
            EngineError::InvalidDimension {
                width: 5,
                height: -1
            }
        );
    }

    #[test]
    fn randomize_produces_a_quarter_live_cells() {
        let mut engine = AutomatonEngine::new(128, 128).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        // Average the live fraction over several trials
        let trials = 16;
        let mut total_alive = 0;
        for _ in 0..trials {
            engine.randomize_with(&mut rng);
            total_alive += engine.population();
        }
        let fraction = (total_alive as f64) / ((trials * 128 * 128) as f64);
        assert!((fraction - ALIVE_PROBABILITY).abs() < 0.01);
    }

    #[test]
    fn randomize_and_clear_reset_the_generation_counter() {
        let mut engine = AutomatonEngine::new(6, 6).unwrap();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 0);

        engine.step();
        engine.randomize_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(engine.generation(), 0);
    }
}
