// LIFECELL
pub mod engine;
pub mod error;
pub mod grid;
pub mod numerics;
pub mod patterns;
pub mod pointer;
pub mod viewport;

pub use engine::{AutomatonEngine, CellState};
pub use error::EngineError;

#[cfg(test)]
mod tests {
    use crate::engine::AutomatonEngine;
    use crate::patterns;

    fn alive_cells(engine: &AutomatonEngine) -> Vec<(usize, usize)> {
        let mut cells = vec![];
        for (y, row) in engine.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.is_alive() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        // Creates a simple Game of Life's blinker
        let mut engine = AutomatonEngine::with_grid(patterns::blinker());

        // Check that the blinker flipped correctly
        engine.step();
        assert!(patterns::is_blinker(engine.grid(), true));

        // Check that the blinker flipped back to its original shape
        engine.step();
        assert!(patterns::is_blinker(engine.grid(), false));
    }

    #[test]
    fn glider_translates_by_one_cell_every_four_generations() {
        let mut engine = AutomatonEngine::with_grid(patterns::glider());
        let start = alive_cells(&engine);

        for _ in 0..4 {
            engine.step();
        }

        let translated: Vec<_> = start.iter().map(|(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive_cells(&engine), translated);
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn still_life_is_a_fixed_point() {
        let mut engine = AutomatonEngine::new(4, 4).unwrap();
        for (x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            engine.toggle_cell(*x, *y).unwrap();
        }
        let block = engine.grid().clone();

        engine.step();
        assert!(*engine.grid() == block);
    }

    #[test]
    fn glider_gun_grows_its_population() {
        let mut engine = AutomatonEngine::with_grid(patterns::gosper_glider_gun());
        let start_population = engine.population();

        // The gun emits one 5-cell glider every 30 generations
        for _ in 0..60 {
            engine.step();
        }
        assert!(engine.population() >= start_population + 10);
    }
}
