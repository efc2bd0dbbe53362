// External libraries
use cgmath::Vector2;

// LIFECELL
use crate::engine::{AutomatonEngine, CellState};
use crate::viewport::Viewport;

/// Pointer-side of the input contract: maps presentation-space positions
/// into grid coordinates and toggles the cells under them.
///
/// Positions falling outside the grid are silently ignored, since a pointer
/// legitimately wanders off the grid during normal interaction. While the
/// pointer stays down, the cell toggled last is skipped so that move events
/// hovering over it do not flip it back and forth; leaving the cell and
/// re-entering it toggles it again.
pub struct PointerInput {
    down: bool,
    last: Option<(i32, i32)>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self {
            down: false,
            last: None,
        }
    }

    /// Forgetting the last cell here makes the first touch always paint.
    pub fn press(&mut self) {
        self.down = true;
        self.last = None;
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Routes one pointer position to the engine. Returns the new state of
    /// the toggled cell, or `None` if nothing was toggled.
    pub fn touch(
        &mut self,
        engine: &mut AutomatonEngine,
        viewport: &Viewport,
        position: Vector2<f32>,
    ) -> Option<CellState> {
        if !self.down {
            return None;
        }

        let (x, y) = viewport.grid_position(position);
        if self.last == Some((x, y)) {
            return None;
        }

        match engine.toggle_cell(x, y) {
            Ok(state) => {
                self.last = Some((x, y));
                Some(state)
            }
            // Tolerant boundary: out-of-grid pointer positions are dropped
            Err(_) => None,
        }
    }
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::new()
    }
}
