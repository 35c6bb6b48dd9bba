pub mod backtracker;

use rand::RngCore;

use crate::error::MazeError;
use crate::grids::maze_grid::MazeGrid;
use crate::grids::Coord;

/// What a single generation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Connected one new cell and moved the cursor onto it.
    Advanced,
    /// No unvisited neighbors at the cursor; popped the stack.
    Backtracked,
    /// Generation had already finished; the call was a no-op.
    Done,
}

/// Steppable maze generator. One call to `step` performs one bounded unit of
/// work; a driver interleaves calls with read-only passes over `grid`.
pub trait Generator {
    fn step(&mut self, rng: &mut dyn RngCore) -> Result<StepOutcome, MazeError>;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &MazeGrid;
    fn cursor(&self) -> Result<Option<Coord>, MazeError>;
}
