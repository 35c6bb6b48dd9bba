use rand::{Rng, RngCore};

use crate::error::MazeError;
use crate::generators::{Generator, StepOutcome};
use crate::grids::maze_grid::MazeGrid;
use crate::grids::{Coord, Direction};

/// Randomized depth-first-search ("recursive backtracker") generator.
///
/// Owns its grid for the lifetime of a run. The stack holds the path from
/// the start cell to the cursor; every entry is a visited cell and
/// consecutive entries are grid-adjacent. Completion is signaled by the
/// stack draining, not by the visited count.
pub struct Backtracker {
    grid: MazeGrid,
    stack: Vec<Coord>,
    visited_cells: usize,
    done: bool,
    started: bool,
}

impl Backtracker {
    pub fn new(grid: MazeGrid) -> Self {
        Self {
            grid,
            stack: Vec::new(),
            visited_cells: 0,
            done: false,
            started: false,
        }
    }

    /// Starts a run from `start`: stack reset to the single start entry,
    /// start cell marked visited, visited count back to 1.
    pub fn init(&mut self, start: Coord) -> Result<(), MazeError> {
        self.grid.set_visited(start)?;
        self.stack.clear();
        self.stack.push(start);
        self.visited_cells = 1;
        self.done = false;
        self.started = true;
        Ok(())
    }

    /// Cells connected so far, start cell included.
    pub fn visited_cells(&self) -> usize {
        self.visited_cells
    }

    /// Hands the grid back once the caller is done stepping.
    pub fn into_grid(self) -> MazeGrid {
        self.grid
    }

    fn unvisited_neighbors(&self, coord: Coord) -> Vec<(Direction, Coord)> {
        self.grid
            .neighborhood_of(coord)
            .filter(|(_, neighbor)| matches!(self.grid.is_visited(*neighbor), Ok(false)))
            .collect()
    }
}

impl Generator for Backtracker {
    fn step(&mut self, rng: &mut dyn RngCore) -> Result<StepOutcome, MazeError> {
        if !self.started {
            return Err(MazeError::NotStarted);
        }

        let cur = match self.stack.last() {
            Some(&coord) => coord,
            None => return Ok(StepOutcome::Done),
        };

        let choices = self.unvisited_neighbors(cur);
        if choices.is_empty() {
            self.stack.pop();
            if self.stack.is_empty() {
                self.done = true;
                log::debug!("generation complete, {} cells visited", self.visited_cells);
            }
            return Ok(StepOutcome::Backtracked);
        }

        let (direction, next) = choices[rng.gen_range(0..choices.len())];

        // both halves of the wall; the grid does not mirror on its own
        self.grid.add_passage(cur, direction)?;
        self.grid.add_passage(next, -direction)?;

        self.grid.set_visited(next)?;
        self.visited_cells += 1;
        self.stack.push(next);

        Ok(StepOutcome::Advanced)
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Stack top while the run is live, `None` once it has drained.
    fn cursor(&self) -> Result<Option<Coord>, MazeError> {
        if !self.started {
            return Err(MazeError::NotStarted);
        }

        Ok(self.stack.last().copied())
    }
}
