use rand::RngCore;

use crate::error::MazeError;
use crate::generators::{Generator, StepOutcome};
use crate::grids::maze_grid::MazeGrid;

/// Drives one generator with one random source, one step per tick. Callers
/// read grid state between ticks, never during one.
pub struct StepDriver<G, R> {
    generator: G,
    rng: R,
}

impl<G: Generator, R: RngCore> StepDriver<G, R> {
    pub fn new(generator: G, rng: R) -> Self {
        Self { generator, rng }
    }

    /// Advances generation by one step.
    pub fn tick(&mut self) -> Result<StepOutcome, MazeError> {
        let outcome = self.generator.step(&mut self.rng)?;
        log::trace!("tick: {:?}", outcome);
        Ok(outcome)
    }

    /// Ticks until the generator reports completion; returns the number of
    /// steps taken.
    pub fn run_to_completion(&mut self) -> Result<usize, MazeError> {
        let mut steps = 0;
        while !self.generator.is_done() {
            self.tick()?;
            steps += 1;
        }

        log::info!("maze complete after {} steps", steps);
        Ok(steps)
    }

    pub fn grid(&self) -> &MazeGrid {
        self.generator.grid()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}
