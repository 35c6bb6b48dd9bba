pub mod driver;
pub mod error;
pub mod generators;
pub mod grids;

pub use driver::StepDriver;
pub use error::MazeError;
pub use generators::backtracker::Backtracker;
pub use generators::{Generator, StepOutcome};
pub use grids::cell::CellFlags;
pub use grids::maze_grid::MazeGrid;
pub use grids::{Coord, Dimensions, Direction, Neighborhood};
