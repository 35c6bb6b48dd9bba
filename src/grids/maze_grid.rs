use crate::error::MazeError;
use crate::grids::cell::CellFlags;
use crate::grids::{Coord, Dimensions, Direction, Neighborhood};

/// Rectangular array of cells, row-major, fixed size after construction.
/// Holds connectivity state only; it never mirrors passages or picks
/// neighbors on its own.
#[derive(Debug)]
pub struct MazeGrid {
    dims: Dimensions,
    cells: Vec<CellFlags>,
}

impl MazeGrid {
    /// New grid with every cell cleared.
    pub fn with_dims(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        Ok(Self {
            cells: vec![CellFlags::default(); width * height],
            dims: Dimensions { width, height },
        })
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn total_cells(&self) -> usize {
        self.dims.width * self.dims.height
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> Result<usize, MazeError> {
        if coord.x >= self.dims.width || coord.y >= self.dims.height {
            return Err(MazeError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }

        Ok((self.dims.width * coord.y) + coord.x)
    }

    pub fn cell(&self, coord: Coord) -> Result<CellFlags, MazeError> {
        Ok(self.cells[self.index_of(coord)?])
    }

    pub fn is_visited(&self, coord: Coord) -> Result<bool, MazeError> {
        Ok(self.cell(coord)?.is_visited())
    }

    /// Marks the cell visited. Idempotent.
    pub fn set_visited(&mut self, coord: Coord) -> Result<(), MazeError> {
        let index = self.index_of(coord)?;
        self.cells[index].set_visited();
        Ok(())
    }

    pub fn has_passage(&self, coord: Coord, direction: Direction) -> Result<bool, MazeError> {
        Ok(self.cell(coord)?.has_passage(direction))
    }

    /// Opens the passage bit on `coord` toward `direction`. The mirror bit on
    /// the neighboring cell is the caller's responsibility; connecting two
    /// cells takes one `add_passage` call on each side.
    pub fn add_passage(&mut self, coord: Coord, direction: Direction) -> Result<(), MazeError> {
        let index = self.index_of(coord)?;

        // a passage through the outer wall has no cell on the other side
        if self.neighbor_of(coord, direction).is_none() {
            return Err(MazeError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }

        self.cells[index].open_passage(direction);
        Ok(())
    }

    /// In-bounds neighbor one step toward `direction`, if there is one.
    pub fn neighbor_of(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let neighbor = match direction {
            Direction::North => Coord::new(coord.x, coord.y.checked_sub(1)?),
            Direction::East => Coord::new(coord.x + 1, coord.y),
            Direction::South => Coord::new(coord.x, coord.y + 1),
            Direction::West => Coord::new(coord.x.checked_sub(1)?, coord.y),
        };

        if neighbor.x < self.dims.width && neighbor.y < self.dims.height {
            Some(neighbor)
        } else {
            None
        }
    }

    pub fn neighborhood_of(&self, coord: Coord) -> Neighborhood {
        let mut neighbors = Neighborhood::new();

        neighbors.north = self.neighbor_of(coord, Direction::North);
        neighbors.east = self.neighbor_of(coord, Direction::East);
        neighbors.south = self.neighbor_of(coord, Direction::South);
        neighbors.west = self.neighbor_of(coord, Direction::West);

        neighbors
    }
}

#[cfg(test)]
mod test_grid {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            MazeGrid::with_dims(0, 5).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert_eq!(
            MazeGrid::with_dims(5, 0).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 5,
                height: 0
            }
        );
        assert!(MazeGrid::with_dims(1, 1).is_ok());
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let grid = MazeGrid::with_dims(3, 2).unwrap();

        assert!(grid.cell(Coord::new(2, 1)).is_ok());
        assert_eq!(
            grid.cell(Coord::new(3, 0)).unwrap_err(),
            MazeError::OutOfBounds { x: 3, y: 0 }
        );
        assert_eq!(
            grid.is_visited(Coord::new(0, 2)).unwrap_err(),
            MazeError::OutOfBounds { x: 0, y: 2 }
        );
    }

    #[test]
    fn passages_are_per_cell_until_mirrored() {
        let mut grid = MazeGrid::with_dims(2, 1).unwrap();
        let west = Coord::new(0, 0);
        let east = Coord::new(1, 0);

        grid.add_passage(west, Direction::East).unwrap();
        assert!(grid.has_passage(west, Direction::East).unwrap());
        assert!(!grid.has_passage(east, Direction::West).unwrap());

        grid.add_passage(east, -Direction::East).unwrap();
        assert!(grid.has_passage(east, Direction::West).unwrap());
    }

    #[test]
    fn refuses_passage_through_outer_wall() {
        let mut grid = MazeGrid::with_dims(2, 2).unwrap();
        let corner = Coord::new(0, 0);

        assert!(grid.add_passage(corner, Direction::North).is_err());
        assert!(grid.add_passage(corner, Direction::West).is_err());
        assert!(!grid.has_passage(corner, Direction::North).unwrap());

        assert!(grid.add_passage(corner, Direction::East).is_ok());
        assert!(grid.add_passage(corner, Direction::South).is_ok());
    }

    #[test]
    fn set_visited_is_idempotent() {
        let mut grid = MazeGrid::with_dims(2, 2).unwrap();
        let coord = Coord::new(1, 1);

        assert!(!grid.is_visited(coord).unwrap());
        grid.set_visited(coord).unwrap();
        grid.set_visited(coord).unwrap();
        assert!(grid.is_visited(coord).unwrap());
    }

    #[test]
    fn neighborhood_respects_edges() {
        let grid = MazeGrid::with_dims(3, 3).unwrap();

        let corner: Vec<_> = grid.neighborhood_of(Coord::new(0, 0)).collect();
        assert_eq!(
            corner,
            vec![
                (Direction::East, Coord::new(1, 0)),
                (Direction::South, Coord::new(0, 1)),
            ]
        );

        let center: Vec<_> = grid.neighborhood_of(Coord::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                (Direction::North, Coord::new(1, 0)),
                (Direction::East, Coord::new(2, 1)),
                (Direction::South, Coord::new(1, 2)),
                (Direction::West, Coord::new(0, 1)),
            ]
        );
    }
}
