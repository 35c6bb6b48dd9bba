use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use backtracker_rs::{Backtracker, Coord, Direction, MazeError, MazeGrid, StepDriver};

/// Terminal demo for the steppable maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Characters drawn per cell
    #[arg(long, default_value_t = 3)]
    path_width: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let grid = MazeGrid::with_dims(args.width, args.height)?;
    let mut generator = Backtracker::new(grid);
    generator.init(Coord::new(0, 0))?;

    let mut driver = StepDriver::new(generator, rng);
    driver.run_to_completion()?;

    print!("{}", render_ascii(driver.grid(), args.path_width.max(1))?);
    Ok(())
}

/// Block-style printer: every cell is a `path_width` square of characters
/// with one wall row/column between cells, and open south/east passages
/// carved through the shared wall. Unvisited cells print as `.` so a
/// mid-generation grid still reads sensibly.
fn render_ascii(grid: &MazeGrid, path_width: usize) -> Result<String, MazeError> {
    let span = path_width + 1;
    let mut canvas = vec![vec!['#'; grid.width() * span]; grid.height() * span];

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            let fill = if grid.is_visited(coord)? { ' ' } else { '.' };

            for py in 0..path_width {
                for px in 0..path_width {
                    canvas[y * span + py][x * span + px] = fill;
                }
            }

            for p in 0..path_width {
                if grid.has_passage(coord, Direction::South)? {
                    canvas[y * span + path_width][x * span + p] = ' ';
                }
                if grid.has_passage(coord, Direction::East)? {
                    canvas[y * span + p][x * span + path_width] = ' ';
                }
            }
        }
    }

    let mut out = String::new();
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}
