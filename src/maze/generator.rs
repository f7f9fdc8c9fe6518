use fastrand::Rng;
use tracing::{debug, info};

use super::{
    common::{Direction, Position, Tile},
    error::MazeError,
    grid::Grid,
};

/// Smallest size that still leaves one interior ring around the first pillar.
pub const MIN_DIMENSION: usize = 5;
/// Floor variants are written as single digits in the text level format.
pub const MAX_FLOOR_VARIANTS: usize = 10;

const OPEN: u8 = 0;
const SOLID: u8 = 1;

const CONNECTORS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];
// Pillars on the first lattice row never extend upwards.
const FIRST_ROW_CONNECTORS: [Direction; 3] = [Direction::Right, Direction::Left, Direction::Down];

/// Builds maze levels out of a solid border, a lattice of pillars every
/// second cell and one random wall stub per pillar.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    rows: usize,
    cols: usize,
    floor_variants: usize,
}

impl LevelGenerator {
    pub fn new(rows: usize, cols: usize, floor_variants: usize) -> Result<Self, MazeError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        if floor_variants == 0 || floor_variants > MAX_FLOOR_VARIANTS {
            return Err(MazeError::InvalidVariantCount(floor_variants));
        }

        Ok(Self {
            rows,
            cols,
            floor_variants,
        })
    }

    pub fn generate(&self, rng: &Rng) -> Result<Grid, MazeError> {
        info!("generating {}x{} level", self.rows, self.cols);

        let mut scratch = vec![vec![OPEN; self.cols]; self.rows];

        for col in 0..self.cols {
            scratch[0][col] = SOLID;
            scratch[self.rows - 1][col] = SOLID;
        }
        for row in scratch.iter_mut() {
            row[0] = SOLID;
            row[self.cols - 1] = SOLID;
        }

        let pillars = self.pillars();
        for pillar in &pillars {
            scratch[pillar.row][pillar.col] = SOLID;
        }

        for stub in self.connectors(&pillars, rng)? {
            scratch[stub.row][stub.col] = SOLID;
        }

        let mut grid = Grid::new(self.rows, self.cols)?;
        let mut walls = 0;
        for (row, cells) in scratch.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let tile = if *cell == SOLID {
                    walls += 1;
                    Tile::Wall
                } else {
                    Tile::Floor(rng.usize(0..self.floor_variants))
                };
                grid.set(row, col, tile)?;
            }
        }

        info!(
            "generated level with {} pillars and {} walls",
            pillars.len(),
            walls
        );
        debug!("level:\n{}", grid);

        Ok(grid)
    }

    /// Draws one stub cell per pillar, in pillar order.
    fn connectors(&self, pillars: &[Position], rng: &Rng) -> Result<Vec<Position>, MazeError> {
        pillars
            .iter()
            .map(|pillar| {
                let candidates: &[Direction] = if pillar.row == 2 {
                    &FIRST_ROW_CONNECTORS
                } else {
                    &CONNECTORS
                };
                let direction = candidates[rng.usize(0..candidates.len())];
                debug!("pillar {:?} extends {:?}", pillar, direction);

                // pillars sit at least two cells from every edge
                pillar.step(direction).ok_or(MazeError::OutOfBounds {
                    row: pillar.row,
                    col: pillar.col,
                })
            })
            .collect()
    }

    fn pillars(&self) -> Vec<Position> {
        (2..self.rows - 2)
            .step_by(2)
            .flat_map(|row| {
                (2..self.cols - 2)
                    .step_by(2)
                    .map(move |col| Position::new(row, col))
            })
            .collect()
    }
}
