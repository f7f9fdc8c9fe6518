use std::{fmt, str::FromStr};

use super::{
    common::{Position, Tile},
    error::MazeError,
};

/// Fixed-size row-major tile storage. Cells start unset and are filled once
/// by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<Tile>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> Result<(), MazeError> {
        let index = self.index(row, col)?;
        self.cells[index] = Some(tile);
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Tile, MazeError> {
        let index = self.index(row, col)?;
        self.cells[index].ok_or(MazeError::UnsetCell { row, col })
    }

    /// False for anything an actor cannot stand on, including positions
    /// outside the grid and unset cells.
    pub fn is_passable(&self, position: &Position) -> bool {
        self.get(position.row, position.col)
            .map(|tile| tile.is_passable())
            .unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Every populated cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tile| (Position::new(i / cols, i % cols), tile))
        })
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MazeError> {
        if row >= self.rows || col >= self.cols {
            return Err(MazeError::OutOfBounds { row, col });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let c = match cell {
                    None => '?',
                    Some(Tile::Wall) => 'w',
                    Some(Tile::Floor(variant)) => u32::try_from(*variant)
                        .ok()
                        .and_then(|v| char::from_digit(v, 10))
                        .unwrap_or('?'),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text level format:
///
/// ```text
/// 3,4
/// wwww
/// w01w
/// wwww
/// ```
///
/// `w` is a wall, a digit is the floor variant, so only variants 0-9 can be
/// written. Unset cells are displayed as `?` and do not parse back.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| MazeError::InvalidLevel("missing header".to_string()))?;
        let (rows, cols) = header
            .split_once(',')
            .ok_or_else(|| MazeError::InvalidLevel(format!("bad header {:?}", header)))?;
        let parse_dimension = |value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|e| MazeError::InvalidLevel(format!("bad dimension {:?}: {}", value, e)))
        };
        let rows = parse_dimension(rows)?;
        let cols = parse_dimension(cols)?;

        let mut grid = Grid::new(rows, cols)?;
        for row in 0..rows {
            let line = lines
                .next()
                .ok_or_else(|| MazeError::InvalidLevel(format!("missing row {}", row)))?;
            if line.chars().count() != cols {
                return Err(MazeError::InvalidLevel(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let tile = match c {
                    'w' => Tile::Wall,
                    d => match d.to_digit(10) {
                        Some(variant) => Tile::Floor(variant as usize),
                        None => {
                            return Err(MazeError::InvalidLevel(format!(
                                "unexpected char {:?} at ({}, {})",
                                c, row, col
                            )))
                        }
                    },
                };
                grid.set(row, col, tile)?;
            }
        }

        Ok(grid)
    }
}
