/// A single grid cell. Only the kind is stored here; textures are resolved
/// by the renderer from the variant index.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Tile {
    Floor(usize),
    Wall,
}

impl Tile {
    pub fn is_passable(&self) -> bool {
        matches!(self, Tile::Floor(_))
    }

    /// Index into a texture table of `floor_variants + 1` entries, where the
    /// last entry is the wall.
    pub fn texture_index(&self, floor_variants: usize) -> usize {
        match self {
            Tile::Floor(variant) => *variant,
            Tile::Wall => floor_variants,
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step towards `direction`, or `None` when
    /// the step would leave the non-negative quadrant.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self::new(row, col))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(row, col)` unit offset. Rows grow downwards.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What the input layer asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::{Direction, Position, Tile};

    #[test]
    fn test_wall_uses_last_texture() {
        assert_eq!(Tile::Wall.texture_index(2), 2);
        assert_eq!(Tile::Floor(1).texture_index(2), 1);
        assert!(!Tile::Wall.is_passable());
        assert!(Tile::Floor(0).is_passable());
    }

    #[test]
    fn test_step_does_not_underflow() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(0, 1)));
    }
}
