use super::{
    common::{Direction, Position},
    grid::Grid,
    movement::attempt_move,
};

/// Carried by the player but not used by any rule yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: u32,
    pub dfs: u32,
}

#[derive(Debug, Clone)]
pub struct Player {
    position: Position,
    stats: CharacterStats,
}

impl Player {
    pub fn new(position: Position, stats: CharacterStats) -> Self {
        Self { position, stats }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    /// Returns whether the player actually moved.
    pub fn step(&mut self, direction: Direction, grid: &Grid) -> bool {
        let next = attempt_move(self.position, direction, grid);
        let moved = next != self.position;
        self.position = next;
        moved
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::{Direction, Grid, Position};

    use super::{CharacterStats, Player};

    #[test]
    fn test_step_reports_blocked_moves() {
        let grid: Grid = "3,4\nwwww\nw00w\nwwww".parse().unwrap();
        let stats = CharacterStats {
            hp: 100,
            max_hp: 100,
            atk: 15,
            dfs: 7,
        };
        let mut player = Player::new(Position::new(1, 1), stats);

        assert!(!player.step(Direction::Up, &grid));
        assert_eq!(player.position(), Position::new(1, 1));
        assert!(player.step(Direction::Right, &grid));
        assert_eq!(player.position(), Position::new(1, 2));
        assert!(!player.step(Direction::Right, &grid));
        assert_eq!(player.position(), Position::new(1, 2));
        assert_eq!(player.stats(), &stats);
    }
}
