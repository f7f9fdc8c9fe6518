use fastrand::Rng;
use tracing::info;

use super::{
    common::{Intent, Position},
    error::MazeError,
    generator::LevelGenerator,
    grid::Grid,
    player::Player,
};
use crate::configuration::GameConfiguration;

/// Owns the generated level and the player walking it.
#[derive(Debug)]
pub struct MazeGame {
    grid: Grid,
    player: Player,
    floor_variants: usize,
}

impl MazeGame {
    pub fn new(configuration: &GameConfiguration) -> Result<Self, MazeError> {
        let floor_variants = configuration.floor_variants();
        let generator = LevelGenerator::new(configuration.rows, configuration.cols, floor_variants)?;
        let rng = Rng::with_seed(configuration.seed);
        let grid = generator.generate(&rng)?;

        let start = configuration.player_start;
        if !grid.contains(&start) {
            return Err(MazeError::OutOfBounds {
                row: start.row,
                col: start.col,
            });
        }
        if !grid.is_passable(&start) {
            return Err(MazeError::BlockedStart {
                row: start.row,
                col: start.col,
            });
        }

        info!("new game, player at {:?}", start);

        Ok(Self {
            grid,
            player: Player::new(start, configuration.player_stats),
            floor_variants,
        })
    }

    pub fn play(&mut self, intent: Intent) -> MazeGameSnapshot {
        match intent {
            Intent::Move(direction) => {
                let moved = self.player.step(direction, &self.grid);
                self.snapshot_with(!moved, false)
            }
            Intent::Quit => {
                info!("quit requested");
                self.snapshot_with(false, true)
            }
        }
    }

    pub fn snapshot(&self) -> MazeGameSnapshot {
        self.snapshot_with(false, false)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn floor_variants(&self) -> usize {
        self.floor_variants
    }

    fn snapshot_with(&self, blocked: bool, quit: bool) -> MazeGameSnapshot {
        MazeGameSnapshot {
            player: self.player.position(),
            blocked,
            quit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGameSnapshot {
    pub player: Position,
    pub blocked: bool,
    pub quit: bool,
}
