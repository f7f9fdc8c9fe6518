mod common;
mod error;
mod game;
mod generator;
mod grid;
mod movement;
mod player;

pub use common::{Direction, Intent, Position, Tile};
pub use error::MazeError;
pub use game::{MazeGame, MazeGameSnapshot};
pub use generator::LevelGenerator;
pub use grid::Grid;
pub use movement::attempt_move;
pub use player::{CharacterStats, Player};
