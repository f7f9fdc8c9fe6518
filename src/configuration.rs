use crate::maze::{CharacterStats, Position};

pub const SCREEN_WIDTH: f32 = 1100.;
pub const SCREEN_HEIGHT: f32 = 1000.;
// Bottom strip of the window reserved for the stats panel
pub const CANVAS_HEIGHT: f32 = 300.;

const RATIO: usize = 10;
const TILE_SIZE: usize = 10;

const DISPLAY_WIDTH: usize = SCREEN_WIDTH as usize / RATIO;
const DISPLAY_HEIGHT: usize = (SCREEN_HEIGHT - CANVAS_HEIGHT) as usize / RATIO;

pub const LEVEL_ROWS: usize = DISPLAY_HEIGHT / TILE_SIZE;
pub const LEVEL_COLS: usize = DISPLAY_WIDTH / TILE_SIZE;

pub const DEFAULT_SEED: u64 = 69;

// The last texture is the wall, every other one is an interchangeable floor
pub const TILE_TEXTURES: [&str; 3] = ["grass-1.png", "grass-2.png", "rock.png"];
pub const PLAYER_TEXTURE: &str = "player.png";

pub const PLAYER_START: Position = Position { row: 1, col: 1 };
pub const PLAYER_STATS: CharacterStats = CharacterStats {
    hp: 100,
    max_hp: 100,
    atk: 15,
    dfs: 7,
};

#[derive(Debug, Clone)]
pub struct GameConfiguration {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    pub tile_textures: Vec<&'static str>,
    pub player_texture: &'static str,
    pub player_start: Position,
    pub player_stats: CharacterStats,
}

impl GameConfiguration {
    /// Number of passable tile kinds; the remaining texture is the wall.
    pub fn floor_variants(&self) -> usize {
        self.tile_textures.len().saturating_sub(1)
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            rows: LEVEL_ROWS,
            cols: LEVEL_COLS,
            seed: DEFAULT_SEED,
            tile_textures: TILE_TEXTURES.to_vec(),
            player_texture: PLAYER_TEXTURE,
            player_start: PLAYER_START,
            player_stats: PLAYER_STATS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfiguration;

    #[test]
    fn test_default_level_size() {
        let configuration = GameConfiguration::default();
        assert_eq!(configuration.rows, 7);
        assert_eq!(configuration.cols, 11);
        assert_eq!(configuration.seed, 69);
        assert_eq!(configuration.floor_variants(), 2);
    }
}
