use bevy::{
    input::{keyboard::KeyboardInput, ButtonState},
    prelude::*,
};

use crate::{
    configuration::GameConfiguration,
    maze::{Direction, Intent, MazeGame, MazeGameSnapshot, Position},
};

use self::{
    components::*,
    events::{IntentEvent, QuitEvent},
    resources::{DrawConfigurationResource, TextureTable},
};

const TILE_Z: f32 = 0.;
// Player is always drawn over the level
const PLAYER_Z: f32 = 1.;

/// Game state, input and movement. Needs no renderer.
pub struct MazePlugin {
    pub configuration: GameConfiguration,
}

impl Plugin for MazePlugin {
    fn build(&self, app: &mut App) {
        let maze_game = MazeGame::new(&self.configuration)
            .unwrap_or_else(|error| panic!("Cannot generate the level: {}", error));

        let snapshot = maze_game.snapshot();

        app.insert_resource(self.configuration.clone())
            .insert_resource(snapshot)
            .insert_resource(maze_game)
            .add_event::<IntentEvent>()
            .add_event::<QuitEvent>()
            .add_system(read_intents.label("intents"))
            .add_system(play.label("play").after("intents"));
    }
}

/// Sprites for the level and the player.
pub struct MazeRenderPlugin {
    pub rect: UiRect<f32>,
}

impl Plugin for MazeRenderPlugin {
    fn build(&self, app: &mut App) {
        let maze_game = app.world.resource::<MazeGame>();
        let grid = maze_game.grid();

        let cell_width = (self.rect.right - self.rect.left) / grid.cols() as f32;
        let cell_height = (self.rect.top - self.rect.bottom) / grid.rows() as f32;
        let cell_size = cell_height.min(cell_width);

        app.insert_resource(DrawConfigurationResource {
            cell_size,
            half_cell: cell_size / 2.,
            origin: (self.rect.left, self.rect.top),
        })
        .init_resource::<TextureTable>()
        .add_startup_system(draw_level)
        .add_startup_system(draw_player)
        .add_system(update_player.after("play"));
    }
}

fn read_intents(
    mut keyboard_input_events: EventReader<KeyboardInput>,
    mut intent_event_writer: EventWriter<IntentEvent>,
) {
    keyboard_input_events
        .iter()
        .filter(|ki| matches!(ki.state, ButtonState::Pressed))
        .filter_map(|ki| ki.key_code)
        .filter_map(|kc| match kc {
            KeyCode::Up => Some(Intent::Move(Direction::Up)),
            KeyCode::Down => Some(Intent::Move(Direction::Down)),
            KeyCode::Left => Some(Intent::Move(Direction::Left)),
            KeyCode::Right => Some(Intent::Move(Direction::Right)),
            KeyCode::Q => Some(Intent::Quit),
            _ => None,
        })
        .for_each(|intent| intent_event_writer.send(IntentEvent(intent)));
}

fn play(
    mut intent_events: EventReader<IntentEvent>,
    mut maze_game: ResMut<MazeGame>,
    mut snapshot: ResMut<MazeGameSnapshot>,
    mut quit_event_writer: EventWriter<QuitEvent>,
) {
    for IntentEvent(intent) in intent_events.iter() {
        let next = maze_game.play(*intent);
        if next.quit {
            quit_event_writer.send(QuitEvent);
        }
        *snapshot = next;
    }
}

fn update_player(
    draw_configuration: Res<DrawConfigurationResource>,
    snapshot: Res<MazeGameSnapshot>,
    mut player_query: Query<&mut Transform, With<PlayerComponent>>,
) {
    if !snapshot.is_changed() {
        return;
    }

    for mut transform in player_query.iter_mut() {
        move_to(&mut transform, &snapshot.player, &draw_configuration);
    }
}

fn draw_level(
    mut commands: Commands,
    textures: Res<TextureTable>,
    draw_configuration: Res<DrawConfigurationResource>,
    maze_game: Res<MazeGame>,
) {
    let floor_variants = maze_game.floor_variants();

    for (position, tile) in maze_game.grid().iter() {
        let index = tile.texture_index(floor_variants);
        let texture = match textures.tiles.get(index) {
            Some(t) => t.clone(),
            None => {
                warn!("No texture for tile {:?} at {:?}", tile, position);
                continue;
            }
        };

        let mut sprite = textures.sprite(texture, &draw_configuration);
        move_to(&mut sprite.transform, &position, &draw_configuration);
        sprite.transform.translation.z = TILE_Z;

        commands.spawn_bundle(sprite);
    }
}

fn draw_player(
    mut commands: Commands,
    textures: Res<TextureTable>,
    draw_configuration: Res<DrawConfigurationResource>,
    snapshot: Res<MazeGameSnapshot>,
) {
    let mut sprite = textures.sprite(textures.player.clone(), &draw_configuration);
    move_to(&mut sprite.transform, &snapshot.player, &draw_configuration);
    sprite.transform.translation.z = PLAYER_Z;

    commands.spawn_bundle(sprite).insert(PlayerComponent);
}

// Rows grow downwards while bevy's y axis grows upwards
fn move_to(
    transform: &mut Transform,
    to: &Position,
    draw_configuration: &DrawConfigurationResource,
) {
    transform.translation.x = to.col as f32 * draw_configuration.cell_size
        + draw_configuration.origin.0
        + draw_configuration.half_cell;
    transform.translation.y = draw_configuration.origin.1
        - to.row as f32 * draw_configuration.cell_size
        - draw_configuration.half_cell;
}

mod resources {
    use bevy::prelude::*;

    use crate::configuration::GameConfiguration;

    #[derive(Clone)]
    pub struct DrawConfigurationResource {
        pub half_cell: f32,
        pub cell_size: f32,
        /// Top left corner of the level
        pub origin: (f32, f32),
    }

    /// Tile textures indexed by `Tile::texture_index`, plus the player.
    pub struct TextureTable {
        pub tiles: Vec<Handle<Image>>,
        pub player: Handle<Image>,
    }

    impl TextureTable {
        pub fn sprite(
            &self,
            texture: Handle<Image>,
            draw_configuration: &DrawConfigurationResource,
        ) -> SpriteBundle {
            let cell_size = draw_configuration.cell_size;
            SpriteBundle {
                sprite: Sprite {
                    custom_size: Some(Vec2::new(cell_size, cell_size)),
                    ..default()
                },
                texture,
                ..default()
            }
        }
    }

    impl FromWorld for TextureTable {
        fn from_world(world: &mut World) -> Self {
            let configuration = world.resource::<GameConfiguration>().clone();

            let asset_server = world.resource::<AssetServer>();

            let tiles = configuration
                .tile_textures
                .iter()
                .map(|path| asset_server.load(*path))
                .collect();
            let player = asset_server.load(configuration.player_texture);

            TextureTable { tiles, player }
        }
    }
}

pub mod events {
    use crate::maze::Intent;

    pub struct IntentEvent(pub Intent);

    pub struct QuitEvent;
}

mod components {
    use bevy::prelude::Component;

    #[derive(Component)]
    pub struct PlayerComponent;
}
