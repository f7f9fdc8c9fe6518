use bevy::{app::AppExit, prelude::*, render::texture::ImageSettings};
use components::PositionTextComponent;
use configuration::{GameConfiguration, CANVAS_HEIGHT, SCREEN_HEIGHT};
use maze::MazeGameSnapshot;
use maze_plugin::{events::QuitEvent, MazePlugin, MazeRenderPlugin};

pub mod configuration;
pub mod maze;
mod maze_plugin;

pub struct MainPlugin;
impl Plugin for MainPlugin {
    fn build(&self, app: &mut App) {
        let window_description = app.world.resource::<WindowDescriptor>();

        // the canvas keeps the same share of the window as on the reference screen
        let canvas_height = window_description.height * CANVAS_HEIGHT / SCREEN_HEIGHT;

        let top = window_description.height / 2.;
        let bottom = -window_description.height / 2. + canvas_height;
        let right = window_description.width / 2.;
        let left = -window_description.width / 2.;

        app.insert_resource(ImageSettings::default_nearest())
            .add_plugin(MazePlugin {
                configuration: GameConfiguration::default(),
            })
            .add_plugin(MazeRenderPlugin {
                rect: UiRect {
                    top,
                    left,
                    right,
                    bottom,
                },
            })
            .add_startup_system(setup(canvas_height))
            .add_system(update_position_text)
            .add_system(exit_on_quit);
    }
}

fn exit_on_quit(
    mut quit_event_reader: EventReader<QuitEvent>,
    mut app_exit_event_writer: EventWriter<AppExit>,
) {
    if quit_event_reader.iter().count() == 0 {
        return;
    }

    info!("Bye!");

    app_exit_event_writer.send(AppExit);
}

fn update_position_text(
    snapshot: Res<MazeGameSnapshot>,
    mut position_text_query: Query<&mut Text, With<PositionTextComponent>>,
) {
    if !snapshot.is_changed() {
        return;
    }

    for mut text in position_text_query.iter_mut() {
        text.sections[0].value = position_label(&snapshot);
    }
}

fn position_label(snapshot: &MazeGameSnapshot) -> String {
    format!(
        "Position: {}, {}",
        snapshot.player.row, snapshot.player.col
    )
}

fn setup(
    canvas_height: f32,
) -> impl Fn(Commands, Res<AssetServer>, Res<GameConfiguration>, Res<MazeGameSnapshot>) {
    move |mut commands: Commands,
          asset_server: Res<AssetServer>,
          configuration: Res<GameConfiguration>,
          snapshot: Res<MazeGameSnapshot>| {
        let font = asset_server.load("RobotoMedium-Owv4.ttf");

        commands.spawn_bundle(Camera2dBundle::default());

        let padding = 15.;
        let font_size = (canvas_height / 6.).min(30.);

        let text_style = TextStyle {
            font,
            font_size,
            color: Color::WHITE,
        };

        let stats = &configuration.player_stats;
        commands
            .spawn_bundle(
                TextBundle::from_section(
                    format!(
                        "HP: {}/{}  ATK: {}  DFS: {}",
                        stats.hp, stats.max_hp, stats.atk, stats.dfs
                    ),
                    text_style.clone(),
                )
                .with_text_alignment(TextAlignment::TOP_LEFT)
                .with_style(Style {
                    position_type: PositionType::Absolute,
                    position: UiRect {
                        bottom: Val::Px(canvas_height - padding - font_size),
                        left: Val::Px(padding),
                        ..default()
                    },
                    ..default()
                }),
            );

        commands
            .spawn_bundle(
                TextBundle::from_section(position_label(&snapshot), text_style)
                    .with_text_alignment(TextAlignment::TOP_LEFT)
                    .with_style(Style {
                        position_type: PositionType::Absolute,
                        position: UiRect {
                            bottom: Val::Px(canvas_height - 2. * (padding + font_size)),
                            left: Val::Px(padding),
                            ..default()
                        },
                        ..default()
                    }),
            )
            .insert(PositionTextComponent);
    }
}

mod components {
    use bevy::prelude::Component;

    #[derive(Component)]
    pub struct PositionTextComponent;
}

#[cfg(test)]
mod tests {
    use bevy::{input::ButtonState, prelude::*};

    use crate::{
        configuration::GameConfiguration,
        maze::{MazeGame, MazeGameSnapshot, Position},
        maze_plugin::{events::QuitEvent, MazePlugin},
    };

    #[test]
    fn test_e2e() {
        let mut app = create_app();

        press_keyboard_key(&mut app, KeyCode::Right);
        app.update();

        let snapshot = app.world.resource::<MazeGameSnapshot>();
        assert_eq!(snapshot.player, Position::new(1, 2));

        press_keyboard_key(&mut app, KeyCode::Right);
        app.update();
        press_keyboard_key(&mut app, KeyCode::Left);
        app.update();

        let snapshot = app.world.resource::<MazeGameSnapshot>();
        assert_eq!(snapshot.player, Position::new(1, 2));

        info!("bump into the border");

        press_keyboard_key(&mut app, KeyCode::Up);
        app.update();
        app.update();

        let snapshot = app.world.resource::<MazeGameSnapshot>();
        assert_eq!(snapshot.player, Position::new(1, 2));
        assert!(snapshot.blocked);

        let game = app.world.resource::<MazeGame>();
        assert_eq!(game.player().position(), Position::new(1, 2));
    }

    #[test]
    fn test_released_keys_are_ignored() {
        let mut app = create_app();

        release_keyboard_key(&mut app, KeyCode::Right);
        app.update();

        let snapshot = app.world.resource::<MazeGameSnapshot>();
        assert_eq!(snapshot.player, Position::new(1, 1));
    }

    #[test]
    fn test_quit_key() {
        let mut app = create_app();

        press_keyboard_key(&mut app, KeyCode::Q);
        app.update();

        let snapshot = app.world.resource::<MazeGameSnapshot>();
        assert!(snapshot.quit);

        let quit_events = app.world.resource::<Events<QuitEvent>>();
        let mut quit_event_reader = quit_events.get_reader();
        assert_eq!(quit_event_reader.iter(quit_events).count(), 1);
    }

    pub fn press_keyboard_key(app: &mut App, code: KeyCode) {
        send_keyboard_key(app, code, ButtonState::Pressed);
    }

    pub fn release_keyboard_key(app: &mut App, code: KeyCode) {
        send_keyboard_key(app, code, ButtonState::Released);
    }

    fn send_keyboard_key(app: &mut App, code: KeyCode, state: ButtonState) {
        use bevy::input::keyboard::KeyboardInput;

        let world = &mut app.world;
        let mut keyboard_input = world.get_resource_mut::<Events<KeyboardInput>>().unwrap();
        keyboard_input.send(KeyboardInput {
            scan_code: 0,
            key_code: Some(code),
            state,
        });
    }

    pub fn create_app() -> App {
        use bevy::{input::InputPlugin, utils::tracing::subscriber::set_global_default};
        use tracing_log::LogTracer;
        use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

        if LogTracer::init().is_ok() {
            let filter_layer = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("OFF,bevy_maze_walk=INFO"))
                .unwrap();
            let subscriber = Registry::default().with(filter_layer);
            let fmt_layer = tracing_subscriber::fmt::Layer::default();
            let subscriber = subscriber.with(fmt_layer);
            set_global_default(subscriber).unwrap();
        }

        let mut app = App::new();

        app.add_plugins(MinimalPlugins);
        app.add_plugin(InputPlugin::default());
        app.add_plugin(MazePlugin {
            configuration: GameConfiguration::default(),
        });

        app
    }
}
