use bevy::prelude::*;

use bevy_maze_walk::{
    configuration::{SCREEN_HEIGHT, SCREEN_WIDTH},
    MainPlugin,
};

fn main() {
    App::new()
        .insert_resource(WindowDescriptor {
            title: "Maze walk".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            resizable: false,
            ..default()
        })
        .add_plugins(DefaultPlugins)
        .add_plugin(MainPlugin)
        .run();
}
