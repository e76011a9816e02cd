//! Keyboard-driven displacement of the player ball.

use bevy::prelude::*;
use kickabout_core::input::{InputMap, MoveAction, frame_displacement};

use crate::config::SceneConfig;
use crate::scene::SceneState;

/// Marker for the keyboard-driven ball.
#[derive(Component, Debug)]
pub struct Player;

/// Key bindings for the five movement actions.
pub const BINDINGS: [(KeyCode, MoveAction); 5] = [
    (KeyCode::KeyW, MoveAction::Forward),
    (KeyCode::KeyA, MoveAction::Left),
    (KeyCode::KeyS, MoveAction::Back),
    (KeyCode::KeyD, MoveAction::Right),
    (KeyCode::Space, MoveAction::Jump),
];

/// Adds the per-frame displacement for the held keys to the player
/// transform.
///
/// The write lands directly on a dynamic body's transform, overriding the
/// simulation for that frame. No bounds check, no collision awareness, no
/// delta-time scaling.
pub fn apply_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<SceneConfig>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    let mut input = InputMap::new();
    for (key, action) in BINDINGS {
        input.set(action, keyboard.pressed(key));
    }
    if !input.any_pressed() {
        return;
    }

    let delta = frame_displacement(&input, config.controls);
    for mut transform in &mut players {
        transform.translation += delta;
    }
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_movement.run_if(in_state(SceneState::Running)),
        );
    }
}
