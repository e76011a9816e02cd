//! Per-frame displacement contract of the player ball, driven through a
//! headless app with the real movement system.

use bevy::input::ButtonInput;
use bevy::prelude::*;
use kickabout::config::SceneConfig;
use kickabout::player::{Player, apply_movement};

const START: Vec3 = Vec3::new(0.0, 2.0, 10.0);

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SceneConfig::default());
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_systems(Update, apply_movement);
    app.world_mut().spawn((Transform::from_translation(START), Player));
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn player_position(app: &mut App) -> Vec3 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<Player>>();
    query.single(app.world()).unwrap().translation
}

#[test]
fn each_directional_key_steps_its_axis() {
    let cases = [
        (KeyCode::KeyW, Vec3::new(0.0, 0.0, -0.5)),
        (KeyCode::KeyS, Vec3::new(0.0, 0.0, 0.5)),
        (KeyCode::KeyA, Vec3::new(0.5, 0.0, 0.0)),
        (KeyCode::KeyD, Vec3::new(-0.5, 0.0, 0.0)),
    ];
    for (key, delta) in cases {
        let mut app = test_app();
        press(&mut app, key);
        app.update();
        assert_eq!(player_position(&mut app), START + delta, "key {key:?}");
    }
}

#[test]
fn space_hops_the_ball_up() {
    let mut app = test_app();
    press(&mut app, KeyCode::Space);
    app.update();
    assert_eq!(player_position(&mut app), START + Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn held_key_steps_every_frame() {
    let mut app = test_app();
    press(&mut app, KeyCode::KeyW);
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(player_position(&mut app), START + Vec3::new(0.0, 0.0, -2.0));
}

#[test]
fn no_input_leaves_the_ball_alone() {
    let mut app = test_app();
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(player_position(&mut app), START);
}

#[test]
fn releasing_a_key_stops_the_displacement() {
    let mut app = test_app();
    press(&mut app, KeyCode::KeyD);
    app.update();
    release(&mut app, KeyCode::KeyD);
    app.update();
    app.update();
    assert_eq!(player_position(&mut app), START + Vec3::new(-0.5, 0.0, 0.0));
}

#[test]
fn diagonal_input_sums_both_axes() {
    let mut app = test_app();
    press(&mut app, KeyCode::KeyW);
    press(&mut app, KeyCode::KeyA);
    app.update();
    assert_eq!(player_position(&mut app), START + Vec3::new(0.5, 0.0, -0.5));
}

#[test]
fn configured_steps_apply() {
    let mut app = test_app();
    {
        let mut config = app.world_mut().resource_mut::<SceneConfig>();
        config.controls.move_step = 2.0;
        config.controls.jump_step = 10.0;
    }
    press(&mut app, KeyCode::KeyS);
    press(&mut app, KeyCode::Space);
    app.update();
    assert_eq!(player_position(&mut app), START + Vec3::new(0.0, 10.0, 2.0));
}
