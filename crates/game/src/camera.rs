//! Camera that trails the player ball.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use kickabout_core::follow::{FollowParams, approach, goal_position};

use crate::player::Player;
use crate::scene::SceneState;

/// Follow behavior attached to the scene camera.
#[derive(Component, Debug, Clone)]
pub struct FollowCam {
    pub params: FollowParams,
}

impl FollowCam {
    pub fn new(params: FollowParams) -> Self {
        Self { params }
    }
}

/// Moves each follow camera toward its goal behind the player and re-aims
/// it at the player.
pub fn follow_player(
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<(&mut Transform, &FollowCam), Without<Player>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let target = player.translation;

    for (mut transform, follow) in &mut cameras {
        let goal = goal_position(target, &follow.params);
        transform.translation = approach(transform.translation, goal, &follow.params);
        transform.look_at(target, Vec3::Y);
    }
}

pub struct FollowCamPlugin;

impl Plugin for FollowCamPlugin {
    fn build(&self, app: &mut App) {
        // After physics writeback, so the camera tracks the frame's settled
        // transform.
        app.add_systems(
            PostUpdate,
            follow_player
                .after(PhysicsSet::Writeback)
                .run_if(in_state(SceneState::Running)),
        );
    }
}
