//! Pursuit math for a camera trailing a moving target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Follow behavior parameters.
///
/// `rotation_offset` is a yaw around the target in degrees; zero keeps the
/// camera on the +z side. The camera closes in on its goal by a fraction of
/// the remaining distance each frame, so pursuit eases out near the goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FollowParams {
    /// Horizontal distance kept between camera and target.
    pub radius: f32,
    /// Height of the camera above the target.
    pub height_offset: f32,
    /// Yaw offset around the target, in degrees.
    pub rotation_offset: f32,
    /// Fraction of the remaining distance covered per frame.
    pub acceleration: f32,
    /// Upper bound on per-frame camera travel.
    pub max_speed: f32,
}

impl Default for FollowParams {
    fn default() -> Self {
        Self {
            radius: 20.0,
            height_offset: 4.0,
            rotation_offset: 0.0,
            acceleration: 0.05,
            max_speed: 20.0,
        }
    }
}

/// Where the camera wants to be for the given target position.
pub fn goal_position(target: Vec3, params: &FollowParams) -> Vec3 {
    let yaw = params.rotation_offset.to_radians();
    target
        + Vec3::new(
            params.radius * yaw.sin(),
            params.height_offset,
            params.radius * yaw.cos(),
        )
}

/// One frame of camera movement from `position` toward `goal`.
///
/// Travel is `distance * acceleration`, clamped to `max_speed`, and never
/// past the goal itself.
pub fn approach(position: Vec3, goal: Vec3, params: &FollowParams) -> Vec3 {
    let to_goal = goal - position;
    let distance = to_goal.length();
    if distance <= f32::EPSILON {
        return goal;
    }
    let travel = (distance * params.acceleration)
        .min(params.max_speed)
        .min(distance);
    position + to_goal * (travel / distance)
}
