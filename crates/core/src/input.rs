//! Pressed-key state and the per-frame displacement it produces.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The five movement actions the scene responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Forward,
    Back,
    Left,
    Right,
    Jump,
}

impl MoveAction {
    pub const ALL: [MoveAction; 5] = [
        MoveAction::Forward,
        MoveAction::Back,
        MoveAction::Left,
        MoveAction::Right,
        MoveAction::Jump,
    ];
}

/// Boolean pressed-state map over the movement actions.
///
/// Mirrors an event-driven key map: key-down sets an entry, key-up clears
/// it, and the motion system reads the map once per frame. No history, no
/// edge detection.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    pressed: [bool; 5],
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed state of one action from a key event.
    pub fn set(&mut self, action: MoveAction, down: bool) {
        self.pressed[action as usize] = down;
    }

    pub fn press(&mut self, action: MoveAction) {
        self.set(action, true);
    }

    pub fn release(&mut self, action: MoveAction) {
        self.set(action, false);
    }

    pub fn is_pressed(&self, action: MoveAction) -> bool {
        self.pressed[action as usize]
    }

    pub fn any_pressed(&self) -> bool {
        self.pressed.iter().any(|p| *p)
    }
}

/// Fixed per-frame displacement steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionSteps {
    /// Distance added along a ground axis for each held directional key.
    pub move_step: f32,
    /// Height added for a held jump key.
    pub jump_step: f32,
}

impl Default for MotionSteps {
    fn default() -> Self {
        Self {
            move_step: 0.5,
            jump_step: 2.0,
        }
    }
}

/// Displacement to add to the player transform for one frame of held input.
///
/// Purely additive: every held action contributes its full step, so diagonal
/// input covers more ground per frame than axis-aligned input. Left adds
/// along +x and Right along -x; the inverted x convention is part of the
/// scene's contract.
pub fn frame_displacement(input: &InputMap, steps: MotionSteps) -> Vec3 {
    let mut delta = Vec3::ZERO;
    if input.is_pressed(MoveAction::Forward) {
        delta.z -= steps.move_step;
    }
    if input.is_pressed(MoveAction::Left) {
        delta.x += steps.move_step;
    }
    if input.is_pressed(MoveAction::Back) {
        delta.z += steps.move_step;
    }
    if input.is_pressed(MoveAction::Right) {
        delta.x -= steps.move_step;
    }
    if input.is_pressed(MoveAction::Jump) {
        delta.y += steps.jump_step;
    }
    delta
}
