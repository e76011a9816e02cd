//! Engine-agnostic logic for the kickabout scene.
//!
//! The per-frame contracts that matter here (keyboard displacement, follow
//! camera pursuit) are plain math over `glam` vectors, kept free of any
//! engine dependency so they can be tested without a window or a physics
//! pipeline. The `kickabout` crate wires these into Bevy systems.

pub mod follow;
pub mod input;

pub use follow::{FollowParams, approach, goal_position};
pub use input::{InputMap, MotionSteps, MoveAction, frame_displacement};

// Re-export for convenience
pub use glam;
