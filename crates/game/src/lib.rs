//! kickabout: a rigid-body playground scene on Bevy and Rapier.
//!
//! Two textured balls drop onto a ground plane inside a sky cube; one ball
//! is shoved around with fixed per-frame keyboard displacements while a
//! camera trails it. Rendering, scene graph, asset loading, input delivery
//! and the simulation itself all come from the engine stack — this crate
//! only declares the scene and wires the per-frame systems.

pub mod camera;
pub mod capture;
pub mod config;
pub mod player;
pub mod scene;

// Curated re-exports
pub use camera::{FollowCam, FollowCamPlugin};
pub use capture::{CapturePlugin, CaptureSettings};
pub use config::SceneConfig;
pub use player::{Player, PlayerPlugin};
pub use scene::{ScenePlugin, SceneState, SceneTextures};
