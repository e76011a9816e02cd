//! Scene description: TOML-deserialized with defaults matching the
//! canonical playground scene.

use std::fs;
use std::path::Path;

use bevy::prelude::Resource;
use kickabout_core::follow::FollowParams;
use kickabout_core::input::MotionSteps;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a scene file.
#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("reading scene file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing scene file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the scene spawns, with the literal values it is spawned with.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the canonical scene. Unknown keys are rejected rather than ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub light: LightConfig,
    pub skybox: SkyboxConfig,
    #[serde(default = "BallConfig::player")]
    pub player_ball: BallConfig,
    #[serde(default = "BallConfig::prop")]
    pub prop_ball: BallConfig,
    pub ground: GroundConfig,
    pub controls: MotionSteps,
    pub camera: FollowParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            light: LightConfig::default(),
            skybox: SkyboxConfig::default(),
            player_ball: BallConfig::player(),
            prop_ball: BallConfig::prop(),
            ground: GroundConfig::default(),
            controls: MotionSteps::default(),
            camera: FollowParams::default(),
        }
    }
}

impl SceneConfig {
    /// Load a scene file. No fallback: any error goes back to the caller.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SceneFileError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SceneFileError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| SceneFileError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Hemispheric-style scene lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    /// Overall intensity in [0, 1]; scales both the ambient base and the
    /// directional fill.
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self { intensity: 0.7 }
    }
}

/// The sky cube wrapped around the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkyboxConfig {
    /// Edge length of the cube.
    pub size: f32,
    pub texture: String,
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            size: 150.0,
            texture: "textures/sky.png".into(),
        }
    }
}

/// One simulated ball: mesh, texture and rigid-body descriptor.
///
/// The body values are set once at spawn and never written again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BallConfig {
    pub radius: f32,
    /// Latitudinal segment count of the UV sphere mesh.
    pub segments: u32,
    pub position: [f32; 3],
    pub mass: f32,
    pub restitution: f32,
    pub friction: f32,
    pub texture: String,
}

impl BallConfig {
    /// The keyboard-driven ball. Low-poly, so its spin reads on screen.
    pub fn player() -> Self {
        Self {
            radius: 1.5,
            segments: 2,
            position: [0.0, 2.0, 10.0],
            mass: 5.0,
            restitution: 0.8,
            friction: 0.5,
            texture: "textures/ball_a.png".into(),
        }
    }

    /// The inert prop ball; physics alone moves it.
    pub fn prop() -> Self {
        Self {
            radius: 1.5,
            segments: 32,
            position: [5.0, 2.0, 0.0],
            mass: 0.2,
            restitution: 0.5,
            friction: 0.2,
            texture: "textures/ball_b.png".into(),
        }
    }
}

/// The ground plane and its fixed body.
///
/// No friction field: the ground inherits the physics plugin default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroundConfig {
    pub width: f32,
    pub depth: f32,
    pub restitution: f32,
    pub texture: String,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            depth: 60.0,
            restitution: 0.6,
            texture: "textures/grass.png".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_canonical_scene() {
        let config = SceneConfig::default();

        assert_eq!(config.light.intensity, 0.7);
        assert_eq!(config.skybox.size, 150.0);

        assert_eq!(config.player_ball.radius, 1.5);
        assert_eq!(config.player_ball.position, [0.0, 2.0, 10.0]);
        assert_eq!(config.player_ball.mass, 5.0);
        assert_eq!(config.player_ball.restitution, 0.8);
        assert_eq!(config.player_ball.friction, 0.5);

        assert_eq!(config.prop_ball.position, [5.0, 2.0, 0.0]);
        assert_eq!(config.prop_ball.mass, 0.2);
        assert_eq!(config.prop_ball.restitution, 0.5);
        assert_eq!(config.prop_ball.friction, 0.2);

        assert_eq!(config.ground.width, 60.0);
        assert_eq!(config.ground.depth, 60.0);
        assert_eq!(config.ground.restitution, 0.6);

        assert_eq!(config.controls.move_step, 0.5);
        assert_eq!(config.controls.jump_step, 2.0);

        assert_eq!(config.camera.radius, 20.0);
    }

    #[test]
    fn empty_file_is_the_default_scene() {
        let config: SceneConfig = toml::from_str("").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn fields_override_individually() {
        let config: SceneConfig = toml::from_str(
            r#"
            [light]
            intensity = 0.3

            [controls]
            move_step = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.light.intensity, 0.3);
        assert_eq!(config.controls.move_step, 1.0);
        assert_eq!(config.controls.jump_step, 2.0);
        assert_eq!(config.player_ball, BallConfig::player());
    }

    #[test]
    fn ball_tables_must_be_complete() {
        // Ball sections have no per-field defaults (the two balls default
        // differently), so a partial table is an error.
        let result: Result<SceneConfig, _> = toml::from_str(
            r#"
            [player_ball]
            mass = 9.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<SceneConfig, _> = toml::from_str("gravity = 3.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = SceneConfig::from_file("no/such/scene.toml").unwrap_err();
        assert!(matches!(err, SceneFileError::Read { .. }));
        assert!(err.to_string().contains("no/such/scene.toml"));
    }

    #[test]
    fn bundled_scene_file_matches_the_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes/playground.toml");
        let config = SceneConfig::from_file(path).unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = SceneConfig::default();
        config.prop_ball.mass = 1.25;
        config.camera.rotation_offset = 45.0;
        let raw = toml::to_string(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
