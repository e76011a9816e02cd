//! Binary entry point: CLI, configuration, engine wiring.

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use clap::Parser;

use kickabout::camera::FollowCamPlugin;
use kickabout::capture::{CapturePlugin, CaptureSettings};
use kickabout::config::SceneConfig;
use kickabout::player::PlayerPlugin;
use kickabout::scene::ScenePlugin;

/// Kickabout: textured balls on a ground plane, one of them yours.
#[derive(Parser, Debug)]
#[command(name = "kickabout")]
#[command(about = "Rigid-body playground scene built on Bevy and Rapier")]
struct Args {
    /// Path to a TOML scene file; the built-in scene is used when omitted.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Capture mode: run N frames after render warmup, save the final frame
    /// to output/exit_frame.png and exit. Also enables debug logging and
    /// collider visualization.
    #[arg(long, num_args = 0..=1, default_missing_value = "1")]
    capture: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SceneConfig::from_file(path)?,
        None => SceneConfig::default(),
    };

    let log_level = if args.capture.is_some() {
        bevy::log::Level::DEBUG
    } else {
        bevy::log::Level::INFO
    };

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(LogPlugin {
            level: log_level,
            filter: "wgpu=error,naga=warn".to_string(),
            ..default()
        }),
        RapierPhysicsPlugin::<NoUserData>::default(),
        RapierDebugRenderPlugin {
            enabled: args.capture.is_some(),
            ..default()
        },
    ));

    app.insert_resource(config);
    if let Some(frames) = args.capture {
        app.insert_resource(CaptureSettings::new(frames));
    }

    app.add_plugins((ScenePlugin, PlayerPlugin, FollowCamPlugin, CapturePlugin));

    app.run();
    Ok(())
}
