//! Diagnostics capture: run a bounded number of frames, save the final
//! render to disk, exit. Lets the scene be eyeballed from a CI log.

use std::path::Path;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, ScreenshotCaptured, save_to_disk};

/// Frames the render pipeline needs before the first meaningful capture.
/// Pipelined rendering takes several frames for the render world to catch
/// up with shader compilation.
const RENDER_WARMUP_FRAMES: u32 = 10;

/// Extra frames allowed for the screenshot to land before a forced exit.
const CAPTURE_GRACE_FRAMES: u32 = 10;

const CAPTURE_PATH: &str = "output/exit_frame.png";

/// State for a bounded capture run. Present only when `--capture` was given.
#[derive(Resource, Debug)]
pub struct CaptureSettings {
    frames_after_warmup: u32,
    frame_count: u32,
    triggered: bool,
}

impl CaptureSettings {
    pub fn new(frames_after_warmup: u32) -> Self {
        Self {
            frames_after_warmup,
            frame_count: 0,
            triggered: false,
        }
    }

    /// Total frames before the capture fires: warmup plus the requested run.
    fn total_frames(&self) -> u32 {
        RENDER_WARMUP_FRAMES + self.frames_after_warmup
    }
}

/// Counts frames, fires the screenshot on the last one, and force-exits if
/// the capture never completes.
pub fn count_frames(
    mut commands: Commands,
    mut capture: ResMut<CaptureSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    capture.frame_count += 1;
    debug!(
        "capture frame {}/{}",
        capture.frame_count,
        capture.total_frames()
    );

    if capture.frame_count >= capture.total_frames() && !capture.triggered {
        capture.triggered = true;

        if let Some(dir) = Path::new(CAPTURE_PATH).parent() {
            if !dir.exists() {
                if let Err(err) = std::fs::create_dir_all(dir) {
                    error!("creating capture directory {}: {err}", dir.display());
                }
            }
        }

        info!("capturing final frame to {CAPTURE_PATH}");
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(CAPTURE_PATH.to_string()))
            .observe(
                |_captured: On<ScreenshotCaptured>, mut exit: MessageWriter<AppExit>| {
                    info!("capture written, exiting");
                    exit.write(AppExit::Success);
                },
            );
    }

    if capture.frame_count > capture.total_frames() + CAPTURE_GRACE_FRAMES {
        warn!("capture timed out, exiting without a frame");
        exit.write(AppExit::Success);
    }
}

pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            count_frames.run_if(resource_exists::<CaptureSettings>),
        );
    }
}
