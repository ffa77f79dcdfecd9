//! Auto-screenshot mode: once a container is on screen, wait a few frames,
//! capture the window and exit.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::scene::view::{ViewSession, ViewState};

/// Frames to keep running after the capture so the readback can land on disk.
const SETTLE_FRAMES: u32 = 5;

#[derive(Resource)]
pub struct ScreenshotMode {
    pub path: PathBuf,
    pub frames_remaining: u32,
    pub captured: bool,
    exit_countdown: u32,
}

impl ScreenshotMode {
    pub fn new(path: PathBuf, delay_frames: u32) -> Self {
        Self {
            path,
            frames_remaining: delay_frames,
            captured: false,
            exit_countdown: SETTLE_FRAMES,
        }
    }
}

pub fn auto_screenshot_system(
    mut commands: Commands,
    mut mode: ResMut<ScreenshotMode>,
    session: Res<ViewSession>,
    mut exit: EventWriter<AppExit>,
) {
    if mode.captured {
        if mode.exit_countdown == 0 {
            exit.send(AppExit::Success);
        } else {
            mode.exit_countdown -= 1;
        }
        return;
    }

    if session.state() == ViewState::Empty {
        return;
    }

    if mode.frames_remaining > 0 {
        mode.frames_remaining -= 1;
        return;
    }

    let path = mode.path.clone();
    tracing::info!(path = %path.display(), "capturing screenshot");
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
    mode.captured = true;
}

pub fn screenshot_plugin(app: &mut App) {
    app.add_systems(Update, auto_screenshot_system);
}
