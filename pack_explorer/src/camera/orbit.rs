//! OrbitCamera component and system: left drag orbits, right drag pans, wheel zooms.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};

use crate::scene::{RenderLoop, ViewSession};

const ROTATE_SPEED: f32 = 0.005;
const PAN_SPEED: f32 = 0.0015;
const ZOOM_SPEED: f32 = 0.1;
const PIXELS_PER_LINE: f32 = 40.0;
const MAX_PITCH: f32 = 1.54;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 10_000.0;

/// Spherical camera placement around `target`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Rotation about +Y; zero looks down -Z.
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// Camera sitting at `offset` from the origin, looking at it.
    pub fn from_offset(offset: Vec3) -> Self {
        let distance = offset.length().max(MIN_DISTANCE);
        Self {
            target: Vec3::ZERO,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Positive `lines` moves closer.
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance * (1.0 - lines * ZOOM_SPEED)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Drag the target in the view plane; speed scales with distance.
    pub fn pan(&mut self, delta: Vec2) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.target += (-right * delta.x + up * delta.y) * self.distance * PAN_SPEED;
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut contexts: EguiContexts,
    session: Res<ViewSession>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform, &RenderLoop)>,
) {
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }

    let scroll_lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    for (mut orbit, mut transform, render_loop) in &mut cameras {
        if !session.is_live(render_loop.generation) {
            continue;
        }
        if buttons.pressed(MouseButton::Left) {
            orbit.rotate(motion.delta);
        }
        if buttons.pressed(MouseButton::Right) {
            orbit.pan(motion.delta);
        }
        if scroll_lines != 0.0 {
            orbit.zoom(scroll_lines);
        }
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-3, "{a} != {b}");
    }

    #[test]
    fn from_offset_places_eye_at_offset() {
        for offset in [
            Vec3::new(15.0, 12.0, 15.0),
            Vec3::new(-3.0, 1.0, 8.0),
            Vec3::new(0.0, 5.0, -5.0),
        ] {
            assert_close(OrbitCamera::from_offset(offset).eye(), offset);
        }
    }

    #[test]
    fn rotation_keeps_distance_to_target() {
        let mut orbit = OrbitCamera::from_offset(Vec3::new(15.0, 12.0, 15.0));
        let distance = orbit.distance;

        orbit.rotate(Vec2::new(120.0, -40.0));

        assert!((orbit.eye().distance(orbit.target) - distance).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut orbit = OrbitCamera::from_offset(Vec3::new(0.0, 1.0, 10.0));

        orbit.rotate(Vec2::new(0.0, 100_000.0));

        assert_eq!(orbit.pitch, MAX_PITCH);
    }

    #[test]
    fn zoom_moves_closer_and_respects_minimum() {
        let mut orbit = OrbitCamera::from_offset(Vec3::new(0.0, 0.0, 10.0));

        orbit.zoom(1.0);
        assert!(orbit.distance < 10.0);

        orbit.zoom(1_000.0);
        assert_eq!(orbit.distance, MIN_DISTANCE);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut orbit = OrbitCamera::from_offset(Vec3::new(0.0, 0.0, 10.0));
        let before = orbit.eye() - orbit.target;

        orbit.pan(Vec2::new(50.0, 0.0));

        assert_ne!(orbit.target, Vec3::ZERO);
        assert_close(orbit.eye() - orbit.target, before);
    }
}
