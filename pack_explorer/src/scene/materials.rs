//! Shared material helpers for block volumes.

use bevy::color::Alpha;
use bevy::prelude::*;

use crate::geometry::BoxVolume;

pub fn block_volume_material(
    materials: &mut Assets<StandardMaterial>,
    volume: &BoxVolume,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: volume.color.with_alpha(volume.opacity),
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}
