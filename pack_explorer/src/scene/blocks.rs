//! Scene components for packed containers and blocks, plus the persistent backdrop.

use bevy::prelude::*;

/// Root of one displayed packing. Its transform carries the centering offset.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackingRoot {
    pub index: usize,
}

/// One of the four wireframe loops of a container.
#[derive(Component)]
pub struct ContainerWire;

/// Sub-group holding everything drawn for one packed block.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockGroup {
    pub index: usize,
}

/// Translucent solid of a packed block.
#[derive(Component)]
pub struct BlockVolume;

/// One diagonal of the X drawn on a non-stackable block's top face.
#[derive(Component)]
pub struct StackingMarker;

/// Window-wide camera that only clears, so the UI has a clean surface
/// while no container is displayed.
#[derive(Component)]
pub struct Backdrop;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Backdrop,
        Camera2d,
        Camera {
            order: -1,
            clear_color: ClearColorConfig::Custom(Color::WHITE),
            ..default()
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_scene_spawns_only_the_backdrop() {
        let mut app = App::new();
        app.add_systems(Startup, setup_scene);

        app.update();

        let world = app.world_mut();
        let backdrop_count = world.query::<&Backdrop>().iter(world).count();
        let camera3d_count = world.query::<&Camera3d>().iter(world).count();

        assert_eq!(backdrop_count, 1);
        assert_eq!(camera3d_count, 0);
    }
}
