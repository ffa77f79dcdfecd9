//! Renderer traits and default implementations.

mod wires_and_boxes;

use bevy::prelude::*;

use crate::geometry::{ColorSource, PackingGroup};

pub use wires_and_boxes::WiresAndBoxesRenderer;

/// Turns a composed packing group into entities. The returned entity is the
/// group root; despawning it recursively must remove everything spawned here.
pub trait PackingRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}
    fn spawn_group(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        group: &PackingGroup,
        generation: u64,
    ) -> Entity;
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn PackingRenderer>);

impl RendererResource {
    pub fn new(renderer: impl PackingRenderer) -> Self {
        Self(Box::new(renderer))
    }
}

/// Where block fill colors come from when a result is composed.
#[derive(Resource)]
pub struct ColorSourceResource(pub Box<dyn ColorSource>);

impl ColorSourceResource {
    pub fn new(source: impl ColorSource) -> Self {
        Self(Box::new(source))
    }
}
