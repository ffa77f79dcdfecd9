use bevy::prelude::*;

use crate::geometry::{BlockPrimitives, PackingGroup};
use crate::render::PackingRenderer;
use crate::scene::{
    line_plugin, materials, BlockGroup, BlockVolume, ContainerWire, Polyline, SessionMember,
    StackingMarker,
};

/// Container as gizmo line loops, blocks as translucent cuboid meshes with
/// gizmo X markers.
#[derive(Default)]
pub struct WiresAndBoxesRenderer;

impl PackingRenderer for WiresAndBoxesRenderer {
    fn setup(&self, app: &mut App) {
        app.add_plugins(line_plugin);
    }

    fn spawn_group(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials_res: &mut Assets<StandardMaterial>,
        group: &PackingGroup,
        generation: u64,
    ) -> Entity {
        let member = SessionMember(generation);

        commands
            .spawn((
                Name::new(group.name.clone()),
                Transform::from_translation(group.offset),
                Visibility::Visible,
                member,
            ))
            .with_children(|parent| {
                for wire in &group.wireframe {
                    parent.spawn((
                        ContainerWire,
                        Polyline {
                            points: wire.points.to_vec(),
                        },
                        Transform::default(),
                        Visibility::default(),
                        member,
                    ));
                }

                for (index, block) in group.blocks.iter().enumerate() {
                    parent
                        .spawn((
                            BlockGroup { index },
                            Transform::default(),
                            Visibility::default(),
                            member,
                        ))
                        .with_children(|sub| {
                            spawn_block(sub, meshes, materials_res, block, member);
                        });
                }
            })
            .id()
    }
}

fn spawn_block(
    parent: &mut ChildBuilder,
    meshes: &mut Assets<Mesh>,
    materials_res: &mut Assets<StandardMaterial>,
    block: &BlockPrimitives,
    member: SessionMember,
) {
    let volume = &block.volume;
    parent.spawn((
        BlockVolume,
        Mesh3d(meshes.add(Cuboid::from_size(volume.extents))),
        MeshMaterial3d(materials::block_volume_material(materials_res, volume)),
        Transform::from_translation(volume.center),
        member,
    ));

    for [from, to] in &block.markers {
        parent.spawn((
            StackingMarker,
            Polyline {
                points: vec![*from, *to],
            },
            Transform::default(),
            Visibility::default(),
            member,
        ));
    }
}
