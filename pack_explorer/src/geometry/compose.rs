//! Packing → one group: wireframe, block sub-groups, and the offset that
//! centers the container on the world origin.

use bevy::math::Vec3;

use crate::data::{Packing, PackingResult};
use crate::geometry::{
    block_primitives, container_wireframe, BlockPrimitives, ColorSource, WireLoop,
    LOOPS_PER_CONTAINER,
};

/// Renderable description of one packing. Child coordinates stay in the
/// container frame; only `offset` moves the group.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingGroup {
    pub name: String,
    pub offset: Vec3,
    pub wireframe: [WireLoop; LOOPS_PER_CONTAINER],
    pub blocks: Vec<BlockPrimitives>,
}

pub fn compose_packing(packing: &Packing, colors: &mut dyn ColorSource) -> PackingGroup {
    let container = &packing.container;
    PackingGroup {
        name: container.name.clone(),
        offset: -container.center(),
        wireframe: container_wireframe(container),
        blocks: packing
            .packed_blocks
            .iter()
            .map(|block| block_primitives(block, colors))
            .collect(),
    }
}

/// One group per packing, in result order, empty packings included.
pub fn compose_result(result: &PackingResult, colors: &mut dyn ColorSource) -> Vec<PackingGroup> {
    result
        .packings
        .iter()
        .map(|packing| compose_packing(packing, colors))
        .collect()
}
