//! Engine-independent geometry: what to draw for a packing result, in the
//! container's own frame. Nothing here touches the ECS.

mod block;
mod color;
mod compose;
mod wireframe;

pub use block::{block_primitives, BlockPrimitives, BoxVolume, BLOCK_OPACITY};
pub use color::{ColorSource, FixedColor, RandomColors};
pub use compose::{compose_packing, compose_result, PackingGroup};
pub use wireframe::{container_wireframe, WireLoop, LOOPS_PER_CONTAINER};
