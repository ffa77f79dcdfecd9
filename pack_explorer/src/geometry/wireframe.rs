//! Container wireframe: four closed rectangular loops tracing the 12 box edges.
//!
//! Axes: x = depth, y = height, z = width. The origin is the container's
//! minimum corner. Two loops share that corner (the `x = 0` and `z = 0`
//! faces); the other two share the opposite corner (`x = depth`, `z = width`).

use bevy::math::Vec3;

use crate::data::Container;

pub const LOOPS_PER_CONTAINER: usize = 4;

/// Closed polyline: the fifth point repeats the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireLoop {
    pub points: [Vec3; 5],
}

impl WireLoop {
    fn through(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self {
            points: [a, b, c, d, a],
        }
    }

    pub fn is_closed(&self) -> bool {
        self.points[0] == self.points[4]
    }
}

pub fn container_wireframe(container: &Container) -> [WireLoop; LOOPS_PER_CONTAINER] {
    let d = Vec3::X * container.depth;
    let h = Vec3::Y * container.height;
    let w = Vec3::Z * container.width;
    let o = Vec3::ZERO;
    let far = d + h + w;

    [
        // near faces, through the origin
        WireLoop::through(o, h, h + w, w),
        WireLoop::through(o, d, d + h, h),
        // far faces, through the opposite corner
        WireLoop::through(far, d + h, d, d + w),
        WireLoop::through(far, d + w, w, h + w),
    ]
}
