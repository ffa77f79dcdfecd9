//! Packed block → translucent box plus, for non-stackable blocks, an X on the top face.

use bevy::color::Color;
use bevy::math::Vec3;

use crate::data::Block;
use crate::geometry::ColorSource;

pub const BLOCK_OPACITY: f32 = 0.8;

/// Solid box in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxVolume {
    pub center: Vec3,
    pub extents: Vec3,
    /// Opaque fill color; `opacity` is applied by the material.
    pub color: Color,
    pub opacity: f32,
}

/// Everything drawn for one block. Rendered as one sub-group.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockPrimitives {
    pub volume: BoxVolume,
    /// Line segments across the top face; empty for stackable blocks.
    pub markers: Vec<[Vec3; 2]>,
}

impl BlockPrimitives {
    pub fn is_marked(&self) -> bool {
        !self.markers.is_empty()
    }
}

pub fn block_primitives(block: &Block, colors: &mut dyn ColorSource) -> BlockPrimitives {
    let volume = BoxVolume {
        center: block.center(),
        extents: block.size(),
        color: colors.next_color(),
        opacity: BLOCK_OPACITY,
    };

    let markers = if block.stackable {
        Vec::new()
    } else {
        top_face_cross(block)
    };

    BlockPrimitives { volume, markers }
}

/// Both diagonals of the face at `bottom + height`.
fn top_face_cross(block: &Block) -> Vec<[Vec3; 2]> {
    let top = block.bottom + block.height;
    let (back, front) = (block.back, block.back + block.depth);
    let (left, right) = (block.left, block.left + block.width);

    vec![
        [Vec3::new(back, top, left), Vec3::new(front, top, right)],
        [Vec3::new(front, top, left), Vec3::new(back, top, right)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FixedColor;

    fn block(position: [f32; 3], size: [f32; 3], stackable: bool) -> Block {
        Block {
            back: position[0],
            bottom: position[1],
            left: position[2],
            depth: size[0],
            height: size[1],
            width: size[2],
            stackable,
            name: None,
            weight: None,
        }
    }

    #[test]
    fn volume_is_centered_on_block_with_block_extents() {
        let mut colors = FixedColor(Color::srgb(0.1, 0.2, 0.3));
        let cases = [
            ([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]),
            ([1.0, 2.0, 3.0], [4.0, 0.0, 6.0]),
            ([0.0, 5.0, 0.0], [0.0, 0.0, 0.0]),
            ([2.5, 0.0, 1.5], [0.5, 3.0, 0.0]),
        ];

        for (position, size) in cases {
            let b = block(position, size, true);
            let prims = block_primitives(&b, &mut colors);

            let expected_center = Vec3::new(
                position[0] + size[0] / 2.0,
                position[1] + size[1] / 2.0,
                position[2] + size[2] / 2.0,
            );
            assert_eq!(prims.volume.center, expected_center);
            assert_eq!(prims.volume.extents, Vec3::from_array(size));
            assert_eq!(prims.volume.opacity, BLOCK_OPACITY);
            assert_eq!(prims.volume.color, Color::srgb(0.1, 0.2, 0.3));
        }
    }

    #[test]
    fn stackable_blocks_have_no_markers() {
        let prims = block_primitives(
            &block([0.0; 3], [1.0; 3], true),
            &mut FixedColor(Color::WHITE),
        );

        assert!(!prims.is_marked());
    }

    #[test]
    fn non_stackable_blocks_get_both_top_diagonals() {
        let b = block([1.0, 2.0, 3.0], [2.0, 4.0, 6.0], false);
        let prims = block_primitives(&b, &mut FixedColor(Color::WHITE));

        assert_eq!(prims.markers.len(), 2);
        let top = 6.0;
        let top_corners = [
            Vec3::new(1.0, top, 3.0),
            Vec3::new(3.0, top, 3.0),
            Vec3::new(1.0, top, 9.0),
            Vec3::new(3.0, top, 9.0),
        ];
        for [a, b] in &prims.markers {
            assert!(top_corners.contains(a) && top_corners.contains(b));
            // diagonal: differs in both horizontal axes
            assert_ne!(a.x, b.x);
            assert_ne!(a.z, b.z);
            // each diagonal crosses the face center
            assert_eq!((*a + *b) / 2.0, Vec3::new(2.0, top, 6.0));
        }
        assert_ne!(prims.markers[0], prims.markers[1]);
    }
}
