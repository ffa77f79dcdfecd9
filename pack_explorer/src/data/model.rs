// Packing result document as written by the upstream solver.
// Field names follow the JSON file; optional producer extras default to None.

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Top-level result file: every container the solver used, in solver order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    pub packings: Vec<Packing>,
    #[serde(default)]
    pub unpacked_blocks: Vec<UnpackedBlock>,
}

/// One container and the blocks placed inside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Packing {
    pub container: Container,
    pub packed_blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub depth: f32,
    pub height: f32,
    pub width: f32,
    #[serde(default)]
    pub weight_capacity: Option<f32>,
}

/// A placed block. `back`/`bottom`/`left` locate its minimum corner
/// inside the container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub back: f32,
    pub bottom: f32,
    pub left: f32,
    pub depth: f32,
    pub height: f32,
    pub width: f32,
    pub stackable: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<f32>,
}

/// A block the solver could not place. It has a shape but no position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnpackedBlock {
    pub depth: f32,
    pub height: f32,
    pub width: f32,
    pub stackable: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<f32>,
}

/// Entry of the container selector: label shown to the user and the
/// index of the packing inside `PackingResult::packings`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub label: String,
    pub index: usize,
}

impl Container {
    /// Extents as (depth, height, width) on (x, y, z).
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.depth, self.height, self.width)
    }

    pub fn center(&self) -> Vec3 {
        self.size() / 2.0
    }

    pub fn volume(&self) -> f32 {
        self.depth * self.height * self.width
    }
}

impl Block {
    /// Minimum corner as (back, bottom, left) on (x, y, z).
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.back, self.bottom, self.left)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.depth, self.height, self.width)
    }

    pub fn max_corner(&self) -> Vec3 {
        self.min_corner() + self.size()
    }

    pub fn center(&self) -> Vec3 {
        self.min_corner() + self.size() / 2.0
    }

    pub fn volume(&self) -> f32 {
        self.depth * self.height * self.width
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("block")
    }
}

impl Packing {
    pub fn is_empty(&self) -> bool {
        self.packed_blocks.is_empty()
    }

    /// Indices of blocks that stick out of the container or start at a
    /// negative offset. The viewer renders them anyway. Rounding in
    /// `offset + extent` is tolerated up to a relative f32 epsilon.
    pub fn out_of_bounds_blocks(&self) -> Vec<usize> {
        let size = self.container.size();
        let slack = f32::EPSILON * 4.0 * size.max(Vec3::ONE);
        let limit = size + slack;
        self.packed_blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| {
                let min = block.min_corner();
                let max = block.max_corner();
                min.cmplt(-slack).any() || max.cmpgt(limit).any()
            })
            .map(|(i, _)| i)
            .collect()
    }
}

impl PackingResult {
    /// One option per packing that holds at least one block, in result order.
    pub fn selector_options(&self) -> Vec<SelectorOption> {
        self.packings
            .iter()
            .enumerate()
            .filter(|(_, packing)| !packing.is_empty())
            .map(|(index, packing)| SelectorOption {
                label: packing.container.name.clone(),
                index,
            })
            .collect()
    }
}
