//! Pack explorer — interactive 3D view of bin-packing results.
//!
//! Library root: result model and loading, pure geometry, ECS scene, UI and SDK builder.

mod camera;
pub mod config;
pub mod data;
pub mod geometry;
pub mod render;
pub mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::OrbitCamera;
pub use data::{parse_result, read_result, Block, Container, LoadError, Packing, PackingResult};
pub use ui::PackingStats;
