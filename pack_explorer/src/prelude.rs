//! Minimal prelude for SDK consumers.

pub use crate::config::{viewer_config, ViewerConfig};
pub use crate::data::{parse_result, read_result, LoadError, PackingResult};
pub use crate::geometry::{ColorSource, FixedColor, PackingGroup, RandomColors};
pub use crate::render::{PackingRenderer, WiresAndBoxesRenderer};
pub use crate::scene::{SelectContainer, ViewSettings};
pub use crate::sdk::PackExplorerBuilder;
