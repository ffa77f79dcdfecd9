pub(crate) mod blocks;
pub(crate) mod import;
pub(crate) mod lines;
pub(crate) mod materials;
pub(crate) mod screenshot;
pub(crate) mod view;

pub use blocks::{
    setup_scene, Backdrop, BlockGroup, BlockVolume, ContainerWire, PackingRoot, StackingMarker,
};
pub use import::{
    import_plugin, poll_imports, request_import, ImportStatus, LoadedResult, PendingSelection,
    StartupImport,
};
pub use lines::{line_plugin, Polyline, LINE_COLOR, LINE_WIDTH};
pub use screenshot::{screenshot_plugin, ScreenshotMode};
pub use view::{
    apply_selection, view_plugin, LightSettings, RenderLoop, SelectContainer, SessionMember,
    ViewSession, ViewSettings, ViewState,
};
