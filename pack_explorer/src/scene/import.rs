//! Import pipeline inside the ECS: start a file read, pick up its outcome,
//! compose every packing and replace the loaded result.

use std::path::PathBuf;

use bevy::prelude::*;

use crate::data::{ImportChannel, Packing, PackingResult, SelectorOption};
use crate::geometry::{compose_result, PackingGroup};
use crate::render::ColorSourceResource;
use crate::scene::view::{apply_selection, SelectContainer, ViewSession};

/// The result currently offered in the selector. Replaced as a whole on
/// every successful import.
#[derive(Resource, Default, Debug)]
pub struct LoadedResult {
    pub result: Option<PackingResult>,
    /// One group per packing, same order as `result.packings`.
    pub groups: Vec<PackingGroup>,
    pub options: Vec<SelectorOption>,
}

impl LoadedResult {
    pub fn replace(&mut self, result: PackingResult, groups: Vec<PackingGroup>) {
        self.options = result.selector_options();
        self.groups = groups;
        self.result = Some(result);
    }

    pub fn packing(&self, index: usize) -> Option<&Packing> {
        self.result.as_ref()?.packings.get(index)
    }
}

#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub enum ImportStatus {
    #[default]
    Idle,
    Loading(PathBuf),
    Loaded {
        path: PathBuf,
        packings: usize,
    },
    Failed {
        path: PathBuf,
        message: String,
    },
}

/// Container to display as soon as the next import succeeds.
#[derive(Resource, Default, Debug)]
pub struct PendingSelection(pub Option<usize>);

/// File imported at startup, if configured.
#[derive(Resource, Default, Debug)]
pub struct StartupImport(pub Option<PathBuf>);

pub fn import_plugin(app: &mut App) {
    app.init_resource::<ImportChannel>()
        .init_resource::<ImportStatus>()
        .init_resource::<LoadedResult>()
        .init_resource::<PendingSelection>()
        .init_resource::<StartupImport>()
        .add_systems(Startup, start_startup_import)
        .add_systems(Update, poll_imports.before(apply_selection));
}

/// Kick off reading `path`. Any import still in flight is superseded.
pub fn request_import(channel: &mut ImportChannel, status: &mut ImportStatus, path: PathBuf) {
    tracing::info!(path = %path.display(), "importing packing result");
    channel.start(path.clone());
    *status = ImportStatus::Loading(path);
}

fn start_startup_import(
    startup: Res<StartupImport>,
    mut channel: ResMut<ImportChannel>,
    mut status: ResMut<ImportStatus>,
) {
    if let Some(path) = &startup.0 {
        request_import(&mut channel, &mut status, path.clone());
    }
}

#[allow(clippy::too_many_arguments)]
pub fn poll_imports(
    mut commands: Commands,
    mut channel: ResMut<ImportChannel>,
    mut status: ResMut<ImportStatus>,
    mut loaded: ResMut<LoadedResult>,
    mut session: ResMut<ViewSession>,
    mut colors: ResMut<ColorSourceResource>,
    mut pending: ResMut<PendingSelection>,
    mut select: EventWriter<SelectContainer>,
) {
    let Some(outcome) = channel.try_take() else {
        return;
    };
    let path = outcome.path;

    let result = match outcome.result {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(path = %path.display(), "import failed: {err}");
            *status = ImportStatus::Failed {
                path,
                message: err.to_string(),
            };
            pending.0 = None;
            return;
        }
    };

    for (index, packing) in result.packings.iter().enumerate() {
        let outside = packing.out_of_bounds_blocks();
        if !outside.is_empty() {
            tracing::warn!(
                index,
                container = %packing.container.name,
                blocks = ?outside,
                "blocks extend outside their container"
            );
        }
    }

    let groups = compose_result(&result, colors.0.as_mut());
    session.teardown(&mut commands);
    loaded.replace(result, groups);

    tracing::info!(
        path = %path.display(),
        packings = loaded.groups.len(),
        selectable = loaded.options.len(),
        "packing result imported"
    );
    *status = ImportStatus::Loaded {
        path,
        packings: loaded.groups.len(),
    };

    if let Some(index) = pending.0.take() {
        select.send(SelectContainer(index));
    }
}
