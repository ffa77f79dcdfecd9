//! Controls window: import button with status line, and the container selector.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::data::ImportChannel;
use crate::scene::{
    request_import, ImportStatus, LoadedResult, SelectContainer, ViewSession, ViewState,
};
use crate::ui::{apply_panel_style, panel_frame};

const NO_SELECTION: &str = "Select a container";

pub fn controls_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_systems(Update, controls_ui_system);
}

fn controls_ui_system(
    mut contexts: EguiContexts,
    mut channel: ResMut<ImportChannel>,
    mut status: ResMut<ImportStatus>,
    loaded: Res<LoadedResult>,
    session: Res<ViewSession>,
    mut select: EventWriter<SelectContainer>,
) {
    egui::Window::new("Packing Result")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);

            ui.horizontal(|ui| {
                if ui.button("Import").clicked() {
                    pick_and_import(&mut channel, &mut status);
                }
                if channel.is_pending() {
                    ui.spinner();
                }
                ui.label(status_text(&status));
            });
            ui.add_space(6.0);

            if loaded.options.is_empty() {
                return;
            }

            let displayed = match session.state() {
                ViewState::Displaying(index) => Some(index),
                ViewState::Empty => None,
            };
            let selected_text = displayed
                .and_then(|index| loaded.options.iter().find(|o| o.index == index))
                .map_or(NO_SELECTION, |option| option.label.as_str());

            egui::ComboBox::from_id_salt("container")
                .selected_text(selected_text)
                .width(200.0)
                .show_ui(ui, |ui| {
                    for option in &loaded.options {
                        let is_current = displayed == Some(option.index);
                        if ui.selectable_label(is_current, option.label.as_str()).clicked() {
                            select.send(SelectContainer(option.index));
                        }
                    }
                });
        });
}

fn pick_and_import(channel: &mut ImportChannel, status: &mut ImportStatus) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Open packing result")
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        tracing::info!("import cancelled: no file selected");
        return;
    };
    request_import(channel, status, path);
}

fn status_text(status: &ImportStatus) -> String {
    match status {
        ImportStatus::Idle => "No result loaded".to_string(),
        ImportStatus::Loading(path) => format!("Loading {}…", file_name(path)),
        ImportStatus::Loaded { path, packings } => {
            format!("{} ({packings} containers)", file_name(path))
        }
        ImportStatus::Failed { path, message } => {
            format!("Failed to load {}: {message}", file_name(path))
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn status_text_names_the_file_only() {
        let status = ImportStatus::Loaded {
            path: PathBuf::from("/tmp/results/run-3.json"),
            packings: 4,
        };

        assert_eq!(status_text(&status), "run-3.json (4 containers)");
    }

    #[test]
    fn failed_status_carries_the_error() {
        let status = ImportStatus::Failed {
            path: PathBuf::from("bad.json"),
            message: "invalid packing result: EOF".into(),
        };

        assert_eq!(
            status_text(&status),
            "Failed to load bad.json: invalid packing result: EOF"
        );
    }
}
