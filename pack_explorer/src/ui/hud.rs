//! HUD overlay: dimensions, block counts and fill of the displayed container.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::data::Packing;
use crate::scene::{LoadedResult, ViewSession, ViewState};
use crate::ui::{apply_panel_style, panel_frame};

/// Summary of one packing, recomputed whenever it is displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingStats {
    pub blocks: usize,
    pub non_stackable: usize,
    pub container_volume: f32,
    pub packed_volume: f32,
    /// Packed volume over container volume; zero for a degenerate container.
    pub fill_ratio: f32,
    /// Sum of block weights, when the producer supplied any.
    pub total_weight: Option<f32>,
}

impl PackingStats {
    pub fn of(packing: &Packing) -> Self {
        let blocks = &packing.packed_blocks;
        let container_volume = packing.container.volume();
        let packed_volume: f32 = blocks.iter().map(|b| b.volume()).sum();
        let fill_ratio = if container_volume > 0.0 {
            packed_volume / container_volume
        } else {
            0.0
        };
        let total_weight = blocks
            .iter()
            .filter_map(|b| b.weight)
            .fold(None, |acc: Option<f32>, w| Some(acc.unwrap_or(0.0) + w));

        Self {
            blocks: blocks.len(),
            non_stackable: blocks.iter().filter(|b| !b.stackable).count(),
            container_volume,
            packed_volume,
            fill_ratio,
            total_weight,
        }
    }
}

pub fn hud_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    loaded: Res<LoadedResult>,
    session: Res<ViewSession>,
) {
    let ViewState::Displaying(index) = session.state() else {
        return;
    };
    let Some(packing) = loaded.packing(index) else {
        return;
    };
    let stats = PackingStats::of(packing);
    let container = &packing.container;
    let unpacked = loaded
        .result
        .as_ref()
        .map_or(0, |result| result.unpacked_blocks.len());

    egui::Window::new("Container")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(panel_frame())
        .show(contexts.ctx_mut(), |ui| {
            apply_panel_style(ui);

            ui.label(
                egui::RichText::new(&container.name)
                    .size(16.0)
                    .color(egui::Color32::from_rgb(20, 90, 160)),
            );
            ui.add_space(4.0);

            ui.label(format!(
                "D×H×W  {}×{}×{}",
                container.depth, container.height, container.width
            ));
            ui.label(format!("Blocks  {}", stats.blocks));
            ui.label(format!("Non-stackable  {}", stats.non_stackable));
            ui.add(
                egui::ProgressBar::new(stats.fill_ratio.clamp(0.0, 1.0))
                    .text(format!("{:.1}% filled", stats.fill_ratio * 100.0)),
            );

            if let Some(weight) = stats.total_weight {
                match container.weight_capacity {
                    Some(capacity) => ui.label(format!("Weight  {weight:.1}/{capacity:.1}")),
                    None => ui.label(format!("Weight  {weight:.1}")),
                };
            }

            if unpacked > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Unpacked blocks  {unpacked}"))
                        .color(egui::Color32::from_rgb(190, 60, 40)),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Block, Container};

    fn block(size: f32, stackable: bool, weight: Option<f32>) -> Block {
        Block {
            back: 0.0,
            bottom: 0.0,
            left: 0.0,
            depth: size,
            height: size,
            width: size,
            stackable,
            name: None,
            weight,
        }
    }

    fn packing(size: f32, blocks: Vec<Block>) -> Packing {
        Packing {
            container: Container {
                name: "c".into(),
                depth: size,
                height: size,
                width: size,
                weight_capacity: None,
            },
            packed_blocks: blocks,
        }
    }

    #[test]
    fn stats_count_blocks_and_fill() {
        let stats = PackingStats::of(&packing(
            4.0,
            vec![block(2.0, false, None), block(2.0, true, None)],
        ));

        assert_eq!(stats.blocks, 2);
        assert_eq!(stats.non_stackable, 1);
        assert_eq!(stats.container_volume, 64.0);
        assert_eq!(stats.packed_volume, 16.0);
        assert_eq!(stats.fill_ratio, 0.25);
        assert_eq!(stats.total_weight, None);
    }

    #[test]
    fn stats_sum_known_weights() {
        let stats = PackingStats::of(&packing(
            4.0,
            vec![block(1.0, true, Some(2.5)), block(1.0, true, None), block(1.0, true, Some(1.5))],
        ));

        assert_eq!(stats.total_weight, Some(4.0));
    }

    #[test]
    fn degenerate_container_has_zero_fill() {
        let stats = PackingStats::of(&packing(0.0, vec![]));

        assert_eq!(stats.fill_ratio, 0.0);
    }
}
