mod controls;
mod hud;

pub use controls::controls_plugin;
pub use hud::{hud_plugin, PackingStats};

use bevy_egui::egui;

fn panel_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_premultiplied(245, 245, 248, 235))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(200, 200, 210)))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
}

fn apply_panel_style(ui: &mut egui::Ui) {
    ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
    ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(30, 30, 40));
}
