use eframe::egui::{self, Ui};
use viewer_overlay::{ClipId, OverlaySettings};

use crate::composition::{ClipContent, Composition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipsAction {
    Select(ClipId),
    VisibilityChanged,
    SettingsChanged,
    SaveSettings,
}

/// Clip list and overlay settings. Returns what the app has to apply.
pub fn show(
    ui: &mut Ui,
    composition: &mut Composition,
    selected: Option<ClipId>,
    settings: &mut OverlaySettings,
) -> Vec<ClipsAction> {
    let mut actions = Vec::new();

    ui.heading("Clips");
    for clip in &mut composition.clips {
        ui.horizontal(|ui| {
            if ui.checkbox(&mut clip.enabled, "").changed() {
                actions.push(ClipsAction::VisibilityChanged);
            }
            if ui
                .selectable_label(selected == Some(clip.id), &clip.name)
                .clicked()
            {
                actions.push(ClipsAction::Select(clip.id));
            }
            let kind = match clip.content {
                ClipContent::Video(_) => "video",
                ClipContent::Title(_) => "title",
            };
            ui.weak(kind);
        });
    }

    ui.separator();
    if settings_ui(ui, settings) {
        actions.push(ClipsAction::SettingsChanged);
    }
    if ui.button("Save settings").clicked() {
        actions.push(ClipsAction::SaveSettings);
    }
    actions
}

/// Returns whether any value changed.
pub fn settings_ui(ui: &mut Ui, settings: &mut OverlaySettings) -> bool {
    let mut changed = false;
    ui.heading("Overlay settings");
    egui::Grid::new("overlay_settings")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Handle radius");
            changed |= ui
                .add(egui::Slider::new(&mut settings.reference_radius, 5.0..=40.0))
                .changed();
            ui.end_row();

            ui.label("Minimal radius");
            changed |= ui
                .add(egui::Slider::new(&mut settings.minimal_radius, 1.0..=20.0))
                .changed();
            ui.end_row();

            ui.label("Glow");
            changed |= ui
                .add(egui::Slider::new(&mut settings.glow, 0.0..=1.0))
                .changed();
            ui.end_row();

            ui.label("Outline width");
            changed |= ui
                .add(egui::Slider::new(&mut settings.outline_width, 0.0..=32.0))
                .changed();
            ui.end_row();
        });
    changed
}
