use eframe::egui::{self, Visuals};
use log::{info, warn};
use viewer_overlay::{Collaborators, OverlayStack};

use crate::composition::Composition;
use crate::config::{self, PreviewConfig};
use crate::host::{EguiHost, Revision};
use crate::ui::panels::clips::{self, ClipsAction};
use crate::ui::panels::preview::{self, PreviewPanel};

pub struct PreviewApp {
    composition: Composition,
    stack: OverlayStack,
    host: EguiHost,
    revision: Revision,
    preview: PreviewPanel,
    config: PreviewConfig,
}

impl PreviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let config = config::load_config();
        let mut app = Self {
            composition: Composition::demo(),
            stack: OverlayStack::new(config.overlay.clone()),
            host: EguiHost::new(cc.egui_ctx.clone()),
            revision: Revision::default(),
            preview: PreviewPanel::default(),
            config,
        };
        app.refresh_visible();
        app
    }

    fn refresh_visible(&mut self) {
        let enabled = self.composition.enabled_clips();
        let mut collab =
            Collaborators::new(&mut self.composition, &mut self.host, &mut self.revision);
        self.stack.set_current_sources(&enabled, &mut collab);
    }

    fn apply(&mut self, action: ClipsAction) {
        match action {
            ClipsAction::Select(clip) => {
                let mut collab =
                    Collaborators::new(&mut self.composition, &mut self.host, &mut self.revision);
                if let Err(e) = self.stack.select(clip, &mut collab) {
                    warn!("Cannot select clip: {}", e);
                }
            }
            ClipsAction::VisibilityChanged => self.refresh_visible(),
            ClipsAction::SettingsChanged => {
                let mut collab =
                    Collaborators::new(&mut self.composition, &mut self.host, &mut self.revision);
                self.stack.set_settings(self.config.overlay.clone(), &mut collab);
            }
            ClipsAction::SaveSettings => {
                self.config.overlay = self.stack.settings().clone();
                config::save_config(&self.config);
                info!("Overlay settings stored");
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let selected = self.host.selection();
        let actions = egui::SidePanel::left("clips")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                clips::show(ui, &mut self.composition, selected, &mut self.config.overlay)
            })
            .inner;
        for action in actions {
            self.apply(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            preview::show(
                ui,
                &mut self.preview,
                &mut self.composition,
                &mut self.stack,
                &mut self.host,
                &mut self.revision,
            );
        });
    }
}
