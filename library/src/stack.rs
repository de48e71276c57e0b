//! Routes viewport input to the overlays of the clips currently shown.
//!
//! The stack owns one overlay per known clip but only relates to them by
//! [`ClipId`]: the visible list, the selection and the hover target are all
//! ids looked up in the overlay map.

use std::collections::HashMap;

use log::{debug, warn};

use crate::coords::{WindowPoint, WindowSize};
use crate::error::OverlayError;
use crate::handle::HandleRole;
use crate::overlay::{DragKind, Overlay, OverlayEnv, PressOutcome};
use crate::render::DrawList;
use crate::settings::OverlaySettings;
use crate::source::{ClipId, Collaborators, SourceRef, ViewportHost};

/// Interaction state of one overlay as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Unselected,
    Selected,
    HandleDragging(HandleRole),
    BoxDragging,
}

/// Viewport and settings shared by every overlay.
#[derive(Debug, Clone)]
struct Frame {
    viewport: WindowSize,
    settings: OverlaySettings,
}

impl Frame {
    fn env<'a>(&'a self, collab: &'a mut Collaborators<'_>) -> OverlayEnv<'a> {
        OverlayEnv {
            viewport: self.viewport,
            project_size: collab.sources.project_size(),
            settings: &self.settings,
            host: &mut *collab.host,
            commit: &mut *collab.commit,
        }
    }

    /// Run `f` with the overlay of `clip` and its source. Returns `None` when
    /// either is missing; a missing source also drops any drag in progress.
    fn dispatch<R>(
        &self,
        overlays: &mut HashMap<ClipId, Overlay>,
        clip: ClipId,
        collab: &mut Collaborators<'_>,
        f: impl FnOnce(&mut Overlay, SourceRef<'_>, &mut OverlayEnv<'_>) -> R,
    ) -> Option<R> {
        let overlay = overlays.get_mut(&clip)?;
        let project_size = collab.sources.project_size();
        let Some(source) = collab.sources.source_mut(clip) else {
            warn!("Clip {} is no longer part of the composition", clip);
            overlay.abort_drag();
            return None;
        };
        let mut env = OverlayEnv {
            viewport: self.viewport,
            project_size,
            settings: &self.settings,
            host: &mut *collab.host,
            commit: &mut *collab.commit,
        };
        Some(f(overlay, source, &mut env))
    }
}

#[derive(Debug)]
pub struct OverlayStack {
    overlays: HashMap<ClipId, Overlay>,
    visible: Vec<ClipId>,
    selected: Option<ClipId>,
    hovered: Option<ClipId>,
    click_position: Option<WindowPoint>,
    frame: Frame,
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::new(OverlaySettings::default())
    }
}

impl OverlayStack {
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            overlays: HashMap::new(),
            visible: Vec::new(),
            selected: None,
            hovered: None,
            click_position: None,
            frame: Frame {
                viewport: WindowSize::default(),
                settings: settings.sanitized(),
            },
        }
    }

    pub fn selected(&self) -> Option<ClipId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<ClipId> {
        self.hovered
    }

    pub fn visible(&self) -> &[ClipId] {
        &self.visible
    }

    pub fn viewport(&self) -> WindowSize {
        self.frame.viewport
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.frame.settings
    }

    pub fn overlay(&self, clip: ClipId) -> Option<&Overlay> {
        self.overlays.get(&clip)
    }

    pub fn is_dragging(&self) -> bool {
        self.click_position.is_some()
    }

    pub fn state(&self, clip: ClipId) -> Option<OverlayState> {
        let overlay = self.overlays.get(&clip)?;
        let state = match overlay.drag_kind() {
            Some(DragKind::Handle(role)) => OverlayState::HandleDragging(role),
            Some(DragKind::Box) => OverlayState::BoxDragging,
            None if self.selected == Some(clip) => OverlayState::Selected,
            None => OverlayState::Unselected,
        };
        Some(state)
    }

    fn ensure_overlay(
        &mut self,
        clip: ClipId,
        collab: &mut Collaborators<'_>,
    ) -> Result<(), OverlayError> {
        if self.overlays.contains_key(&clip) {
            return Ok(());
        }
        let project_size = collab.sources.project_size();
        let source = collab
            .sources
            .source_mut(clip)
            .ok_or(OverlayError::UnknownSource(clip))?;
        let kind = source.kind();
        let mut env = OverlayEnv {
            viewport: self.frame.viewport,
            project_size,
            settings: &self.frame.settings,
            host: &mut *collab.host,
            commit: &mut *collab.commit,
        };
        let overlay = Overlay::for_source(clip, source, &mut env);
        debug!("Created {:?} overlay for clip {}", kind, clip);
        self.overlays.insert(clip, overlay);
        Ok(())
    }

    fn set_selected(&mut self, clip: Option<ClipId>, host: &mut dyn ViewportHost) {
        if self.selected == clip {
            return;
        }
        if let Some(previous) = self.selected.and_then(|id| self.overlays.get_mut(&id)) {
            previous.abort_drag();
            previous.unhover();
        }
        debug!("Selection changed: {:?} -> {:?}", self.selected, clip);
        self.selected = clip;
        host.selection_changed(clip);
        host.request_redraw();
    }

    /// Make exactly `clips` visible, creating overlays for new ones.
    pub fn set_current_sources(&mut self, clips: &[ClipId], collab: &mut Collaborators<'_>) {
        self.visible.clear();
        for &clip in clips {
            match self.ensure_overlay(clip, collab) {
                Ok(()) => self.visible.push(clip),
                Err(err) => warn!("Skipping overlay: {}", err),
            }
        }
        if self.hovered.is_some_and(|id| !self.visible.contains(&id)) {
            self.hovered = None;
        }
        collab.host.request_redraw();
    }

    /// Selection driven from outside the viewport, e.g. the timeline. A drag
    /// held on the previous selection is dropped.
    pub fn select(
        &mut self,
        clip: ClipId,
        collab: &mut Collaborators<'_>,
    ) -> Result<(), OverlayError> {
        self.ensure_overlay(clip, collab)?;
        if self.selected != Some(clip) {
            self.click_position = None;
        }
        self.set_selected(Some(clip), &mut *collab.host);
        Ok(())
    }

    pub fn clear_selection(&mut self, collab: &mut Collaborators<'_>) {
        if self.selected.is_some() {
            self.click_position = None;
        }
        self.set_selected(None, &mut *collab.host);
    }

    /// Re-derive an overlay after its clip changed outside the viewer.
    pub fn update(
        &mut self,
        clip: ClipId,
        collab: &mut Collaborators<'_>,
    ) -> Result<(), OverlayError> {
        if !self.overlays.contains_key(&clip) {
            return Err(OverlayError::UnknownOverlay(clip));
        }
        self.frame
            .dispatch(&mut self.overlays, clip, collab, |overlay, source, env| {
                overlay.update_from_source(source, env)
            })
            .ok_or(OverlayError::UnknownSource(clip))
    }

    /// Forget a clip that left the composition.
    pub fn remove(&mut self, clip: ClipId, collab: &mut Collaborators<'_>) {
        if self.overlays.remove(&clip).is_none() {
            return;
        }
        debug!("Removed overlay for clip {}", clip);
        self.visible.retain(|id| *id != clip);
        if self.selected == Some(clip) {
            self.click_position = None;
            self.selected = None;
            collab.host.selection_changed(None);
        }
        if self.hovered == Some(clip) {
            self.hovered = None;
            collab.host.reset_cursor();
        }
        collab.host.request_redraw();
    }

    pub fn on_resize(&mut self, viewport: WindowSize, collab: &mut Collaborators<'_>) {
        self.frame.viewport = viewport;
        let clips: Vec<ClipId> = self.overlays.keys().copied().collect();
        for clip in clips {
            self.frame
                .dispatch(&mut self.overlays, clip, collab, |overlay, source, env| {
                    overlay.update_from_source(source, env)
                });
        }
    }

    pub fn set_settings(&mut self, settings: OverlaySettings, collab: &mut Collaborators<'_>) {
        self.frame.settings = settings.sanitized();
        for overlay in self.overlays.values_mut() {
            overlay.apply_settings(&self.frame.settings);
        }
        collab.host.request_redraw();
    }

    pub fn on_button_press(&mut self, cursor: WindowPoint, collab: &mut Collaborators<'_>) {
        self.click_position = Some(cursor);
        let Some(target) = self.hovered.or(self.selected) else {
            return;
        };
        let selected = self.selected == Some(target);
        let outcome = self
            .frame
            .dispatch(&mut self.overlays, target, collab, |overlay, source, env| {
                overlay.on_button_press(source, selected, env)
            });

        match outcome {
            Some(PressOutcome::Select) => self.set_selected(Some(target), &mut *collab.host),
            Some(PressOutcome::Deselect) => self.set_selected(None, &mut *collab.host),
            Some(PressOutcome::HandleGrabbed) | Some(PressOutcome::Ignored) | None => {}
        }
    }

    pub fn on_motion(&mut self, cursor: WindowPoint, collab: &mut Collaborators<'_>) {
        if let Some(click) = self.click_position {
            if let Some(selected) = self.selected {
                let click_to_cursor = (cursor - click).to_normalized(self.frame.viewport);
                self.frame
                    .dispatch(&mut self.overlays, selected, collab, |overlay, source, env| {
                        overlay.on_motion(click_to_cursor, source, env)
                    });
            }
            return;
        }
        self.hover(cursor, collab);
    }

    fn hover(&mut self, cursor: WindowPoint, collab: &mut Collaborators<'_>) {
        self.hovered = None;
        let mut env = self.frame.env(collab);

        // Handles of the selected overlay sit on top of everything else.
        if let Some(selected) = self.selected {
            if let Some(overlay) = self.overlays.get_mut(&selected) {
                if overlay.on_hover(cursor, true, &mut env) && overlay.hovered_handle().is_some() {
                    self.hovered = Some(selected);
                }
            }
        }

        if self.hovered.is_none() {
            for &clip in &self.visible {
                let Some(overlay) = self.overlays.get_mut(&clip) else {
                    continue;
                };
                if overlay.on_hover(cursor, self.selected == Some(clip), &mut env) {
                    self.hovered = Some(clip);
                    break;
                }
            }
        }

        for (clip, overlay) in &mut self.overlays {
            if self.hovered != Some(*clip) {
                overlay.unhover();
            }
        }
        if self.hovered.is_none() {
            env.host.reset_cursor();
        }
    }

    pub fn on_button_release(&mut self, cursor: WindowPoint, collab: &mut Collaborators<'_>) {
        self.click_position = None;
        let Some(selected) = self.selected else {
            return;
        };
        let hovered = self
            .frame
            .dispatch(&mut self.overlays, selected, collab, |overlay, source, env| {
                overlay.on_button_release(cursor, source, true, env);
                overlay.is_hovered()
            });
        self.hovered = (hovered == Some(true)).then_some(selected);
    }

    /// The pointer left the viewport.
    pub fn on_leave(&mut self, collab: &mut Collaborators<'_>) {
        if self.click_position.is_some() {
            return;
        }
        self.hovered = None;
        for overlay in self.overlays.values_mut() {
            overlay.unhover();
        }
        collab.host.reset_cursor();
        collab.host.request_redraw();
    }

    /// Abort the drag in progress, restoring the clip to where it was when
    /// the button went down.
    pub fn cancel_drag(&mut self, collab: &mut Collaborators<'_>) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        let cancelled = self
            .frame
            .dispatch(&mut self.overlays, selected, collab, |overlay, source, env| {
                overlay.cancel_drag(source, env)
            })
            .unwrap_or(false);
        if cancelled {
            self.click_position = None;
            collab.host.request_redraw();
        }
        cancelled
    }

    /// Collect the shapes of every visible overlay, selected one last.
    pub fn draw(&self, list: &mut DrawList) {
        let ordered = self
            .visible
            .iter()
            .filter(|clip| self.selected != Some(**clip))
            .chain(self.visible.iter().filter(|clip| self.selected == Some(**clip)));
        for clip in ordered {
            if let Some(overlay) = self.overlays.get(clip) {
                overlay.draw(
                    self.selected == Some(*clip),
                    self.hovered == Some(*clip),
                    &self.frame.settings,
                    list,
                );
            }
        }
    }
}
