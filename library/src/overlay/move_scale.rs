use log::{debug, warn};

use super::{DragKind, OverlayEnv, PressOutcome, outline};
use crate::coords::{NormalizedPoint, SourcePoint, SourceSize, WindowPoint, WindowSize};
use crate::error::SourceError;
use crate::handle::{Corner, HandleRole, HandleSet};
use crate::render::DrawList;
use crate::settings::OverlaySettings;
use crate::source::{ClipId, CursorShape, VideoSource};

/// Source values captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    kind: DragKind,
    click_source_position: SourcePoint,
    click_source_size: SourceSize,
}

/// Resize/reposition box for a video clip.
#[derive(Debug, Clone)]
pub struct MoveScaleOverlay {
    clip: ClipId,
    stream_size: SourceSize,
    project_size: SourceSize,
    viewport: WindowSize,
    handles: HandleSet,
    hovered_handle: Option<HandleRole>,
    box_hovered: bool,
    drag: Option<Drag>,
}

impl MoveScaleOverlay {
    pub fn new(clip: ClipId, source: &dyn VideoSource, env: &mut OverlayEnv<'_>) -> Self {
        let mut overlay = Self {
            clip,
            stream_size: source.stream_size(),
            project_size: env.project_size,
            viewport: env.viewport,
            handles: HandleSet::new(env.settings),
            hovered_handle: None,
            box_hovered: false,
            drag: None,
        };
        overlay.update_from_source(source, env);
        overlay
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn stream_size(&self) -> SourceSize {
        self.stream_size
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn hovered_handle(&self) -> Option<HandleRole> {
        self.hovered_handle
    }

    pub fn is_hovered(&self) -> bool {
        self.box_hovered || self.hovered_handle.is_some()
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        self.drag.map(|drag| drag.kind)
    }

    /// Top-left of the box in the unit square.
    pub fn normalized_position(&self) -> NormalizedPoint {
        let top_left = self.handles.get(Corner::TopLeft);
        top_left.position() + top_left.translation()
    }

    /// Source position and size implied by the current handle geometry.
    pub fn source_geometry(&self) -> (SourcePoint, SourceSize) {
        (
            self.normalized_position().to_source(self.project_size),
            self.handles.size().to_source(self.project_size),
        )
    }

    /// Re-derive the whole box from the clip's position and size.
    pub fn update_from_source(&mut self, source: &dyn VideoSource, env: &mut OverlayEnv<'_>) {
        self.project_size = env.project_size;
        self.viewport = env.viewport;
        self.stream_size = source.stream_size();

        self.handles.set_viewport(self.viewport);
        self.handles
            .set_size(source.size().to_normalized(self.project_size));
        self.handles
            .set_translation(source.position().to_normalized(self.project_size));
        self.handles.reset_radii(self.viewport);
        env.host.request_redraw();
    }

    pub fn apply_settings(&mut self, settings: &OverlaySettings) {
        self.handles.apply_settings(settings);
        self.handles.update_radii(self.viewport);
    }

    pub fn on_hover(
        &mut self,
        cursor: WindowPoint,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> bool {
        self.hovered_handle = None;
        if selected {
            self.hovered_handle = self.handles.hover(cursor, &mut *env.host);
            if self.hovered_handle.is_some() {
                env.host.request_redraw();
                return true;
            }
        } else {
            self.handles.unhover();
        }

        let origin = self.normalized_position();
        let size = self.handles.size();
        let cursor = cursor.to_normalized(self.viewport);
        self.box_hovered = origin.x < cursor.x
            && origin.y < cursor.y
            && cursor.x < origin.x + size.width
            && cursor.y < origin.y + size.height;

        if self.box_hovered {
            env.host.set_cursor(CursorShape::Grab);
        }
        env.host.request_redraw();
        self.box_hovered
    }

    pub fn unhover(&mut self) {
        self.box_hovered = false;
        self.hovered_handle = None;
        self.handles.unhover();
    }

    pub fn on_button_press(
        &mut self,
        source: &dyn VideoSource,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> PressOutcome {
        let capture = |kind| Drag {
            kind,
            click_source_position: source.position(),
            click_source_size: source.size(),
        };

        if let Some(role) = self.hovered_handle {
            debug!("Clip {}: grabbed {:?} handle", self.clip, role);
            self.handles.click(role);
            self.drag = Some(capture(DragKind::Handle(role)));
            PressOutcome::HandleGrabbed
        } else if self.box_hovered {
            debug!("Clip {}: moving box", self.clip);
            self.drag = Some(capture(DragKind::Box));
            env.host.set_cursor(CursorShape::Grabbing);
            PressOutcome::Select
        } else if selected {
            self.hovered_handle = None;
            PressOutcome::Deselect
        } else {
            PressOutcome::Ignored
        }
    }

    /// One drag step. Geometry is recomputed from the click-time state, so
    /// repeated motion events never accumulate drift.
    pub fn on_motion(
        &mut self,
        click_to_cursor: NormalizedPoint,
        source: &mut dyn VideoSource,
        env: &mut OverlayEnv<'_>,
    ) {
        let Some(drag) = self.drag else {
            return;
        };

        let written = match drag.kind {
            DragKind::Handle(role) => {
                self.handles.drag(role, click_to_cursor);
                self.handles.update_radii(self.viewport);
                self.write_handle_drag(role, drag.click_source_position, source)
            }
            DragKind::Box => {
                let position =
                    drag.click_source_position + click_to_cursor.to_source(self.project_size);
                self.handles
                    .set_translation(position.to_normalized(self.project_size));
                source.set_position(position.round())
            }
        };

        if let Err(err) = written {
            warn!(
                "Clip {} rejected overlay geometry, re-syncing from source: {}",
                self.clip, err
            );
            self.update_from_source(&*source, env);
        }

        env.host.request_redraw();
        env.commit.commit();
    }

    fn write_handle_drag(
        &self,
        role: HandleRole,
        click_source_position: SourcePoint,
        source: &mut dyn VideoSource,
    ) -> Result<(), SourceError> {
        let handle = self.handles.get(role);
        if let Some(position) = handle.source_position(click_source_position, self.project_size) {
            source.set_position(position.round())?;
        }
        source.set_size(self.handles.size().to_source(self.project_size).round())
    }

    pub fn on_button_release(
        &mut self,
        cursor: WindowPoint,
        source: &dyn VideoSource,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) {
        let drag = self.drag.take();
        self.update_from_source(source, env);
        self.on_hover(cursor, selected, env);

        match drag.map(|drag| drag.kind) {
            Some(DragKind::Handle(role)) => {
                if !self.handles.get(role).is_hovered() {
                    env.host.reset_cursor();
                }
                self.handles.release(role);
            }
            _ => {
                if self.is_hovered() {
                    env.host.set_cursor(CursorShape::Grab);
                }
            }
        }
        env.host.request_redraw();
    }

    pub fn cancel_drag(&mut self, source: &mut dyn VideoSource, env: &mut OverlayEnv<'_>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        debug!("Clip {}: drag cancelled", self.clip);

        let restored = source
            .set_position(drag.click_source_position)
            .and_then(|_| source.set_size(drag.click_source_size));
        if let Err(err) = restored {
            warn!("Clip {} could not restore pre-drag geometry: {}", self.clip, err);
        }
        if let DragKind::Handle(role) = drag.kind {
            self.handles.release(role);
        }

        self.update_from_source(&*source, env);
        env.host.reset_cursor();
        env.commit.commit();
        true
    }

    pub fn abort_drag(&mut self) {
        if let Some(Drag {
            kind: DragKind::Handle(role),
            ..
        }) = self.drag.take()
        {
            self.handles.release(role);
        }
    }

    pub fn draw(&self, selected: bool, settings: &OverlaySettings, list: &mut DrawList) {
        list.push(outline(self.handles.outline(), self.box_hovered, settings));
        if selected {
            self.handles.draw(list);
        }
    }
}
