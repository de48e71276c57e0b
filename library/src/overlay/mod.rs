//! Per-clip overlays drawn on top of the preview.
//!
//! Video clips get a [`MoveScaleOverlay`] with eight resize handles; title
//! clips get a [`TitleOverlay`] that can only be moved. Both are projections
//! of their clip's properties and re-derive themselves from the source after
//! every external change.

mod move_scale;
mod title;

pub use move_scale::MoveScaleOverlay;
pub use title::TitleOverlay;

use crate::coords::{NormalizedPoint, SourceSize, WindowPoint, WindowSize};
use crate::handle::HandleRole;
use crate::render::{DrawList, OverlayShape, Rgba};
use crate::settings::OverlaySettings;
use crate::source::{ClipId, CommitSink, SourceKind, SourceRef, ViewportHost};

/// Outside-world access for a single overlay call.
pub struct OverlayEnv<'a> {
    pub viewport: WindowSize,
    pub project_size: SourceSize,
    pub settings: &'a OverlaySettings,
    pub host: &'a mut dyn ViewportHost,
    pub commit: &'a mut dyn CommitSink,
}

/// What a button press asks the stack to do with the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The box body was pressed: select and start moving.
    Select,
    /// A handle of the selected overlay was grabbed.
    HandleGrabbed,
    /// The press missed a selected overlay.
    Deselect,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Handle(HandleRole),
    Box,
}

#[derive(Debug, Clone)]
pub enum Overlay {
    MoveScale(MoveScaleOverlay),
    Title(TitleOverlay),
}

impl Overlay {
    pub fn for_source(clip: ClipId, source: SourceRef<'_>, env: &mut OverlayEnv<'_>) -> Self {
        match source {
            SourceRef::Video(video) => {
                Overlay::MoveScale(MoveScaleOverlay::new(clip, &*video, env))
            }
            SourceRef::Title(title) => Overlay::Title(TitleOverlay::new(clip, &*title, env)),
        }
    }

    pub fn clip(&self) -> ClipId {
        match self {
            Overlay::MoveScale(overlay) => overlay.clip(),
            Overlay::Title(overlay) => overlay.clip(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Overlay::MoveScale(_) => SourceKind::Video,
            Overlay::Title(_) => SourceKind::Title,
        }
    }

    pub fn update_from_source(&mut self, source: SourceRef<'_>, env: &mut OverlayEnv<'_>) {
        match (self, source) {
            (Overlay::MoveScale(overlay), SourceRef::Video(video)) => {
                overlay.update_from_source(&*video, env)
            }
            (Overlay::Title(overlay), SourceRef::Title(title)) => {
                overlay.update_from_source(&*title, env)
            }
            (overlay, source) => kind_mismatch(overlay, source.kind()),
        }
    }

    /// Hit-test the cursor; returns whether anything of this overlay is hovered.
    pub fn on_hover(
        &mut self,
        cursor: WindowPoint,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> bool {
        match self {
            Overlay::MoveScale(overlay) => overlay.on_hover(cursor, selected, env),
            Overlay::Title(overlay) => overlay.on_hover(cursor, selected, env),
        }
    }

    pub fn hovered_handle(&self) -> Option<HandleRole> {
        match self {
            Overlay::MoveScale(overlay) => overlay.hovered_handle(),
            Overlay::Title(_) => None,
        }
    }

    pub fn is_hovered(&self) -> bool {
        match self {
            Overlay::MoveScale(overlay) => overlay.is_hovered(),
            Overlay::Title(overlay) => overlay.is_hovered(),
        }
    }

    pub fn unhover(&mut self) {
        match self {
            Overlay::MoveScale(overlay) => overlay.unhover(),
            Overlay::Title(overlay) => overlay.unhover(),
        }
    }

    pub fn on_button_press(
        &mut self,
        source: SourceRef<'_>,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> PressOutcome {
        match (self, source) {
            (Overlay::MoveScale(overlay), SourceRef::Video(video)) => {
                overlay.on_button_press(&*video, selected, env)
            }
            (Overlay::Title(overlay), SourceRef::Title(title)) => {
                overlay.on_button_press(&*title, selected, env)
            }
            (overlay, source) => {
                kind_mismatch(overlay, source.kind());
                PressOutcome::Ignored
            }
        }
    }

    pub fn on_motion(
        &mut self,
        click_to_cursor: NormalizedPoint,
        source: SourceRef<'_>,
        env: &mut OverlayEnv<'_>,
    ) {
        match (self, source) {
            (Overlay::MoveScale(overlay), SourceRef::Video(video)) => {
                overlay.on_motion(click_to_cursor, video, env)
            }
            (Overlay::Title(overlay), SourceRef::Title(title)) => {
                overlay.on_motion(click_to_cursor, title, env)
            }
            (overlay, source) => kind_mismatch(overlay, source.kind()),
        }
    }

    pub fn on_button_release(
        &mut self,
        cursor: WindowPoint,
        source: SourceRef<'_>,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) {
        match (self, source) {
            (Overlay::MoveScale(overlay), SourceRef::Video(video)) => {
                overlay.on_button_release(cursor, &*video, selected, env)
            }
            (Overlay::Title(overlay), SourceRef::Title(title)) => {
                overlay.on_button_release(cursor, &*title, selected, env)
            }
            (overlay, source) => kind_mismatch(overlay, source.kind()),
        }
    }

    /// Restore the click-time source values and end the drag.
    pub fn cancel_drag(&mut self, source: SourceRef<'_>, env: &mut OverlayEnv<'_>) -> bool {
        match (self, source) {
            (Overlay::MoveScale(overlay), SourceRef::Video(video)) => {
                overlay.cancel_drag(video, env)
            }
            (Overlay::Title(overlay), SourceRef::Title(title)) => overlay.cancel_drag(title, env),
            (overlay, source) => {
                kind_mismatch(overlay, source.kind());
                false
            }
        }
    }

    /// Forget any drag in progress without touching the source.
    pub fn abort_drag(&mut self) {
        match self {
            Overlay::MoveScale(overlay) => overlay.abort_drag(),
            Overlay::Title(overlay) => overlay.abort_drag(),
        }
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        match self {
            Overlay::MoveScale(overlay) => overlay.drag_kind(),
            Overlay::Title(overlay) => overlay.is_dragging().then_some(DragKind::Box),
        }
    }

    pub fn apply_settings(&mut self, settings: &OverlaySettings) {
        if let Overlay::MoveScale(overlay) = self {
            overlay.apply_settings(settings);
        }
    }

    pub fn draw(
        &self,
        selected: bool,
        hovered: bool,
        settings: &OverlaySettings,
        list: &mut DrawList,
    ) {
        if !selected && !hovered {
            return;
        }
        match self {
            Overlay::MoveScale(overlay) => overlay.draw(selected, settings, list),
            Overlay::Title(overlay) => overlay.draw(hovered, settings, list),
        }
    }
}

fn kind_mismatch(overlay: &Overlay, found: SourceKind) {
    log::warn!(
        "Overlay for clip {} expects a {:?} source, found {:?}",
        overlay.clip(),
        overlay.kind(),
        found
    );
}

/// The translucent box border shared by both overlay kinds.
fn outline(
    points: Vec<WindowPoint>,
    box_hovered: bool,
    settings: &OverlaySettings,
) -> OverlayShape {
    let shade = if box_hovered {
        settings.outline_hovered_shade
    } else {
        settings.outline_shade
    };
    OverlayShape::Outline {
        points,
        width: settings.outline_width,
        color: Rgba::grey(shade, settings.outline_alpha),
        inset: true,
    }
}
