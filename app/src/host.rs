use eframe::egui::{Context, CursorIcon};
use log::{debug, trace};
use viewer_overlay::{ClipId, CommitSink, CursorShape, ViewportHost};

/// Bridges overlay requests to egui. Cursor icons are reset every frame by
/// egui, so the requested shape is kept here and re-applied by the preview.
pub struct EguiHost {
    ctx: Context,
    cursor: Option<CursorShape>,
    selection: Option<ClipId>,
}

impl EguiHost {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            cursor: None,
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<ClipId> {
        self.selection
    }

    pub fn apply_cursor(&self) {
        if let Some(shape) = self.cursor {
            self.ctx.set_cursor_icon(cursor_icon(shape));
        }
    }
}

impl ViewportHost for EguiHost {
    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = Some(cursor);
    }

    fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }

    fn selection_changed(&mut self, clip: Option<ClipId>) {
        debug!("Preview selection: {:?}", clip);
        self.selection = clip;
    }
}

pub fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Grab => CursorIcon::Grab,
        CursorShape::Grabbing => CursorIcon::Grabbing,
        CursorShape::ResizeTopLeft => CursorIcon::ResizeNorthWest,
        CursorShape::ResizeTopRight => CursorIcon::ResizeNorthEast,
        CursorShape::ResizeBottomLeft => CursorIcon::ResizeSouthWest,
        CursorShape::ResizeBottomRight => CursorIcon::ResizeSouthEast,
        CursorShape::ResizeTop => CursorIcon::ResizeNorth,
        CursorShape::ResizeBottom => CursorIcon::ResizeSouth,
        CursorShape::ResizeLeft => CursorIcon::ResizeWest,
        CursorShape::ResizeRight => CursorIcon::ResizeEast,
    }
}

/// Counts composited frames; each commit stands for one re-render.
#[derive(Debug, Default)]
pub struct Revision(u64);

impl Revision {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl CommitSink for Revision {
    fn commit(&mut self) {
        self.0 += 1;
        trace!("Composition revision {}", self.0);
    }
}
