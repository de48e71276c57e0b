//! Collaborator contracts.
//!
//! The overlays never own the clips they edit. Clip properties are reached
//! through [`SourceRegistry`], cursor and redraw requests go to a
//! [`ViewportHost`], and every geometry-affecting drag step ends with a call
//! to the [`CommitSink`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coords::{NormalizedPoint, SourcePoint, SourceSize};
use crate::error::SourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClipId(pub Uuid);

impl ClipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A video clip whose placement is edited with the move/scale overlay.
///
/// Setters must be idempotent and immediately observable by the getters.
pub trait VideoSource {
    fn position(&self) -> SourcePoint;
    fn size(&self) -> SourceSize;
    /// Pixel size of the decoded stream.
    fn stream_size(&self) -> SourceSize;
    fn set_position(&mut self, position: SourcePoint) -> Result<(), SourceError>;
    fn set_size(&mut self, size: SourceSize) -> Result<(), SourceError>;
}

/// A title clip. Titles are only moved, never scaled.
pub trait TitleSource {
    /// Anchor of the text in the unit square.
    fn position(&self) -> NormalizedPoint;
    fn set_position(&mut self, position: NormalizedPoint) -> Result<(), SourceError>;
    /// Top-left of the rendered text.
    fn text_origin(&self) -> SourcePoint;
    fn text_size(&self) -> SourceSize;
}

pub enum SourceRef<'a> {
    Video(&'a mut dyn VideoSource),
    Title(&'a mut dyn TitleSource),
}

impl SourceRef<'_> {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRef::Video(_) => SourceKind::Video,
            SourceRef::Title(_) => SourceKind::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Video,
    Title,
}

/// Lookup of the clips currently known to the composition.
pub trait SourceRegistry {
    /// Pixel size of the project canvas.
    fn project_size(&self) -> SourceSize;
    fn source_mut(&mut self, clip: ClipId) -> Option<SourceRef<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorShape {
    Grab,
    Grabbing,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
    ResizeTop,
    ResizeBottom,
    ResizeLeft,
    ResizeRight,
}

/// The surface the preview is shown on.
pub trait ViewportHost {
    fn set_cursor(&mut self, cursor: CursorShape);
    fn reset_cursor(&mut self);
    fn request_redraw(&mut self);
    /// Called whenever the selected overlay changes.
    fn selection_changed(&mut self, _clip: Option<ClipId>) {}
}

pub trait CommitSink {
    /// Flush the composited preview after a geometry change.
    fn commit(&mut self);
}

/// Everything an event handler needs from the outside world.
pub struct Collaborators<'a> {
    pub sources: &'a mut dyn SourceRegistry,
    pub host: &'a mut dyn ViewportHost,
    pub commit: &'a mut dyn CommitSink,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        sources: &'a mut dyn SourceRegistry,
        host: &'a mut dyn ViewportHost,
        commit: &'a mut dyn CommitSink,
    ) -> Self {
        Self {
            sources,
            host,
            commit,
        }
    }
}
