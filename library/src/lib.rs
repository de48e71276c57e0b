//! Move/scale overlay for a video preview viewer.
//!
//! The crate is toolkit independent: overlays read and write clip geometry
//! through the traits in [`source`], ask the host for cursors and redraws,
//! and describe what to paint as a [`render::DrawList`].

pub mod coords;
pub mod error;
pub mod handle;
pub mod overlay;
pub mod render;
pub mod settings;
pub mod source;
pub mod stack;

pub use coords::{
    NormalizedPoint, NormalizedSize, SourcePoint, SourceSize, WindowPoint, WindowSize,
};
pub use error::{OverlayError, SourceError};
pub use overlay::{MoveScaleOverlay, Overlay, TitleOverlay};
pub use settings::OverlaySettings;
pub use source::{
    ClipId, Collaborators, CommitSink, CursorShape, SourceRef, SourceRegistry, TitleSource,
    VideoSource, ViewportHost,
};
pub use stack::{OverlayStack, OverlayState};
