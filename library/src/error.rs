use thiserror::Error;

use crate::source::ClipId;

/// Returned by source model setters when a write is refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Property {0} is read-only")]
    ReadOnly(&'static str),
    #[error("Property {property} rejected value: {reason}")]
    Rejected {
        property: &'static str,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    #[error("No source registered for clip {0}")]
    UnknownSource(ClipId),
    #[error("No overlay exists for clip {0}")]
    UnknownOverlay(ClipId),
}
