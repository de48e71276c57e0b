use super::Pivot;
use crate::coords::{NormalizedPoint, NormalizedSize};

/// Keep the box spanned by the pivot and `candidate` at the pivot's aspect
/// ratio. The axis that deviates more is recomputed from the other one.
///
/// When the aspect is undefined (zero-width or zero-height box) the candidate
/// is returned as is.
pub(super) fn restrict_to_aspect_ratio(
    pivot: &Pivot,
    candidate: NormalizedPoint,
) -> NormalizedPoint {
    let handle = pivot.opposite_to_handle;
    if handle.x == 0.0 || handle.y == 0.0 {
        return candidate;
    }
    let ratio = handle.x / handle.y;
    let to_cursor = candidate - pivot.opposite_position;

    // |to_cursor.x / to_cursor.y| > |ratio|, without dividing by to_cursor.y
    if to_cursor.x.abs() * handle.y.abs() > handle.x.abs() * to_cursor.y.abs() {
        candidate.with_x(pivot.opposite_position.x + to_cursor.y * ratio)
    } else {
        candidate.with_y(pivot.opposite_position.y + to_cursor.x / ratio)
    }
}

/// The minimal size stretched to the box's aspect ratio.
pub(super) fn minimal_box_size(base: NormalizedSize, aspect_ratio: Option<f64>) -> NormalizedSize {
    match aspect_ratio {
        Some(ratio) if ratio < 1.0 => NormalizedSize::new(base.width, base.width / ratio),
        Some(ratio) => NormalizedSize::new(base.height * ratio, base.height),
        None => base,
    }
}
