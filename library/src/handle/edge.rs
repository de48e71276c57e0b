use super::{Axis, Edge};
use crate::coords::{NormalizedPoint, NormalizedSize};

/// Drop the component of the candidate the edge cannot move along.
pub(super) fn restrict_to_free_axis(
    edge: Edge,
    origin: NormalizedPoint,
    candidate: NormalizedPoint,
) -> NormalizedPoint {
    match edge.free_axis() {
        Axis::X => candidate.with_y(origin.y),
        Axis::Y => candidate.with_x(origin.x),
    }
}

/// An edge only ever shrinks one dimension; the other one is zeroed.
pub(super) fn minimal_box_size(edge: Edge, base: NormalizedSize) -> NormalizedSize {
    match edge.free_axis() {
        Axis::X => NormalizedSize::new(base.width, 0.0),
        Axis::Y => NormalizedSize::new(0.0, base.height),
    }
}
