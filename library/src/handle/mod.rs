//! Draggable control points of the move/scale box.
//!
//! A [`Handle`] lives in the box's own unit-square frame. Its window position
//! is cached and recomputed by every setter, so it can never go stale.
//! Role-specific behaviour (aspect lock for corners, single-axis movement for
//! edges) is selected by matching on [`HandleRole`].

mod corner;
mod edge;
mod role;
mod set;

pub use role::{Axis, Corner, Edge, HandleRole};
pub use set::HandleSet;

use crate::coords::{
    NormalizedPoint, NormalizedSize, SourcePoint, SourceSize, WindowPoint, WindowSize,
};
use crate::render::{DrawList, Fill, GradientStop, OverlayShape, Rgba};
use crate::settings::OverlaySettings;
use crate::source::ViewportHost;

/// Drag anchor captured when a handle is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    /// The point mirrored through the box center.
    pub opposite_position: NormalizedPoint,
    /// Vector from the opposite point to the handle.
    pub opposite_to_handle: NormalizedPoint,
}

impl Pivot {
    pub fn new(position: NormalizedPoint, center: NormalizedPoint) -> Self {
        let opposite_to_handle = (position - center) * 2.0;
        Self {
            opposite_position: position - opposite_to_handle,
            opposite_to_handle,
        }
    }

    /// Width over height of the box spanned by handle and pivot.
    pub fn aspect_ratio(&self) -> Option<f64> {
        let v = self.opposite_to_handle;
        if v.x == 0.0 || v.y == 0.0 {
            None
        } else {
            Some((v.x / v.y).abs())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Handle {
    role: HandleRole,
    position: NormalizedPoint,
    translation: NormalizedPoint,
    viewport: WindowSize,
    window_position: WindowPoint,
    radius: f64,
    minimal_radius: f64,
    reference_radius: f64,
    glow: f64,
    clicked: bool,
    hovered: bool,
    click_position: Option<NormalizedPoint>,
    pivot: Option<Pivot>,
}

impl Handle {
    pub fn new(role: HandleRole, position: NormalizedPoint, settings: &OverlaySettings) -> Self {
        let mut handle = Self {
            role,
            position,
            translation: NormalizedPoint::default(),
            viewport: WindowSize::default(),
            window_position: WindowPoint::default(),
            radius: settings.reference_radius,
            minimal_radius: settings.minimal_radius,
            reference_radius: settings.reference_radius,
            glow: settings.glow,
            clicked: false,
            hovered: false,
            click_position: None,
            pivot: None,
        };
        handle.update_window_position();
        handle
    }

    pub fn role(&self) -> HandleRole {
        self.role
    }

    pub fn position(&self) -> NormalizedPoint {
        self.position
    }

    pub fn translation(&self) -> NormalizedPoint {
        self.translation
    }

    pub fn window_position(&self) -> WindowPoint {
        self.window_position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }

    pub fn set_position(&mut self, position: NormalizedPoint) {
        self.position = position;
        self.update_window_position();
    }

    pub fn set_x(&mut self, x: f64) {
        self.set_position(self.position.with_x(x));
    }

    pub fn set_y(&mut self, y: f64) {
        self.set_position(self.position.with_y(y));
    }

    pub fn set_translation(&mut self, translation: NormalizedPoint) {
        self.translation = translation;
        self.update_window_position();
    }

    pub fn set_viewport(&mut self, viewport: WindowSize) {
        self.viewport = viewport;
        self.update_window_position();
    }

    fn update_window_position(&mut self) {
        self.window_position = (self.position + self.translation).to_window(self.viewport);
    }

    pub fn apply_settings(&mut self, settings: &OverlaySettings) {
        self.minimal_radius = settings.minimal_radius;
        self.reference_radius = settings.reference_radius;
        self.glow = settings.glow;
        self.reset_size();
    }

    /// Hit-test the cursor and request this handle's cursor when it is over it.
    pub fn on_hover(&mut self, cursor: WindowPoint, host: &mut dyn ViewportHost) -> bool {
        self.hovered = self.window_position.distance(cursor) < self.radius;
        if self.hovered {
            host.set_cursor(self.role.cursor());
        }
        self.hovered
    }

    pub fn unhover(&mut self) {
        self.hovered = false;
    }

    pub fn on_click(&mut self, center: NormalizedPoint) {
        self.clicked = true;
        self.click_position = Some(self.position);
        self.pivot = Some(Pivot::new(self.position, center));
    }

    /// Move to the click position offset by `click_to_cursor`, after
    /// restriction. Neighbour propagation is left to the [`HandleSet`].
    pub fn on_drag(&mut self, click_to_cursor: NormalizedPoint) {
        let origin = self.click_position.unwrap_or(self.position);
        self.set_position(self.restrict(origin + click_to_cursor));
    }

    pub fn on_release(&mut self) {
        self.clicked = false;
        self.click_position = None;
        self.pivot = None;
    }

    pub fn restrict(&self, candidate: NormalizedPoint) -> NormalizedPoint {
        match (self.role, self.pivot) {
            (HandleRole::Corner(_), Some(pivot)) => {
                self.restrict_to_minimal_size(corner::restrict_to_aspect_ratio(&pivot, candidate))
            }
            (HandleRole::Edge(edge), _) => {
                let origin = self.click_position.unwrap_or(self.position);
                self.restrict_to_minimal_size(edge::restrict_to_free_axis(edge, origin, candidate))
            }
            (HandleRole::Corner(_), None) => candidate,
        }
    }

    /// `4 × minimal_radius` in window pixels, expressed in the unit square.
    pub fn normalized_minimal_size(&self) -> NormalizedSize {
        let side = 4.0 * self.minimal_radius;
        WindowSize::new(side, side).to_normalized(self.viewport)
    }

    pub fn minimal_box_size(&self) -> NormalizedSize {
        let base = self.normalized_minimal_size();
        match self.role {
            HandleRole::Corner(_) => {
                corner::minimal_box_size(base, self.pivot.and_then(|p| p.aspect_ratio()))
            }
            HandleRole::Edge(edge) => edge::minimal_box_size(edge, base),
        }
    }

    /// Clamp `candidate` so the box never gets smaller than
    /// [`Self::minimal_box_size`] around the captured pivot.
    ///
    /// Axes where the pivot coincides with the handle are never compared, so
    /// a degenerate pivot leaves the candidate untouched.
    pub fn restrict_to_minimal_size(&self, candidate: NormalizedPoint) -> NormalizedPoint {
        let Some(pivot) = self.pivot else {
            return candidate;
        };
        let sign = pivot.opposite_to_handle.signum();
        let minimal = self.minimal_box_size();
        let boundary = pivot.opposite_position
            + NormalizedPoint::new(minimal.width * sign.x, minimal.height * sign.y);

        let crossed_x = crossed(sign.x, candidate.x, boundary.x);
        let crossed_y = crossed(sign.y, candidate.y, boundary.y);
        let needs_restriction = match self.role {
            HandleRole::Corner(_) => crossed_x || crossed_y,
            HandleRole::Edge(edge) => match edge.free_axis() {
                Axis::X => crossed_x,
                Axis::Y => crossed_y,
            },
        };

        if needs_restriction { boundary } else { candidate }
    }

    /// Shrink the radius when the box's smaller side is under five radii.
    pub fn restrict_radius_to_size(&mut self, smaller_side: f64) {
        self.radius = if smaller_side < self.reference_radius * 5.0 {
            (smaller_side / 5.0).max(self.minimal_radius)
        } else {
            self.reference_radius
        };
    }

    pub fn reset_size(&mut self) {
        self.radius = self.reference_radius;
    }

    /// Source position implied by this handle's drag, for handles that move
    /// the source origin.
    pub fn source_position(
        &self,
        click_source_position: SourcePoint,
        project: SourceSize,
    ) -> Option<SourcePoint> {
        let (move_x, move_y) = self.role.moves_source_origin();
        if !move_x && !move_y {
            return None;
        }
        let offset = self.position.to_source(project);
        let offset = SourcePoint::new(
            if move_x { offset.x } else { 0.0 },
            if move_y { offset.y } else { 0.0 },
        );
        Some(click_source_position + offset)
    }

    pub fn draw(&self, list: &mut DrawList) {
        let (outer, glow_factor) = if self.clicked {
            (0.2, 1.08)
        } else if self.hovered {
            (0.8, 1.08)
        } else {
            (0.5, 1.01)
        };

        list.push(OverlayShape::Disc {
            center: self.window_position,
            radius: self.radius * glow_factor,
            fill: Fill::Solid(Rgba::grey(self.glow, 0.9)),
        });

        let stop = |offset: f32, shade: f64| GradientStop {
            offset,
            color: Rgba::grey(shade, 1.0),
        };
        list.push(OverlayShape::Disc {
            center: self.window_position,
            radius: self.radius * 0.9,
            fill: Fill::VerticalGradient(vec![
                stop(0.0, outer),
                stop(0.55, 0.1),
                stop(0.65, 0.1),
                stop(1.0, outer),
            ]),
        });
    }
}

/// Whether `value` ended up on the other side of `boundary` than the handle
/// started on. A zero `sign` disables the comparison.
fn crossed(sign: f64, value: f64, boundary: f64) -> bool {
    sign != 0.0 && (sign >= 0.0) != (value >= boundary)
}
