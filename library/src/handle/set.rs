use super::{Axis, Corner, Edge, Handle, HandleRole};
use crate::coords::{NormalizedPoint, NormalizedSize, WindowPoint, WindowSize};
use crate::render::DrawList;
use crate::settings::OverlaySettings;
use crate::source::ViewportHost;

/// The eight handles of one box, stored by [`HandleRole::index`].
///
/// Corners are authoritative; edges are recomputed as corner midpoints after
/// every corner move.
#[derive(Debug, Clone)]
pub struct HandleSet {
    handles: [Handle; 8],
}

impl HandleSet {
    pub fn new(settings: &OverlaySettings) -> Self {
        let handles = std::array::from_fn(|i| {
            let role = HandleRole::ALL[i];
            let (x, y) = role.unit_position();
            Handle::new(role, NormalizedPoint::new(x, y), settings)
        });
        Self { handles }
    }

    pub fn get(&self, role: impl Into<HandleRole>) -> &Handle {
        &self.handles[role.into().index()]
    }

    pub fn get_mut(&mut self, role: impl Into<HandleRole>) -> &mut Handle {
        &mut self.handles[role.into().index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.handles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Handle> {
        self.handles.iter_mut()
    }

    pub fn center(&self) -> NormalizedPoint {
        let top_left = self.get(Corner::TopLeft).position();
        let diagonal = self.get(Corner::BottomRight).position() - top_left;
        top_left + diagonal / 2.0
    }

    pub fn width(&self) -> f64 {
        self.get(Corner::BottomRight).position().x - self.get(Corner::BottomLeft).position().x
    }

    pub fn height(&self) -> f64 {
        self.get(Corner::BottomLeft).position().y - self.get(Corner::TopLeft).position().y
    }

    pub fn size(&self) -> NormalizedSize {
        NormalizedSize::new(self.width(), self.height())
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.size().aspect_ratio()
    }

    /// Lay the corners out as a box of `size` anchored at the origin.
    pub fn set_size(&mut self, size: NormalizedSize) {
        for corner in Corner::ALL {
            let (x, y) = corner.unit_position();
            self.get_mut(corner)
                .set_position(NormalizedPoint::new(x * size.width, y * size.height));
        }
        self.update_edges_from_corners();
    }

    pub fn set_translation(&mut self, translation: NormalizedPoint) {
        for handle in &mut self.handles {
            handle.set_translation(translation);
        }
    }

    pub fn set_viewport(&mut self, viewport: WindowSize) {
        for handle in &mut self.handles {
            handle.set_viewport(viewport);
        }
    }

    pub fn apply_settings(&mut self, settings: &OverlaySettings) {
        for handle in &mut self.handles {
            handle.apply_settings(settings);
        }
    }

    pub fn update_edges_from_corners(&mut self) {
        let half_width = NormalizedPoint::new(self.width() * 0.5, 0.0);
        let half_height = NormalizedPoint::new(0.0, self.height() * 0.5);

        let top_left = self.get(Corner::TopLeft).position();
        let top_right = self.get(Corner::TopRight).position();
        let bottom_left = self.get(Corner::BottomLeft).position();

        self.get_mut(Edge::Left).set_position(top_left + half_height);
        self.get_mut(Edge::Right).set_position(top_right + half_height);
        self.get_mut(Edge::Bottom).set_position(bottom_left + half_width);
        self.get_mut(Edge::Top).set_position(top_right - half_width);
    }

    /// Push the position of `role` onto the corners that share a coordinate
    /// with it.
    pub fn propagate_from(&mut self, role: HandleRole) {
        let position = self.get(role).position();
        match role {
            HandleRole::Corner(corner) => {
                let (x_neighbour, y_neighbour) = corner.neighbours();
                self.get_mut(x_neighbour).set_x(position.x);
                self.get_mut(y_neighbour).set_y(position.y);
            }
            HandleRole::Edge(edge) => {
                let (a, b) = edge.adjacent_corners();
                match edge.free_axis() {
                    Axis::X => {
                        self.get_mut(a).set_x(position.x);
                        self.get_mut(b).set_x(position.x);
                    }
                    Axis::Y => {
                        self.get_mut(a).set_y(position.y);
                        self.get_mut(b).set_y(position.y);
                    }
                }
            }
        }
    }

    pub fn click(&mut self, role: HandleRole) {
        let center = self.center();
        self.get_mut(role).on_click(center);
    }

    /// One drag step of `role`: restrict, move, propagate, re-derive edges.
    pub fn drag(&mut self, role: HandleRole, click_to_cursor: NormalizedPoint) {
        self.get_mut(role).on_drag(click_to_cursor);
        self.propagate_from(role);
        self.update_edges_from_corners();
    }

    pub fn release(&mut self, role: HandleRole) {
        self.get_mut(role).on_release();
    }

    /// Hover every handle; the last hovered one in role order wins.
    pub fn hover(
        &mut self,
        cursor: WindowPoint,
        host: &mut dyn ViewportHost,
    ) -> Option<HandleRole> {
        let mut hovered = None;
        for handle in &mut self.handles {
            if handle.on_hover(cursor, host) {
                hovered = Some(handle.role());
            }
        }
        hovered
    }

    pub fn unhover(&mut self) {
        for handle in &mut self.handles {
            handle.unhover();
        }
    }

    pub fn update_radii(&mut self, viewport: WindowSize) {
        let smaller_side = self.size().to_window(viewport).min_side();
        for handle in &mut self.handles {
            handle.restrict_radius_to_size(smaller_side);
        }
    }

    pub fn reset_radii(&mut self, viewport: WindowSize) {
        for handle in &mut self.handles {
            handle.reset_size();
        }
        self.update_radii(viewport);
    }

    /// Corner window positions in outline order.
    pub fn outline(&self) -> Vec<WindowPoint> {
        Corner::ALL
            .iter()
            .map(|corner| self.get(*corner).window_position())
            .collect()
    }

    pub fn draw(&self, list: &mut DrawList) {
        for handle in &self.handles {
            handle.draw(list);
        }
    }
}
