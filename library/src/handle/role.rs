use crate::source::CursorShape;

/// Box vertices, in the order the outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    BottomLeft,
    BottomRight,
    TopRight,
}

/// Side midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRole {
    Corner(Corner),
    Edge(Edge),
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    /// Unit-square position of this corner for a box spanning the whole square.
    pub fn unit_position(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (0.0, 0.0),
            Corner::BottomLeft => (0.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
            Corner::TopRight => (1.0, 0.0),
        }
    }

    /// `(shares_x, shares_y)`: the corner receiving this corner's x, and the
    /// one receiving its y.
    pub fn neighbours(self) -> (Corner, Corner) {
        match self {
            Corner::TopLeft => (Corner::BottomLeft, Corner::TopRight),
            Corner::BottomLeft => (Corner::TopLeft, Corner::BottomRight),
            Corner::BottomRight => (Corner::TopRight, Corner::BottomLeft),
            Corner::TopRight => (Corner::BottomRight, Corner::TopLeft),
        }
    }
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// The axis this edge is dragged along.
    pub fn free_axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Y,
            Edge::Left | Edge::Right => Axis::X,
        }
    }

    pub fn unit_position(self) -> (f64, f64) {
        match self {
            Edge::Top => (0.5, 0.0),
            Edge::Bottom => (0.5, 1.0),
            Edge::Left => (0.0, 0.5),
            Edge::Right => (1.0, 0.5),
        }
    }

    pub fn adjacent_corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::TopLeft, Corner::TopRight),
            Edge::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Edge::Left => (Corner::TopLeft, Corner::BottomLeft),
            Edge::Right => (Corner::TopRight, Corner::BottomRight),
        }
    }
}

impl HandleRole {
    pub const ALL: [HandleRole; 8] = [
        HandleRole::Corner(Corner::TopLeft),
        HandleRole::Corner(Corner::BottomLeft),
        HandleRole::Corner(Corner::BottomRight),
        HandleRole::Corner(Corner::TopRight),
        HandleRole::Edge(Edge::Top),
        HandleRole::Edge(Edge::Bottom),
        HandleRole::Edge(Edge::Left),
        HandleRole::Edge(Edge::Right),
    ];

    /// Slot of this role in a handle arena.
    pub fn index(self) -> usize {
        match self {
            HandleRole::Corner(Corner::TopLeft) => 0,
            HandleRole::Corner(Corner::BottomLeft) => 1,
            HandleRole::Corner(Corner::BottomRight) => 2,
            HandleRole::Corner(Corner::TopRight) => 3,
            HandleRole::Edge(Edge::Top) => 4,
            HandleRole::Edge(Edge::Bottom) => 5,
            HandleRole::Edge(Edge::Left) => 6,
            HandleRole::Edge(Edge::Right) => 7,
        }
    }

    pub fn unit_position(self) -> (f64, f64) {
        match self {
            HandleRole::Corner(corner) => corner.unit_position(),
            HandleRole::Edge(edge) => edge.unit_position(),
        }
    }

    pub fn cursor(self) -> CursorShape {
        match self {
            HandleRole::Corner(Corner::TopLeft) => CursorShape::ResizeTopLeft,
            HandleRole::Corner(Corner::BottomLeft) => CursorShape::ResizeBottomLeft,
            HandleRole::Corner(Corner::BottomRight) => CursorShape::ResizeBottomRight,
            HandleRole::Corner(Corner::TopRight) => CursorShape::ResizeTopRight,
            HandleRole::Edge(Edge::Top) => CursorShape::ResizeTop,
            HandleRole::Edge(Edge::Bottom) => CursorShape::ResizeBottom,
            HandleRole::Edge(Edge::Left) => CursorShape::ResizeLeft,
            HandleRole::Edge(Edge::Right) => CursorShape::ResizeRight,
        }
    }

    /// Axes along which dragging this handle moves the source origin.
    ///
    /// Handles on the top or left side act against a pivot on the bottom or
    /// right, so the source has to be translated to keep that pivot fixed.
    pub fn moves_source_origin(self) -> (bool, bool) {
        match self {
            HandleRole::Corner(Corner::TopLeft) => (true, true),
            HandleRole::Corner(Corner::BottomLeft) | HandleRole::Edge(Edge::Left) => (true, false),
            HandleRole::Corner(Corner::TopRight) | HandleRole::Edge(Edge::Top) => (false, true),
            HandleRole::Corner(Corner::BottomRight)
            | HandleRole::Edge(Edge::Bottom)
            | HandleRole::Edge(Edge::Right) => (false, false),
        }
    }
}

impl From<Corner> for HandleRole {
    fn from(corner: Corner) -> Self {
        HandleRole::Corner(corner)
    }
}

impl From<Edge> for HandleRole {
    fn from(edge: Edge) -> Self {
        HandleRole::Edge(edge)
    }
}
