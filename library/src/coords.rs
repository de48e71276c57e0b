//! Coordinate spaces used by the preview overlays.
//!
//! Three spaces are in play and must never be mixed:
//!
//! - [`Normalized`]: the unit square, relative to the project canvas.
//! - [`Source`]: pixels of the project canvas / source media.
//! - [`Window`]: pixels of the on-screen viewport.
//!
//! [`Point`] and [`Size`] carry their space as a type parameter, so arithmetic
//! is only defined within one space and crossing spaces goes through the
//! explicit conversion methods below.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

/// Unit-square space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {}

/// Source / project pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {}

/// Viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {}

pub struct Point<S> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<S>,
}

pub struct Size<S> {
    pub width: f64,
    pub height: f64,
    _space: PhantomData<S>,
}

pub type NormalizedPoint = Point<Normalized>;
pub type SourcePoint = Point<Source>;
pub type WindowPoint = Point<Window>;
pub type NormalizedSize = Size<Normalized>;
pub type SourceSize = Size<Source>;
pub type WindowSize = Size<Window>;

// Manual impls: derives would put bounds on the uninhabited marker types.

impl<S> Clone for Point<S> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<S> Copy for Point<S> {}

impl<S> PartialEq for Point<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<S> Default for Point<S> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl<S> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S> Clone for Size<S> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<S> Copy for Size<S> {}

impl<S> PartialEq for Size<S> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl<S> Default for Size<S> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl<S> fmt::Debug for Size<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl<S> Point<S> {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    pub fn with_x(self, x: f64) -> Self {
        Self::new(x, self.y)
    }

    pub fn with_y(self, y: f64) -> Self {
        Self::new(self.x, y)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Per-axis sign, with zero mapped to zero.
    pub fn signum(self) -> Self {
        Self::new(sign(self.x), sign(self.y))
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component-wise product with a size of the same space.
    pub fn scale(self, size: Size<S>) -> Self {
        Self::new(self.x * size.width, self.y * size.height)
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    fn map_into<T>(self, sx: f64, sy: f64) -> Point<T> {
        Point::new(self.x * sx, self.y * sy)
    }
}

impl<S> Size<S> {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            _space: PhantomData,
        }
    }

    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Width over height, `None` when either side is zero or not finite.
    pub fn aspect_ratio(self) -> Option<f64> {
        if self.is_empty() || !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        Some(self.width / self.height)
    }

    pub fn round(self) -> Self {
        Self::new(self.width.round(), self.height.round())
    }

    /// The size seen as a vector from the origin.
    pub fn to_vector(self) -> Point<S> {
        Point::new(self.width, self.height)
    }

    fn map_into<T>(self, sx: f64, sy: f64) -> Size<T> {
        Size::new(self.width * sx, self.height * sy)
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `1 / extent`, or zero for an empty extent so normalizing never yields NaN.
fn inverse(extent: f64) -> f64 {
    if extent == 0.0 { 0.0 } else { 1.0 / extent }
}

impl NormalizedPoint {
    pub fn to_source(self, project: SourceSize) -> SourcePoint {
        self.map_into(project.width, project.height)
    }

    pub fn to_window(self, viewport: WindowSize) -> WindowPoint {
        self.map_into(viewport.width, viewport.height)
    }
}

impl SourcePoint {
    pub fn to_normalized(self, project: SourceSize) -> NormalizedPoint {
        self.map_into(inverse(project.width), inverse(project.height))
    }
}

impl WindowPoint {
    pub fn to_normalized(self, viewport: WindowSize) -> NormalizedPoint {
        self.map_into(inverse(viewport.width), inverse(viewport.height))
    }
}

impl NormalizedSize {
    pub fn to_source(self, project: SourceSize) -> SourceSize {
        self.map_into(project.width, project.height)
    }

    pub fn to_window(self, viewport: WindowSize) -> WindowSize {
        self.map_into(viewport.width, viewport.height)
    }
}

impl SourceSize {
    pub fn to_normalized(self, project: SourceSize) -> NormalizedSize {
        self.map_into(inverse(project.width), inverse(project.height))
    }
}

impl WindowSize {
    pub fn to_normalized(self, viewport: WindowSize) -> NormalizedSize {
        self.map_into(inverse(viewport.width), inverse(viewport.height))
    }
}

impl<S> Add for Point<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S> Sub for Point<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S> Mul<f64> for Point<S> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<S> Div<f64> for Point<S> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<S> Mul<f64> for Size<S> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.width * rhs, self.height * rhs)
    }
}
