//! Toolkit-independent display list produced by the overlays.

use crate::coords::WindowPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn grey(shade: f64, alpha: f64) -> Self {
        let v = shade as f32;
        Self::new(v, v, v, alpha as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// 0.0 at the top of the shape, 1.0 at the bottom.
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    VerticalGradient(Vec<GradientStop>),
}

impl Fill {
    /// Colour at a vertical offset in `[0, 1]`.
    pub fn sample(&self, offset: f32) -> Rgba {
        match self {
            Fill::Solid(color) => *color,
            Fill::VerticalGradient(stops) => sample_stops(stops, offset),
        }
    }
}

fn sample_stops(stops: &[GradientStop], offset: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::new(0.0, 0.0, 0.0, 0.0);
    };
    if offset <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if offset <= b.offset {
            let span = b.offset - a.offset;
            let t = if span > 0.0 { (offset - a.offset) / span } else { 1.0 };
            return Rgba::new(
                a.color.r + (b.color.r - a.color.r) * t,
                a.color.g + (b.color.g - a.color.g) * t,
                a.color.b + (b.color.b - a.color.b) * t,
                a.color.a + (b.color.a - a.color.a) * t,
            );
        }
    }
    stops[stops.len() - 1].color
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    /// Closed polyline. With `inset` the stroke is clipped to the polygon
    /// interior, so only the inner half of `width` is visible.
    Outline {
        points: Vec<WindowPoint>,
        width: f64,
        color: Rgba,
        inset: bool,
    },
    Disc {
        center: WindowPoint,
        radius: f64,
        fill: Fill,
    },
}

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    shapes: Vec<OverlayShape>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: OverlayShape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }
}
