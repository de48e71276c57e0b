use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};
use viewer_overlay::render::{DrawList, Fill, OverlayShape, Rgba};
use viewer_overlay::WindowPoint;

/// Horizontal slices used to rasterize a vertical gradient disc.
const GRADIENT_ROWS: usize = 24;

pub fn to_color32(color: Rgba) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
}

/// Paints the overlay display list; window points are relative to `origin`.
pub fn paint_draw_list(painter: &Painter, origin: Pos2, list: &DrawList) {
    let to_screen = |p: WindowPoint| origin + egui::vec2(p.x as f32, p.y as f32);

    for shape in list.shapes() {
        match shape {
            OverlayShape::Outline {
                points,
                width,
                color,
                inset,
            } => {
                let points: Vec<Pos2> = points.iter().map(|p| to_screen(*p)).collect();
                let stroke = Stroke::new(*width as f32, to_color32(*color));
                if *inset {
                    // Boxes are axis aligned, so clipping to the bounds keeps
                    // only the inner half of the stroke.
                    let bounds = Rect::from_points(&points).intersect(painter.clip_rect());
                    painter
                        .with_clip_rect(bounds)
                        .add(Shape::closed_line(points, stroke));
                } else {
                    painter.add(Shape::closed_line(points, stroke));
                }
            }
            OverlayShape::Disc {
                center,
                radius,
                fill: Fill::Solid(color),
            } => {
                painter.circle_filled(to_screen(*center), *radius as f32, to_color32(*color));
            }
            OverlayShape::Disc {
                center,
                radius,
                fill,
            } => {
                painter.add(Shape::mesh(gradient_disc(to_screen(*center), *radius as f32, fill)));
            }
        }
    }
}

/// Disc built from horizontal slices, each row coloured from `fill`.
fn gradient_disc(center: Pos2, radius: f32, fill: &Fill) -> Mesh {
    let mut mesh = Mesh::default();
    for row in 0..=GRADIENT_ROWS {
        let t = row as f32 / GRADIENT_ROWS as f32;
        let dy = (t * 2.0 - 1.0) * radius;
        let half_width = (radius * radius - dy * dy).max(0.0).sqrt();
        let color = to_color32(fill.sample(t));
        mesh.colored_vertex(egui::pos2(center.x - half_width, center.y + dy), color);
        mesh.colored_vertex(egui::pos2(center.x + half_width, center.y + dy), color);
    }
    for row in 0..GRADIENT_ROWS as u32 {
        let i = row * 2;
        mesh.add_triangle(i, i + 1, i + 2);
        mesh.add_triangle(i + 1, i + 3, i + 2);
    }
    mesh
}
