use eframe::egui::{self, Align2, Color32, FontId, Key, Painter, Pos2, Rect, Sense, Ui};
use log::info;
use viewer_overlay::render::DrawList;
use viewer_overlay::{Collaborators, OverlayStack, SourceSize, WindowPoint, WindowSize};

use crate::composition::{ClipContent, Composition};
use crate::host::{EguiHost, Revision};
use crate::ui::painter::paint_draw_list;

/// Pointer bookkeeping between frames.
#[derive(Debug, Default)]
pub struct PreviewPanel {
    viewport: Option<WindowSize>,
    last_pointer: Option<Pos2>,
    pointer_inside: bool,
    pressed: bool,
}

/// Largest rect with the project's aspect ratio centered in `available`.
pub fn fit_frame(available: Rect, project: SourceSize) -> Rect {
    let Some(aspect) = project.aspect_ratio() else {
        return available;
    };
    let aspect = aspect as f32;
    let size = if available.width() / available.height() > aspect {
        egui::vec2(available.height() * aspect, available.height())
    } else {
        egui::vec2(available.width(), available.width() / aspect)
    };
    Rect::from_center_size(available.center(), size)
}

pub fn show(
    ui: &mut Ui,
    panel: &mut PreviewPanel,
    composition: &mut Composition,
    stack: &mut OverlayStack,
    host: &mut EguiHost,
    revision: &mut Revision,
) {
    let available = ui.available_rect_before_wrap();
    let frame = fit_frame(available, composition.project_size);
    let response = ui.allocate_rect(frame, Sense::click_and_drag());

    let painter = ui.painter().with_clip_rect(available);
    painter.rect_filled(available, 0.0, Color32::from_gray(30));
    paint_composition(&painter, frame, composition);

    let to_window =
        |p: Pos2| WindowPoint::new((p.x - frame.min.x) as f64, (p.y - frame.min.y) as f64);
    let (pointer, pressed, released, escape) = ui.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.key_pressed(Key::Escape),
        )
    });
    let inside = response.contains_pointer();

    {
        let mut collab = Collaborators::new(&mut *composition, &mut *host, &mut *revision);

        let viewport = WindowSize::new(frame.width() as f64, frame.height() as f64);
        if panel.viewport != Some(viewport) {
            stack.on_resize(viewport, &mut collab);
            panel.viewport = Some(viewport);
        }

        if let Some(pos) = pointer {
            if panel.last_pointer != Some(pos) && (inside || stack.is_dragging()) {
                stack.on_motion(to_window(pos), &mut collab);
            }
            if pressed && inside {
                stack.on_button_press(to_window(pos), &mut collab);
                panel.pressed = true;
            }
            if released && panel.pressed {
                stack.on_button_release(to_window(pos), &mut collab);
                panel.pressed = false;
            }
        }
        if panel.pointer_inside && !inside {
            stack.on_leave(&mut collab);
        }
        if escape && stack.cancel_drag(&mut collab) {
            info!("Drag cancelled");
            panel.pressed = false;
        }
    }
    panel.last_pointer = pointer;
    panel.pointer_inside = inside;

    if inside || stack.is_dragging() {
        host.apply_cursor();
    }

    let mut list = DrawList::new();
    stack.draw(&mut list);
    paint_draw_list(&painter, frame.min, &list);

    painter.text(
        available.left_bottom() + egui::vec2(8.0, -8.0),
        Align2::LEFT_BOTTOM,
        format!("Composited frames: {}", revision.get()),
        FontId::monospace(12.0),
        Color32::GRAY,
    );
}

fn paint_composition(painter: &Painter, frame: Rect, composition: &Composition) {
    painter.rect_filled(frame, 0.0, Color32::BLACK);
    let scale = frame.width() / composition.project_size.width as f32;
    let to_screen = |x: f64, y: f64| frame.min + egui::vec2(x as f32 * scale, y as f32 * scale);

    for clip in composition.clips.iter().filter(|clip| clip.enabled) {
        match &clip.content {
            ClipContent::Video(video) => {
                let min = to_screen(video.position.x, video.position.y);
                let max = to_screen(
                    video.position.x + video.size.width,
                    video.position.y + video.size.height,
                );
                let rect = Rect::from_min_max(min, max);
                painter.rect_filled(rect, 0.0, video.color);
                painter.text(
                    rect.min + egui::vec2(6.0, 6.0),
                    Align2::LEFT_TOP,
                    &clip.name,
                    FontId::proportional(14.0),
                    Color32::from_white_alpha(180),
                );
            }
            ClipContent::Title(title) => {
                let origin = title.position.to_source(composition.project_size);
                painter.text(
                    to_screen(origin.x, origin.y),
                    Align2::LEFT_TOP,
                    &title.text,
                    FontId::monospace(title.font_size as f32 * scale),
                    title.color,
                );
            }
        }
    }
}
