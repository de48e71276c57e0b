use log::{debug, warn};

use super::{OverlayEnv, PressOutcome, outline};
use crate::coords::{NormalizedPoint, NormalizedSize, SourceSize, WindowPoint, WindowSize};
use crate::render::DrawList;
use crate::settings::OverlaySettings;
use crate::source::{ClipId, CursorShape, TitleSource};

#[derive(Debug, Clone, Copy, PartialEq)]
struct TitleDrag {
    click_source_position: NormalizedPoint,
    click_origin: NormalizedPoint,
}

/// Move-only box around the rendered text of a title clip.
#[derive(Debug, Clone)]
pub struct TitleOverlay {
    clip: ClipId,
    project_size: SourceSize,
    viewport: WindowSize,
    origin: NormalizedPoint,
    size: NormalizedSize,
    hovered: bool,
    drag: Option<TitleDrag>,
}

impl TitleOverlay {
    pub fn new(clip: ClipId, source: &dyn TitleSource, env: &mut OverlayEnv<'_>) -> Self {
        let mut overlay = Self {
            clip,
            project_size: env.project_size,
            viewport: env.viewport,
            origin: NormalizedPoint::default(),
            size: NormalizedSize::default(),
            hovered: false,
            drag: None,
        };
        overlay.update_from_source(source, env);
        overlay
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn origin(&self) -> NormalizedPoint {
        self.origin
    }

    pub fn size(&self) -> NormalizedSize {
        self.size
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn update_from_source(&mut self, source: &dyn TitleSource, env: &mut OverlayEnv<'_>) {
        self.project_size = env.project_size;
        self.viewport = env.viewport;
        self.origin = source.text_origin().to_normalized(self.project_size);
        self.size = source.text_size().to_normalized(self.project_size);
        env.host.request_redraw();
    }

    pub fn on_hover(
        &mut self,
        cursor: WindowPoint,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> bool {
        let cursor = cursor.to_normalized(self.viewport);
        self.hovered = self.origin.x < cursor.x
            && self.origin.y < cursor.y
            && cursor.x < self.origin.x + self.size.width
            && cursor.y < self.origin.y + self.size.height;

        if self.hovered && selected {
            env.host.set_cursor(CursorShape::Grab);
        }
        env.host.request_redraw();
        self.hovered
    }

    pub fn unhover(&mut self) {
        self.hovered = false;
    }

    pub fn on_button_press(
        &mut self,
        source: &dyn TitleSource,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) -> PressOutcome {
        if self.hovered {
            debug!("Title {}: moving", self.clip);
            self.drag = Some(TitleDrag {
                click_source_position: source.position(),
                click_origin: self.origin,
            });
            env.host.set_cursor(CursorShape::Grabbing);
            PressOutcome::Select
        } else if selected {
            PressOutcome::Deselect
        } else {
            PressOutcome::Ignored
        }
    }

    pub fn on_motion(
        &mut self,
        click_to_cursor: NormalizedPoint,
        source: &mut dyn TitleSource,
        env: &mut OverlayEnv<'_>,
    ) {
        let Some(drag) = self.drag else {
            return;
        };

        self.origin = drag.click_origin + click_to_cursor;
        if let Err(err) = source.set_position(drag.click_source_position + click_to_cursor) {
            warn!("Title {} rejected new position, re-syncing: {}", self.clip, err);
            self.update_from_source(&*source, env);
        }

        env.host.request_redraw();
        env.commit.commit();
    }

    pub fn on_button_release(
        &mut self,
        cursor: WindowPoint,
        source: &dyn TitleSource,
        selected: bool,
        env: &mut OverlayEnv<'_>,
    ) {
        self.drag = None;
        self.update_from_source(source, env);
        if self.on_hover(cursor, selected, env) {
            env.host.set_cursor(CursorShape::Grab);
        }
    }

    pub fn cancel_drag(&mut self, source: &mut dyn TitleSource, env: &mut OverlayEnv<'_>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if let Err(err) = source.set_position(drag.click_source_position) {
            warn!("Title {} could not restore its position: {}", self.clip, err);
        }
        self.update_from_source(&*source, env);
        env.host.reset_cursor();
        env.commit.commit();
        true
    }

    pub fn abort_drag(&mut self) {
        self.drag = None;
    }

    pub fn draw(&self, hovered: bool, settings: &OverlaySettings, list: &mut DrawList) {
        let corners = [
            self.origin,
            self.origin + NormalizedPoint::new(0.0, self.size.height),
            self.origin + NormalizedPoint::new(self.size.width, self.size.height),
            self.origin + NormalizedPoint::new(self.size.width, 0.0),
        ];
        let points = corners
            .iter()
            .map(|corner| corner.to_window(self.viewport))
            .collect();
        list.push(outline(points, hovered, settings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::SourcePoint;
    use crate::error::SourceError;
    use crate::source::{CommitSink, ViewportHost};

    struct Title {
        position: NormalizedPoint,
        read_only: bool,
    }

    impl TitleSource for Title {
        fn position(&self) -> NormalizedPoint {
            self.position
        }

        fn set_position(&mut self, position: NormalizedPoint) -> Result<(), SourceError> {
            if self.read_only {
                return Err(SourceError::ReadOnly("position"));
            }
            self.position = position;
            Ok(())
        }

        fn text_origin(&self) -> SourcePoint {
            SourcePoint::new(self.position.x * 1000.0, self.position.y * 500.0)
        }

        fn text_size(&self) -> SourceSize {
            SourceSize::new(200.0, 100.0)
        }
    }

    #[derive(Default)]
    struct Host {
        cursor: Option<CursorShape>,
    }

    impl ViewportHost for Host {
        fn set_cursor(&mut self, cursor: CursorShape) {
            self.cursor = Some(cursor);
        }

        fn reset_cursor(&mut self) {
            self.cursor = None;
        }

        fn request_redraw(&mut self) {}
    }

    struct Sink(usize);

    impl CommitSink for Sink {
        fn commit(&mut self) {
            self.0 += 1;
        }
    }

    fn run<R>(f: impl FnOnce(&mut OverlayEnv<'_>) -> R) -> (R, Host, usize) {
        let settings = OverlaySettings::default();
        let mut host = Host::default();
        let mut sink = Sink(0);
        let result = {
            let mut env = OverlayEnv {
                viewport: WindowSize::new(1000.0, 500.0),
                project_size: SourceSize::new(1000.0, 500.0),
                settings: &settings,
                host: &mut host,
                commit: &mut sink,
            };
            f(&mut env)
        };
        (result, host, sink.0)
    }

    #[test]
    fn box_follows_text_bounds() {
        let title = Title {
            position: NormalizedPoint::new(0.1, 0.2),
            read_only: false,
        };
        let (overlay, _, _) = run(|env| TitleOverlay::new(ClipId::new(), &title, env));
        assert!((overlay.origin().x - 0.1).abs() < 1e-12);
        assert!((overlay.origin().y - 0.2).abs() < 1e-12);
        assert_eq!(overlay.size(), NormalizedSize::new(0.2, 0.2));
    }

    #[test]
    fn drag_moves_position_by_normalized_distance() {
        let mut title = Title {
            position: NormalizedPoint::new(0.1, 0.2),
            read_only: false,
        };
        let ((), host, commits) = run(|env| {
            let mut overlay = TitleOverlay::new(ClipId::new(), &title, env);
            assert!(overlay.on_hover(WindowPoint::new(150.0, 150.0), true, env));
            assert_eq!(overlay.on_button_press(&title, true, env), PressOutcome::Select);
            overlay.on_motion(NormalizedPoint::new(0.25, 0.1), &mut title, env);
            assert!((overlay.origin().x - 0.35).abs() < 1e-12);
        });
        assert!((title.position.x - 0.35).abs() < 1e-12);
        assert!((title.position.y - 0.3).abs() < 1e-12);
        assert_eq!(host.cursor, Some(CursorShape::Grabbing));
        assert_eq!(commits, 1);
    }

    #[test]
    fn rejected_write_resyncs_box() {
        let mut title = Title {
            position: NormalizedPoint::new(0.1, 0.2),
            read_only: true,
        };
        run(|env| {
            let mut overlay = TitleOverlay::new(ClipId::new(), &title, env);
            overlay.on_hover(WindowPoint::new(150.0, 150.0), true, env);
            overlay.on_button_press(&title, true, env);
            overlay.on_motion(NormalizedPoint::new(0.25, 0.1), &mut title, env);
            assert!((overlay.origin().x - 0.1).abs() < 1e-12);
            assert!(overlay.is_dragging());
        });
    }

    #[test]
    fn press_outside_deselects_only_when_selected() {
        let title = Title {
            position: NormalizedPoint::new(0.1, 0.2),
            read_only: false,
        };
        run(|env| {
            let mut overlay = TitleOverlay::new(ClipId::new(), &title, env);
            assert!(!overlay.on_hover(WindowPoint::new(900.0, 450.0), true, env));
            assert_eq!(overlay.on_button_press(&title, true, env), PressOutcome::Deselect);
            assert_eq!(overlay.on_button_press(&title, false, env), PressOutcome::Ignored);
        });
    }
}
