//! Integration tests for dragging the move/scale box through the stack.
//!
//! Every test goes hover → press → motion → release against in-memory
//! sources and checks the geometry written back to the clip.

mod common;

use common::{FakeVideo, Rig, assert_close};
use viewer_overlay::handle::{Corner, Edge, HandleSet};
use viewer_overlay::{
    ClipId, CursorShape, Overlay, OverlayState, SourcePoint, SourceSize, WindowSize,
};

fn handles(rig: &Rig, clip: ClipId) -> &HandleSet {
    match rig.stack.overlay(clip) {
        Some(Overlay::MoveScale(overlay)) => overlay.handles(),
        other => panic!("expected a move/scale overlay, got {other:?}"),
    }
}

fn assert_edges_are_midpoints(set: &HandleSet) {
    for edge in Edge::ALL {
        let (a, b) = edge.adjacent_corners();
        let a = set.get(a).position();
        let b = set.get(b).position();
        let actual = set.get(edge).position();
        assert_close(actual.x, (a.x + b.x) / 2.0);
        assert_close(actual.y, (a.y + b.y) / 2.0);
    }
}

/// Full-frame 1920x1080 clip shown in a 960x540 viewport, selected.
fn full_frame_rig() -> (Rig, ClipId) {
    let mut rig = Rig::new((1920.0, 1080.0), (960.0, 540.0));
    let clip = rig.add_video(FakeVideo::new(0.0, 0.0, 1920.0, 1080.0));
    rig.show(&[clip]);
    rig.select(clip);
    (rig, clip)
}

// ── Domain: Aspect Lock ──

#[test]
fn test_top_left_drag_keeps_source_aspect() {
    let (mut rig, clip) = full_frame_rig();

    // Normalized drag of (0.6, 0.45): x deviates less, so y follows x.
    rig.drag((0.0, 0.0), (576.0, 243.0));

    let video = rig.world.video(clip);
    assert_eq!(video.position, SourcePoint::new(1152.0, 648.0));
    assert_eq!(video.size, SourceSize::new(768.0, 432.0));
    assert_close(video.size.width / video.size.height, 16.0 / 9.0);
}

#[test]
fn test_corner_drag_sequence_never_breaks_aspect() {
    let (mut rig, clip) = full_frame_rig();
    rig.hover(960.0, 540.0);
    rig.press(960.0, 540.0);
    assert_eq!(
        rig.stack.state(clip),
        Some(OverlayState::HandleDragging(Corner::BottomRight.into()))
    );

    for (x, y) in [(700.0, 500.0), (500.0, 200.0), (900.0, 100.0), (300.0, 530.0), (10.0, 10.0)] {
        rig.drag_to(x, y);
        let Some(Overlay::MoveScale(overlay)) = rig.stack.overlay(clip) else {
            panic!("expected a move/scale overlay");
        };
        let (_, size) = overlay.source_geometry();
        assert_close(size.width / size.height, 16.0 / 9.0);
        assert_edges_are_midpoints(overlay.handles());
    }
    rig.release(10.0, 10.0);
}

// ── Domain: Minimal Size ──

#[test]
fn test_right_edge_clamps_to_minimal_width() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(250.0, 250.0, 500.0, 500.0));
    rig.show(&[clip]);
    rig.select(clip);

    // Right edge sits at (750, 500); drag it well past the left edge.
    rig.hover(750.0, 500.0);
    rig.press(750.0, 500.0);
    rig.drag_to(100.0, 500.0);

    let set = handles(&rig, clip);
    // 4 * minimal radius (5 px) over a 1000 px viewport.
    assert_close(set.width(), 0.02);
    assert_close(set.height(), 0.5);
    assert_edges_are_midpoints(set);

    let video = rig.world.video(clip);
    assert_eq!(video.size, SourceSize::new(20.0, 500.0));
    assert_eq!(video.position, SourcePoint::new(250.0, 250.0));

    // Dragging further does not move the clamp.
    rig.drag_to(0.0, 500.0);
    assert_close(handles(&rig, clip).width(), 0.02);
}

#[test]
fn test_corner_dragged_past_pivot_keeps_aspect_minimum() {
    let (mut rig, clip) = full_frame_rig();

    // Bottom-right corner sits at (960, 540); pull it far beyond the top-left.
    rig.hover(960.0, 540.0);
    rig.press(960.0, 540.0);
    rig.drag_to(-500.0, -500.0);

    let set = handles(&rig, clip);
    // The smaller window side stops at 4 * minimal radius (5 px).
    assert_close(set.height() * 540.0, 20.0);
    assert_close(set.width() * 960.0, 20.0 * 16.0 / 9.0);
    assert_close((set.width() * 1920.0) / (set.height() * 1080.0), 16.0 / 9.0);
    assert_edges_are_midpoints(set);

    let video = rig.world.video(clip);
    assert_eq!(video.position, SourcePoint::new(0.0, 0.0));
    assert_eq!(video.size, SourceSize::new(71.0, 40.0));

    // Further motion stays on the clamp.
    rig.drag_to(-900.0, -100.0);
    assert_close(handles(&rig, clip).height() * 540.0, 20.0);
    rig.release(-900.0, -100.0);
}

#[test]
fn test_left_edge_moves_source_origin() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(250.0, 250.0, 500.0, 500.0));
    rig.show(&[clip]);
    rig.select(clip);

    rig.drag((250.0, 500.0), (350.0, 800.0));

    let video = rig.world.video(clip);
    assert_eq!(video.position, SourcePoint::new(350.0, 250.0));
    assert_eq!(video.size, SourceSize::new(400.0, 500.0));
}

// ── Domain: Box Drag ──

#[test]
fn test_box_drag_moves_position_only() {
    let mut rig = Rig::new((1000.0, 1000.0), (500.0, 500.0));
    let clip = rig.add_video(FakeVideo::new(100.0, 100.0, 400.0, 400.0));
    rig.show(&[clip]);

    // Box covers window (50, 50)-(250, 250).
    rig.hover(150.0, 150.0);
    assert_eq!(rig.world.host.cursor, Some(CursorShape::Grab));
    rig.press(150.0, 150.0);
    assert_eq!(rig.world.host.cursor, Some(CursorShape::Grabbing));
    assert_eq!(rig.stack.state(clip), Some(OverlayState::BoxDragging));

    rig.drag_to(250.0, 200.0);
    rig.release(250.0, 200.0);

    let video = rig.world.video(clip);
    assert_eq!(video.position, SourcePoint::new(300.0, 200.0));
    assert_eq!(video.size, SourceSize::new(400.0, 400.0));
    assert_eq!(rig.stack.state(clip), Some(OverlayState::Selected));
    assert_eq!(rig.world.host.cursor, Some(CursorShape::Grab));
}

#[test]
fn test_press_on_box_selects_without_moving() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(100.0, 100.0, 400.0, 400.0));
    rig.show(&[clip]);

    rig.hover(300.0, 300.0);
    rig.press(300.0, 300.0);
    rig.release(300.0, 300.0);

    assert_eq!(rig.stack.selected(), Some(clip));
    assert_eq!(rig.world.host.selections, vec![Some(clip)]);
    assert_eq!(rig.world.video(clip).writes, 0);
    assert_eq!(rig.world.sink.commits, 0);
}

// ── Domain: Source Sync ──

#[test]
fn test_update_from_source_round_trips() {
    let mut rig = Rig::new((1920.0, 1080.0), (800.0, 450.0));
    let clip = rig.add_video(FakeVideo::new(120.0, 80.0, 640.0, 360.0));
    rig.show(&[clip]);

    let Some(Overlay::MoveScale(overlay)) = rig.stack.overlay(clip) else {
        panic!("expected a move/scale overlay");
    };
    assert_eq!(overlay.stream_size(), SourceSize::new(640.0, 360.0));
    let (position, size) = overlay.source_geometry();
    assert_close(position.x, 120.0);
    assert_close(position.y, 80.0);
    assert_close(size.width, 640.0);
    assert_close(size.height, 360.0);
    assert_edges_are_midpoints(overlay.handles());
}

#[test]
fn test_external_change_is_picked_up_by_update() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(0.0, 0.0, 500.0, 500.0));
    rig.show(&[clip]);

    rig.world.video_mut(clip).size = SourceSize::new(200.0, 100.0);
    rig.stack
        .update(clip, &mut rig.world.collab())
        .expect("overlay exists");

    let set = handles(&rig, clip);
    assert_close(set.width(), 0.2);
    assert_close(set.height(), 0.1);
}

#[test]
fn test_rejected_size_resyncs_and_keeps_dragging() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(0.0, 0.0, 500.0, 500.0));
    rig.world.video_mut(clip).reject_size = true;
    rig.show(&[clip]);
    rig.select(clip);

    rig.hover(500.0, 500.0);
    rig.press(500.0, 500.0);
    rig.drag_to(800.0, 800.0);

    assert_close(handles(&rig, clip).width(), 0.5);
    assert_eq!(rig.world.video(clip).size, SourceSize::new(500.0, 500.0));
    assert_eq!(
        rig.stack.state(clip),
        Some(OverlayState::HandleDragging(Corner::BottomRight.into()))
    );
    assert_eq!(rig.world.sink.commits, 1);
}

#[test]
fn test_resize_rederives_window_positions() {
    let mut rig = Rig::new((1000.0, 1000.0), (500.0, 500.0));
    let clip = rig.add_video(FakeVideo::new(100.0, 100.0, 400.0, 400.0));
    rig.show(&[clip]);
    let top_left = handles(&rig, clip).get(Corner::TopLeft).window_position();
    assert_close(top_left.x, 50.0);
    assert_close(top_left.y, 50.0);

    rig.stack
        .on_resize(WindowSize::new(1000.0, 1000.0), &mut rig.world.collab());
    let top_left = handles(&rig, clip).get(Corner::TopLeft).window_position();
    assert_close(top_left.x, 100.0);
    assert_close(top_left.y, 100.0);
}

// ── Domain: Cancel ──

#[test]
fn test_cancel_restores_click_time_geometry() {
    let mut rig = Rig::new((1000.0, 1000.0), (1000.0, 1000.0));
    let clip = rig.add_video(FakeVideo::new(0.0, 0.0, 500.0, 500.0));
    rig.show(&[clip]);
    rig.select(clip);

    rig.hover(0.0, 0.0);
    rig.press(0.0, 0.0);
    rig.drag_to(200.0, 200.0);
    assert_eq!(rig.world.video(clip).position, SourcePoint::new(200.0, 200.0));

    assert!(rig.stack.cancel_drag(&mut rig.world.collab()));
    let video = rig.world.video(clip);
    assert_eq!(video.position, SourcePoint::new(0.0, 0.0));
    assert_eq!(video.size, SourceSize::new(500.0, 500.0));
    assert_eq!(rig.stack.state(clip), Some(OverlayState::Selected));
    assert!(!rig.stack.is_dragging());

    // Nothing left to cancel; motion is plain hover again.
    assert!(!rig.stack.cancel_drag(&mut rig.world.collab()));
    rig.drag_to(300.0, 300.0);
    assert_eq!(rig.world.video(clip).position, SourcePoint::new(0.0, 0.0));
}
