//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use viewer_overlay::{
    ClipId, Collaborators, CommitSink, CursorShape, NormalizedPoint, OverlayStack, SourceError,
    SourcePoint, SourceRef, SourceRegistry, SourceSize, TitleSource, VideoSource, ViewportHost,
    WindowPoint, WindowSize,
};

pub struct FakeVideo {
    pub position: SourcePoint,
    pub size: SourceSize,
    pub stream_size: SourceSize,
    pub reject_size: bool,
    pub writes: usize,
}

impl FakeVideo {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: SourcePoint::new(x, y),
            size: SourceSize::new(width, height),
            stream_size: SourceSize::new(width, height),
            reject_size: false,
            writes: 0,
        }
    }
}

impl VideoSource for FakeVideo {
    fn position(&self) -> SourcePoint {
        self.position
    }

    fn size(&self) -> SourceSize {
        self.size
    }

    fn stream_size(&self) -> SourceSize {
        self.stream_size
    }

    fn set_position(&mut self, position: SourcePoint) -> Result<(), SourceError> {
        self.writes += 1;
        self.position = position;
        Ok(())
    }

    fn set_size(&mut self, size: SourceSize) -> Result<(), SourceError> {
        self.writes += 1;
        if self.reject_size {
            return Err(SourceError::Rejected {
                property: "size",
                reason: "locked".to_string(),
            });
        }
        self.size = size;
        Ok(())
    }
}

/// Title whose text box starts at its anchor.
pub struct FakeTitle {
    pub position: NormalizedPoint,
    pub text_size: SourceSize,
    pub project_size: SourceSize,
}

impl TitleSource for FakeTitle {
    fn position(&self) -> NormalizedPoint {
        self.position
    }

    fn set_position(&mut self, position: NormalizedPoint) -> Result<(), SourceError> {
        self.position = position;
        Ok(())
    }

    fn text_origin(&self) -> SourcePoint {
        self.position.to_source(self.project_size)
    }

    fn text_size(&self) -> SourceSize {
        self.text_size
    }
}

pub struct FakeComposition {
    pub project_size: SourceSize,
    pub videos: HashMap<ClipId, FakeVideo>,
    pub titles: HashMap<ClipId, FakeTitle>,
}

impl SourceRegistry for FakeComposition {
    fn project_size(&self) -> SourceSize {
        self.project_size
    }

    fn source_mut(&mut self, clip: ClipId) -> Option<SourceRef<'_>> {
        if let Some(video) = self.videos.get_mut(&clip) {
            return Some(SourceRef::Video(video));
        }
        self.titles
            .get_mut(&clip)
            .map(|title| SourceRef::Title(title as &mut dyn TitleSource))
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub cursor: Option<CursorShape>,
    pub redraws: usize,
    pub selections: Vec<Option<ClipId>>,
}

impl ViewportHost for RecordingHost {
    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = Some(cursor);
    }

    fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn selection_changed(&mut self, clip: Option<ClipId>) {
        self.selections.push(clip);
    }
}

#[derive(Default)]
pub struct CountingSink {
    pub commits: usize,
}

impl CommitSink for CountingSink {
    fn commit(&mut self) {
        self.commits += 1;
    }
}

pub struct World {
    pub composition: FakeComposition,
    pub host: RecordingHost,
    pub sink: CountingSink,
}

impl World {
    pub fn collab(&mut self) -> Collaborators<'_> {
        Collaborators::new(&mut self.composition, &mut self.host, &mut self.sink)
    }

    pub fn video(&self, clip: ClipId) -> &FakeVideo {
        &self.composition.videos[&clip]
    }

    pub fn video_mut(&mut self, clip: ClipId) -> &mut FakeVideo {
        self.composition
            .videos
            .get_mut(&clip)
            .expect("video registered")
    }

    pub fn title(&self, clip: ClipId) -> &FakeTitle {
        &self.composition.titles[&clip]
    }
}

pub struct Rig {
    pub stack: OverlayStack,
    pub world: World,
}

impl Rig {
    pub fn new(project: (f64, f64), viewport: (f64, f64)) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rig = Self {
            stack: OverlayStack::default(),
            world: World {
                composition: FakeComposition {
                    project_size: SourceSize::new(project.0, project.1),
                    videos: HashMap::new(),
                    titles: HashMap::new(),
                },
                host: RecordingHost::default(),
                sink: CountingSink::default(),
            },
        };
        rig.stack.on_resize(
            WindowSize::new(viewport.0, viewport.1),
            &mut rig.world.collab(),
        );
        rig
    }

    pub fn add_video(&mut self, video: FakeVideo) -> ClipId {
        let clip = ClipId::new();
        self.world.composition.videos.insert(clip, video);
        clip
    }

    pub fn add_title(&mut self, x: f64, y: f64, width: f64, height: f64) -> ClipId {
        let clip = ClipId::new();
        let project_size = self.world.composition.project_size;
        self.world.composition.titles.insert(
            clip,
            FakeTitle {
                position: NormalizedPoint::new(x, y),
                text_size: SourceSize::new(width, height),
                project_size,
            },
        );
        clip
    }

    pub fn show(&mut self, clips: &[ClipId]) {
        self.stack.set_current_sources(clips, &mut self.world.collab());
    }

    pub fn select(&mut self, clip: ClipId) {
        self.stack
            .select(clip, &mut self.world.collab())
            .expect("clip is registered");
    }

    pub fn hover(&mut self, x: f64, y: f64) {
        self.stack
            .on_motion(WindowPoint::new(x, y), &mut self.world.collab());
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.stack
            .on_button_press(WindowPoint::new(x, y), &mut self.world.collab());
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.stack
            .on_motion(WindowPoint::new(x, y), &mut self.world.collab());
    }

    pub fn release(&mut self, x: f64, y: f64) {
        self.stack
            .on_button_release(WindowPoint::new(x, y), &mut self.world.collab());
    }

    /// Hover, press, move and release in one go.
    pub fn drag(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.hover(from.0, from.1);
        self.press(from.0, from.1);
        self.drag_to(to.0, to.1);
        self.release(to.0, to.1);
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
