use eframe::egui::Color32;
use log::debug;
use viewer_overlay::{
    ClipId, NormalizedPoint, SourceError, SourcePoint, SourceRef, SourceRegistry, SourceSize,
    TitleSource, VideoSource,
};

pub struct DemoVideo {
    pub position: SourcePoint,
    pub size: SourceSize,
    pub stream_size: SourceSize,
    pub color: Color32,
}

impl VideoSource for DemoVideo {
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
        self.position = position;
        Ok(())
    }

    fn set_size(&mut self, size: SourceSize) -> Result<(), SourceError> {
        if size.width < 1.0 || size.height < 1.0 {
            return Err(SourceError::Rejected {
                property: "size",
                reason: format!("{}x{} is below one pixel", size.width, size.height),
            });
        }
        self.size = size;
        Ok(())
    }
}

pub struct DemoTitle {
    pub text: String,
    pub font_size: f64,
    pub position: NormalizedPoint,
    pub color: Color32,
    project_size: SourceSize,
}

impl DemoTitle {
    /// Rough advance per glyph; good enough for a monospace-ish demo font.
    const GLYPH_WIDTH: f64 = 0.6;
    const LINE_HEIGHT: f64 = 1.2;
}

impl TitleSource for DemoTitle {
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
        let glyphs = self.text.chars().count() as f64;
        SourceSize::new(
            glyphs * self.font_size * Self::GLYPH_WIDTH,
            self.font_size * Self::LINE_HEIGHT,
        )
    }
}

pub enum ClipContent {
    Video(DemoVideo),
    Title(DemoTitle),
}

pub struct DemoClip {
    pub id: ClipId,
    pub name: String,
    pub enabled: bool,
    pub content: ClipContent,
}

/// In-memory stand-in for the composited project.
pub struct Composition {
    pub project_size: SourceSize,
    pub clips: Vec<DemoClip>,
}

impl Composition {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            project_size: SourceSize::new(width, height),
            clips: Vec::new(),
        }
    }

    pub fn add_video(
        &mut self,
        name: &str,
        position: SourcePoint,
        size: SourceSize,
        color: Color32,
    ) -> ClipId {
        self.push(
            name,
            ClipContent::Video(DemoVideo {
                position,
                size,
                stream_size: size,
                color,
            }),
        )
    }

    pub fn add_title(
        &mut self,
        text: &str,
        font_size: f64,
        position: NormalizedPoint,
        color: Color32,
    ) -> ClipId {
        let project_size = self.project_size;
        self.push(
            text,
            ClipContent::Title(DemoTitle {
                text: text.to_string(),
                font_size,
                position,
                color,
                project_size,
            }),
        )
    }

    fn push(&mut self, name: &str, content: ClipContent) -> ClipId {
        let id = ClipId::new();
        debug!("Added clip {} ({})", name, id);
        self.clips.push(DemoClip {
            id,
            name: name.to_string(),
            enabled: true,
            content,
        });
        id
    }

    /// A 1920x1080 project with two videos and a title.
    pub fn demo() -> Self {
        let mut composition = Self::new(1920.0, 1080.0);
        composition.add_video(
            "Background",
            SourcePoint::new(0.0, 0.0),
            SourceSize::new(1920.0, 1080.0),
            Color32::from_rgb(40, 70, 110),
        );
        composition.add_video(
            "Picture in picture",
            SourcePoint::new(1200.0, 80.0),
            SourceSize::new(640.0, 360.0),
            Color32::from_rgb(180, 90, 40),
        );
        composition.add_title(
            "Hello overlay",
            96.0,
            NormalizedPoint::new(0.1, 0.75),
            Color32::WHITE,
        );
        composition
    }

    pub fn enabled_clips(&self) -> Vec<ClipId> {
        self.clips
            .iter()
            .filter(|clip| clip.enabled)
            .map(|clip| clip.id)
            .collect()
    }
}

impl SourceRegistry for Composition {
    fn project_size(&self) -> SourceSize {
        self.project_size
    }

    fn source_mut(&mut self, clip: ClipId) -> Option<SourceRef<'_>> {
        let clip = self.clips.iter_mut().find(|c| c.id == clip)?;
        Some(match &mut clip.content {
            ClipContent::Video(video) => SourceRef::Video(video),
            ClipContent::Title(title) => SourceRef::Title(title),
        })
    }
}
