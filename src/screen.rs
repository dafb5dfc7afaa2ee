//! The laptop "screen": a 2D image picked by section and redrawn as the
//! virtual scroll moves.
//!
//! [`render`] only builds a draw list. Painting it onto a canvas happens in
//! the wasm layer, which keeps this module deterministic and host-testable.

pub const CANVAS_SIZE: f32 = 512.0;

pub const TRACK_X: f32 = 40.0;
pub const TRACK_Y: f32 = CANVAS_SIZE - 60.0;
pub const TRACK_WIDTH: f32 = CANVAS_SIZE - 2.0 * TRACK_X;
pub const TRACK_HEIGHT: f32 = 12.0;
const BEZEL_HEIGHT: f32 = 30.0;

pub const TITLE: &str = "My Portfolio";
pub const SUBTITLE: &str = "Interactive 3D Experience";

/// Gradient used for one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisual {
    pub index: usize,
    pub stops: [(f32, &'static str); 2],
}

const SECTION_VISUALS: [SectionVisual; 4] = [
    // Home
    SectionVisual { index: 0, stops: [(0.0, "#667eea"), (1.0, "#764ba2")] },
    // Portfolio
    SectionVisual { index: 1, stops: [(0.0, "#ff6b6b"), (1.0, "#ee5a24")] },
    // About
    SectionVisual { index: 2, stops: [(0.0, "#11998e"), (1.0, "#38ef7d")] },
    // Contact
    SectionVisual { index: 3, stops: [(0.0, "#4facfe"), (1.0, "#00f2fe")] },
];

pub const DEFAULT_STOPS: [(f32, &str); 2] = [(0.0, "#6c63ff"), (1.0, "#4a45e6")];

/// Gradient stops for `index`, or [`DEFAULT_STOPS`] when unmapped.
pub fn gradient_for(index: usize) -> [(f32, &'static str); 2] {
    SECTION_VISUALS
        .iter()
        .find(|v| v.index == index)
        .map_or(DEFAULT_STOPS, |v| v.stops)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    LinearGradient {
        from: (f32, f32),
        to: (f32, f32),
        stops: [(f32, &'static str); 2],
    },
    FillRect {
        color: &'static str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Text {
        text: &'static str,
        font: &'static str,
        color: &'static str,
        align: TextAlign,
        x: f32,
        y: f32,
    },
}

/// One complete screen image as an ordered draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrame {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl ScreenFrame {
    /// Width of the filled part of the progress bar.
    pub fn progress_width(&self) -> Option<f32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::FillRect { color: "white", width, y, .. } if *y == TRACK_Y => {
                Some(*width)
            }
            _ => None,
        })
    }

    pub fn gradient(&self) -> Option<[(f32, &'static str); 2]> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::LinearGradient { stops, .. } => Some(*stops),
            _ => None,
        })
    }
}

/// Build the screen image for `section_index` with the progress bar at
/// `progress` (clamped to `[0, 1]`).
pub fn render(section_index: usize, progress: f32) -> ScreenFrame {
    let progress = progress.clamp(0.0, 1.0);
    let mid = CANVAS_SIZE / 2.0;
    ScreenFrame {
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        commands: vec![
            DrawCommand::Clear,
            DrawCommand::LinearGradient {
                from: (0.0, 0.0),
                to: (CANVAS_SIZE, CANVAS_SIZE),
                stops: gradient_for(section_index),
            },
            DrawCommand::Text {
                text: TITLE,
                font: "bold 36px Poppins, sans-serif",
                color: "white",
                align: TextAlign::Center,
                x: mid,
                y: mid - 40.0,
            },
            DrawCommand::Text {
                text: SUBTITLE,
                font: "20px Poppins, sans-serif",
                color: "white",
                align: TextAlign::Center,
                x: mid,
                y: mid + 20.0,
            },
            DrawCommand::FillRect {
                color: "rgba(255, 255, 255, 0.3)",
                x: TRACK_X,
                y: TRACK_Y,
                width: TRACK_WIDTH,
                height: TRACK_HEIGHT,
            },
            DrawCommand::FillRect {
                color: "white",
                x: TRACK_X,
                y: TRACK_Y,
                width: TRACK_WIDTH * progress,
                height: TRACK_HEIGHT,
            },
            // bezel shadow
            DrawCommand::FillRect {
                color: "rgba(0, 0, 0, 0.4)",
                x: 0.0,
                y: 0.0,
                width: CANVAS_SIZE,
                height: BEZEL_HEIGHT,
            },
        ],
    }
}

/// Last rendered screen plus a dirty flag for the GPU copy.
#[derive(Debug, Default)]
pub struct ScreenTexture {
    frame: Option<ScreenFrame>,
    needs_upload: bool,
}

impl ScreenTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-render; returns whether the image changed and now needs uploading.
    pub fn update(&mut self, section_index: usize, progress: f32) -> bool {
        let next = render(section_index, progress);
        if self.frame.as_ref() == Some(&next) {
            return false;
        }
        self.frame = Some(next);
        self.needs_upload = true;
        true
    }

    /// Force the next [`take_upload`](Self::take_upload) to hand out the
    /// current frame again.
    pub fn mark_dirty(&mut self) {
        if self.frame.is_some() {
            self.needs_upload = true;
        }
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    pub fn take_upload(&mut self) -> Option<&ScreenFrame> {
        if !self.needs_upload {
            return None;
        }
        self.needs_upload = false;
        self.frame.as_ref()
    }
}
