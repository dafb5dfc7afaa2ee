//! Frame-rate bookkeeping for the performance overlay.

/// Length of one FPS sampling window.
const WINDOW_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpsTier {
    Good,
    Fair,
    Poor,
}

impl FpsTier {
    pub fn of(fps: u32) -> Self {
        match fps {
            50.. => FpsTier::Good,
            30.. => FpsTier::Fair,
            _ => FpsTier::Poor,
        }
    }

    /// Overlay background for this tier.
    pub fn background(self) -> &'static str {
        match self {
            FpsTier::Good => "rgba(0, 0, 0, 0.8)",
            FpsTier::Fair => "rgba(255, 165, 0, 0.8)",
            FpsTier::Poor => "rgba(255, 0, 0, 0.8)",
        }
    }
}

/// Counts frames and publishes a rate once per window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window_start: Option<f64>,
    frames: u32,
    fps: u32,
    load_ms: Option<f64>,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: None,
            frames: 0,
            fps: 60,
            load_ms: None,
        }
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one frame; returns the new rate when a window just closed.
    pub fn record(&mut self, now_ms: f64) -> Option<u32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return None;
        };
        self.frames += 1;
        let elapsed = now_ms - start;
        if elapsed < WINDOW_MS {
            return None;
        }
        self.fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start = Some(now_ms);
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Scales idle animations down on slow devices; never above 1.
    pub fn animation_speed(&self) -> f32 {
        (self.fps as f32 / 60.0).min(1.0)
    }

    pub fn tier(&self) -> FpsTier {
        FpsTier::of(self.fps)
    }

    /// Remember how long the page took to come up, in ms since navigation.
    pub fn mark_loaded(&mut self, now_ms: f64) {
        self.load_ms = Some(now_ms);
    }

    /// Overlay text for the page load time, e.g. `Load: 1.25s`.
    pub fn load_label(&self) -> Option<String> {
        self.load_ms.map(|ms| format!("Load: {:.2}s", ms / 1000.0))
    }
}
