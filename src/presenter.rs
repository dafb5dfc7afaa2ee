//! Per-page animation state, owned by the page and stepped once per frame.

use crate::config::PortfolioConfig;
use crate::screen::ScreenTexture;
use crate::scroll::{ScrollSynchronizer, ScrollTick, SectionEmphasis};
use crate::stats::FrameStats;

/// What one call to [`Presenter::frame`] changed.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Fresh per-section emphasis when the scroll position moved.
    pub emphasis: Option<Vec<SectionEmphasis>>,
    /// The screen texture holds a new image to upload.
    pub screen_dirty: bool,
    /// A new FPS value was measured this frame.
    pub fps: Option<u32>,
    /// The scene should be drawn this frame.
    pub render: bool,
}

#[derive(Debug)]
pub struct Presenter {
    scroll: ScrollSynchronizer,
    screen: ScreenTexture,
    stats: FrameStats,
    visible: bool,
    force_redraw: bool,
    /// Section whose heading last played its entrance animation.
    entered: Option<usize>,
}

impl Presenter {
    pub fn new(config: &PortfolioConfig) -> Self {
        let mut screen = ScreenTexture::new();
        let _ = screen.update(0, 0.0);
        Self {
            scroll: ScrollSynchronizer::new(config.scroll.total_sections, config.scroll.scroll_speed),
            screen,
            stats: FrameStats::new(),
            visible: true,
            force_redraw: true,
            entered: None,
        }
    }

    /// A section became current; returns the navigation bar fill percent.
    pub fn on_section_change(&mut self, index: usize) -> f32 {
        log::debug!("section change -> {index}");
        self.scroll.set_target(index);
        self.scroll.navigation_progress(index)
    }

    /// Redraw the screen on the next frame even if nothing moved.
    pub fn invalidate(&mut self) {
        self.force_redraw = true;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let fps = self.stats.record(now_ms);
        let moved = self.scroll.tick() == ScrollTick::Moved;
        let redraw = moved || std::mem::take(&mut self.force_redraw);

        let mut screen_dirty = false;
        if redraw {
            screen_dirty = self
                .screen
                .update(self.scroll.active_index(), self.scroll.fractional_progress());
            if !screen_dirty && !moved {
                self.screen.mark_dirty();
                screen_dirty = true;
            }
        }

        FrameReport {
            emphasis: moved.then(|| self.scroll.emphasis()),
            screen_dirty,
            fps,
            render: self.visible,
        }
    }

    /// Returns the section whose heading should play its entrance animation,
    /// once per change of active section.
    pub fn take_heading_entrance(&mut self) -> Option<usize> {
        let active = self.scroll.active_index();
        if self.entered == Some(active) {
            return None;
        }
        self.entered = Some(active);
        Some(active)
    }

    pub fn scroll(&self) -> &ScrollSynchronizer {
        &self.scroll
    }

    pub fn screen_mut(&mut self) -> &mut ScreenTexture {
        &mut self.screen
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn mark_loaded(&mut self, now_ms: f64) {
        self.stats.mark_loaded(now_ms);
    }
}
