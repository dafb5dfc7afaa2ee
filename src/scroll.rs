//! Virtual scroll position shared between page sections and the laptop screen.
//!
//! A section change only moves the *target*; the *current* position chases it
//! a fixed fraction per frame, so it approaches exponentially and never lands
//! exactly on an integer. Updates stop once the gap drops under
//! [`SETTLE_THRESHOLD`].

/// Distance below which the current section counts as arrived.
pub const SETTLE_THRESHOLD: f32 = 0.01;

/// Opacity of a section that is a full step or more away from the current one.
pub const OPACITY_FLOOR: f32 = 0.7;
pub const OPACITY_CEILING: f32 = 1.0;
/// Vertical offset in px applied to a fully inactive section.
pub const INACTIVE_OFFSET_Y: f32 = 50.0;
pub const INACTIVE_SCALE: f32 = 0.95;

/// Half-height in px of the band around a section midpoint that counts as
/// "most visible" for scroll-position detection.
const DETECT_BAND: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub current_section: f32,
    pub target_section: f32,
    pub scroll_speed: f32,
    pub total_sections: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTick {
    /// The current section advanced this tick.
    Moved,
    /// Already within [`SETTLE_THRESHOLD`] of the target; nothing changed.
    Settled,
}

/// How strongly one section should be shown for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionEmphasis {
    pub index: usize,
    /// 1.0 when the section is exactly current, 0.0 a full step or more away.
    pub progress: f32,
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    state: ScrollState,
}

impl ScrollSynchronizer {
    pub fn new(total_sections: usize, scroll_speed: f32) -> Self {
        Self {
            state: ScrollState {
                current_section: 0.0,
                target_section: 0.0,
                scroll_speed,
                total_sections,
            },
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Record `index` as the section to approach.
    ///
    /// Indices outside `0..total_sections` are kept as given; they only show
    /// up in the log and in the default screen gradient.
    pub fn set_target(&mut self, index: usize) {
        if index >= self.state.total_sections {
            log::warn!(
                "section index {index} outside 0..{}",
                self.state.total_sections
            );
        }
        self.state.target_section = index as f32;
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) -> ScrollTick {
        let s = &mut self.state;
        let gap = s.target_section - s.current_section;
        if gap.abs() <= SETTLE_THRESHOLD {
            return ScrollTick::Settled;
        }
        s.current_section += gap * s.scroll_speed;
        ScrollTick::Moved
    }

    pub fn distance(&self) -> f32 {
        (self.state.target_section - self.state.current_section).abs()
    }

    /// Nearest section to the current position.
    pub fn active_index(&self) -> usize {
        self.state.current_section.round().max(0.0) as usize
    }

    /// Fractional part of the current position, in `[0, 1)`.
    pub fn fractional_progress(&self) -> f32 {
        self.state.current_section.rem_euclid(1.0)
    }

    pub fn emphasis(&self) -> Vec<SectionEmphasis> {
        let current = self.state.current_section;
        let active = self.active_index();
        (0..self.state.total_sections)
            .map(|index| {
                let distance = (index as f32 - current).abs();
                let progress = 1.0 - distance.min(1.0);
                let is_active = index == active;
                SectionEmphasis {
                    index,
                    progress,
                    opacity: OPACITY_FLOOR + (OPACITY_CEILING - OPACITY_FLOOR) * progress,
                    offset_y: (1.0 - progress) * INACTIVE_OFFSET_Y,
                    scale: if is_active { 1.0 } else { INACTIVE_SCALE },
                    active: is_active,
                }
            })
            .collect()
    }

    /// Percent fill of the navigation progress bar for `section`.
    pub fn navigation_progress(&self, section: usize) -> f32 {
        let last = self.state.total_sections.saturating_sub(1).max(1);
        (section as f32 / last as f32 * 100.0).min(100.0)
    }
}

/// Vertical extent of one section element, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Section whose midpoint sits within the detection band around the
/// viewport midpoint, if any.
pub fn section_at(scroll_y: f64, viewport_height: f64, sections: &[SectionBounds]) -> Option<usize> {
    let focus = scroll_y + viewport_height / 2.0;
    sections.iter().position(|s| {
        let middle = s.top + s.height / 2.0;
        focus >= middle - DETECT_BAND && focus < middle + DETECT_BAND
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_tick_does_not_move() {
        let mut sync = ScrollSynchronizer::new(4, 0.1);
        assert_eq!(sync.tick(), ScrollTick::Settled);
        assert_eq!(sync.state().current_section, 0.0);
    }

    #[test]
    fn one_tick_covers_scroll_speed_fraction() {
        let mut sync = ScrollSynchronizer::new(4, 0.1);
        sync.set_target(2);
        assert_eq!(sync.tick(), ScrollTick::Moved);
        assert!((sync.state().current_section - 0.2).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_target_is_kept() {
        let mut sync = ScrollSynchronizer::new(4, 0.1);
        sync.set_target(7);
        assert_eq!(sync.state().target_section, 7.0);
    }
}
