/// Tracks whether the user has left the model alone long enough for
/// automatic motion to resume.
///
/// Idle until the first interaction; not idle while a pointer is engaged;
/// idle again `delay_ms` after the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleTimer {
    delay_ms: f64,
    engaged: bool,
    released_at: Option<f64>,
}

impl IdleTimer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            engaged: false,
            released_at: None,
        }
    }

    pub fn engage(&mut self) {
        self.engaged = true;
    }

    /// End an interaction. Releasing without a prior engage is ignored so a
    /// stray `pointerleave` cannot postpone idle motion.
    pub fn release(&mut self, now_ms: f64) {
        if self.engaged {
            self.engaged = false;
            self.released_at = Some(now_ms);
        }
    }

    pub fn is_idle(&self, now_ms: f64) -> bool {
        !self.engaged && self.released_at.map_or(true, |t| now_ms - t >= self.delay_ms)
    }
}
