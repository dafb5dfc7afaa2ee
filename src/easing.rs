//! Easing curves and a small time-based tween.

/// Easing curve variants used by page and camera animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    Power2Out,
    /// Cubic ease-out.
    Power3Out,
}

impl Easing {
    /// Evaluate at `t`, clamped to `[0, 1]`.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let omt = 1.0 - t;
        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - omt * omt,
            Easing::Power3Out => 1.0 - omt * omt * omt,
        }
    }
}

/// Interpolates between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

/// Values a [`Tween`] can blend.
pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for glam::Vec3 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now_ms: f64) -> T {
        let t = self.easing.evaluate(self.progress(now_ms));
        self.from.lerp_to(self.to, t)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for e in [Easing::Linear, Easing::Power2Out, Easing::Power3Out] {
            assert_eq!(e.evaluate(0.0), 0.0);
            assert_eq!(e.evaluate(1.0), 1.0);
            assert_eq!(e.evaluate(-3.0), 0.0);
            assert_eq!(e.evaluate(2.0), 1.0);
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert_eq!(Easing::Power2Out.evaluate(0.5), 0.75);
        assert!(Easing::Power3Out.evaluate(0.5) > Easing::Power2Out.evaluate(0.5));
    }

    #[test]
    fn tween_samples_over_duration() {
        let tw = Tween::new(0.0_f32, 10.0, 100.0, 1000.0, Easing::Linear);
        assert_eq!(tw.sample(0.0), 0.0);
        assert_eq!(tw.sample(600.0), 5.0);
        assert_eq!(tw.sample(5000.0), 10.0);
        assert!(tw.is_finished(1100.0));
        assert!(!tw.is_finished(1099.0));
    }
}
