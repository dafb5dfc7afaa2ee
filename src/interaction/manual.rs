//! Drag-to-rotate the model itself, for pages that opt out of orbiting.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use crate::scene::ModelTransform;

pub const ROTATION_SPEED: f32 = 0.01;
pub const MAX_TILT: f32 = FRAC_PI_4;
pub const MAX_TURN: f32 = FRAC_PI_4 * 2.0;
/// Radians per frame of idle spin at full animation speed.
pub const IDLE_SPIN: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    fn speed_factor(self) -> f32 {
        match self {
            PointerKind::Mouse => 1.0,
            PointerKind::Touch => 0.5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManualControls {
    drag: Option<PointerKind>,
    last_pointer: Vec2,
    /// Rotation accumulated by pointer moves since the last frame.
    pending: Vec2,
}

impl ManualControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, x: f32, y: f32, kind: PointerKind) {
        self.drag = Some(kind);
        self.last_pointer = Vec2::new(x, y);
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        let Some(kind) = self.drag else {
            return;
        };
        let pos = Vec2::new(x, y);
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        let speed = ROTATION_SPEED * kind.speed_factor();
        // vertical drag tilts at half rate
        self.pending += Vec2::new(delta.x * speed, delta.y * speed * 0.5);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// `idle_spin` carries the speed factor while the model is left alone.
    pub fn update(&mut self, idle_spin: Option<f32>, model: &mut ModelTransform) {
        if self.pending != Vec2::ZERO {
            model.rotation.y = (model.rotation.y + self.pending.x).clamp(-MAX_TURN, MAX_TURN);
            model.rotation.x = (model.rotation.x + self.pending.y).clamp(-MAX_TILT, MAX_TILT);
            self.pending = Vec2::ZERO;
        }
        if let Some(speed) = idle_spin.filter(|_| self.drag.is_none()) {
            model.rotation.y += IDLE_SPIN * speed;
        }
    }
}
