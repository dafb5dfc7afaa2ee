//! Pointer interaction with the laptop model.
//!
//! Two control schemes share one idle timer and are stepped from the single
//! page frame loop: [`OrbitControls`] moves the camera, [`ManualControls`]
//! rotates the model.

mod idle;
mod manual;
mod orbit;

pub use idle::IdleTimer;
pub use manual::{ManualControls, PointerKind, IDLE_SPIN, MAX_TILT, MAX_TURN};
pub use orbit::{OrbitControls, MAX_DISTANCE, MAX_POLAR, MIN_DISTANCE, MIN_POLAR};

use crate::camera::Camera;
use crate::config::{InteractionConfig, InteractionMode};
use crate::scene::ModelTransform;

#[derive(Debug, Clone)]
pub enum Controls {
    Orbit(OrbitControls),
    Manual(ManualControls),
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    controls: Controls,
    idle: IdleTimer,
    auto_rotate: bool,
}

impl InteractionController {
    pub fn new(cfg: &InteractionConfig, camera: &Camera) -> Self {
        let controls = match cfg.mode {
            InteractionMode::Orbit => Controls::Orbit(OrbitControls::new(camera)),
            InteractionMode::Manual => Controls::Manual(ManualControls::new()),
        };
        log::info!("interaction mode: {:?}", cfg.mode);
        Self {
            controls,
            idle: IdleTimer::new(cfg.idle_delay_ms),
            auto_rotate: cfg.auto_rotate,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        match self.controls {
            Controls::Orbit(_) => InteractionMode::Orbit,
            Controls::Manual(_) => InteractionMode::Manual,
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn resize(&mut self, _width: f32, height: f32) {
        if let Controls::Orbit(orbit) = &mut self.controls {
            orbit.resize(height);
        }
    }

    /// `pan` selects panning instead of rotation (secondary button); only the
    /// orbit scheme pans.
    pub fn pointer_down(&mut self, x: f32, y: f32, kind: PointerKind, pan: bool) {
        self.idle.engage();
        match &mut self.controls {
            Controls::Orbit(orbit) => orbit.begin_drag(x, y, pan),
            Controls::Manual(manual) => manual.begin_drag(x, y, kind),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        match &mut self.controls {
            Controls::Orbit(orbit) => orbit.drag_to(x, y),
            Controls::Manual(manual) => manual.drag_to(x, y),
        }
    }

    /// Orbit keeps the idle timer engaged until the pointer leaves the
    /// canvas; manual controls start the idle delay right away.
    pub fn pointer_up(&mut self, now_ms: f64) {
        match &mut self.controls {
            Controls::Orbit(orbit) => orbit.end_drag(),
            Controls::Manual(manual) => {
                manual.end_drag();
                self.idle.release(now_ms);
            }
        }
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.end(now_ms);
    }

    /// Touch has no leave event, so lifting the finger releases idle too.
    pub fn touch_end(&mut self, now_ms: f64) {
        self.end(now_ms);
    }

    fn end(&mut self, now_ms: f64) {
        self.idle.release(now_ms);
        match &mut self.controls {
            Controls::Orbit(orbit) => orbit.end_drag(),
            Controls::Manual(manual) => manual.end_drag(),
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if let Controls::Orbit(orbit) = &mut self.controls {
            orbit.wheel(delta_y);
        }
    }

    pub fn double_click(&mut self, camera: &Camera, now_ms: f64) {
        if let Controls::Orbit(orbit) = &mut self.controls {
            orbit.reset_view(camera, now_ms);
        }
    }

    pub fn is_dragging(&self) -> bool {
        match &self.controls {
            Controls::Orbit(orbit) => orbit.is_dragging(),
            Controls::Manual(manual) => manual.is_dragging(),
        }
    }

    /// Whether automatic motion runs this frame.
    pub fn is_auto_rotating(&self, now_ms: f64) -> bool {
        self.auto_rotate && self.idle.is_idle(now_ms)
    }

    /// Step once per animation frame. `animation_speed` scales automatic
    /// motion (see [`FrameStats::animation_speed`](crate::stats::FrameStats::animation_speed)).
    pub fn update(
        &mut self,
        now_ms: f64,
        animation_speed: f32,
        camera: &mut Camera,
        model: &mut ModelTransform,
    ) {
        let auto = self.is_auto_rotating(now_ms).then_some(animation_speed);
        match &mut self.controls {
            Controls::Orbit(orbit) => orbit.update(now_ms, auto, camera),
            Controls::Manual(manual) => manual.update(auto, model),
        }
    }
}
