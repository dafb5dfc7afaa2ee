//! Damped orbit camera around a target point.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::camera::{Camera, DEFAULT_EYE};
use crate::easing::{Easing, Tween};

pub const MIN_POLAR: f32 = PI / 6.0;
pub const MAX_POLAR: f32 = PI / 2.2;
pub const MIN_DISTANCE: f32 = 4.0;
pub const MAX_DISTANCE: f32 = 10.0;

const RESET_DURATION_MS: f64 = 1000.0;

/// Polar coordinates of the eye relative to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Azimuth around +Y, measured from +Z.
    theta: f32,
    /// Angle down from +Y.
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self { radius, theta: 0.0, phi: 0.0 };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Rotate,
    Pan,
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    target: Vec3,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
    pan_offset: Vec3,

    drag: Option<Drag>,
    last_pointer: (f32, f32),
    viewport_height: f32,

    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub auto_rotate_speed: f32,

    reset: Option<(Tween<Vec3>, Tween<Vec3>)>,
}

impl OrbitControls {
    pub fn new(camera: &Camera) -> Self {
        Self {
            target: camera.target,
            spherical: Spherical::from_offset(camera.eye - camera.target),
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
            pan_offset: Vec3::ZERO,
            drag: None,
            last_pointer: (0.0, 0.0),
            viewport_height: 1.0,
            damping_factor: 0.08,
            rotate_speed: 0.4,
            zoom_speed: 0.6,
            pan_speed: 0.3,
            auto_rotate_speed: 0.3,
            reset: None,
        }
    }

    pub fn resize(&mut self, height: f32) {
        if height > 0.0 {
            self.viewport_height = height;
        }
    }

    pub fn begin_drag(&mut self, x: f32, y: f32, pan: bool) {
        self.drag = Some(if pan { Drag::Pan } else { Drag::Rotate });
        self.last_pointer = (x, y);
        self.reset = None;
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        let Some(drag) = self.drag else {
            return;
        };
        let dx = x - self.last_pointer.0;
        let dy = y - self.last_pointer.1;
        self.last_pointer = (x, y);
        match drag {
            Drag::Rotate => {
                self.delta_theta -= TAU * dx / self.viewport_height * self.rotate_speed;
                self.delta_phi -= TAU * dy / self.viewport_height * self.rotate_speed;
            }
            Drag::Pan => {
                let offset = self.spherical.to_offset();
                let forward = (-offset).normalize_or_zero();
                let right = forward.cross(Vec3::Y).normalize_or_zero();
                let up = right.cross(forward);
                let per_px = self.spherical.radius / self.viewport_height * self.pan_speed;
                self.pan_offset += (right * -dx + up * dy) * per_px;
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Scroll-wheel zoom: positive `delta_y` moves the camera away.
    pub fn wheel(&mut self, delta_y: f32) {
        let step = 0.95_f32.powf(self.zoom_speed);
        if delta_y > 0.0 {
            self.zoom_scale /= step;
        } else if delta_y < 0.0 {
            self.zoom_scale *= step;
        }
    }

    /// Ease target and eye back to their starting placement.
    pub fn reset_view(&mut self, camera: &Camera, now_ms: f64) {
        self.reset = Some((
            Tween::new(camera.target, Vec3::ZERO, now_ms, RESET_DURATION_MS, Easing::Power2Out),
            Tween::new(camera.eye, DEFAULT_EYE, now_ms, RESET_DURATION_MS, Easing::Power2Out),
        ));
    }

    /// Radians of auto-rotation per frame at 60 fps.
    fn auto_rotate_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// `auto_rotate` carries the speed factor when automatic rotation runs.
    pub fn update(&mut self, now_ms: f64, auto_rotate: Option<f32>, camera: &mut Camera) {
        if let Some((target, eye)) = self.reset {
            camera.target = target.sample(now_ms);
            camera.eye = eye.sample(now_ms);
            self.target = camera.target;
            self.spherical = Spherical::from_offset(camera.eye - camera.target);
            if target.is_finished(now_ms) && eye.is_finished(now_ms) {
                self.reset = None;
            }
            return;
        }

        if let Some(speed) = auto_rotate.filter(|_| self.drag.is_none()) {
            self.delta_theta -= self.auto_rotate_angle() * speed;
        }

        let d = self.damping_factor;
        self.spherical.theta += self.delta_theta * d;
        self.spherical.phi =
            (self.spherical.phi + self.delta_phi * d).clamp(MIN_POLAR, MAX_POLAR);
        self.spherical.radius =
            (self.spherical.radius * self.zoom_scale).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.target += self.pan_offset * d;

        self.delta_theta *= 1.0 - d;
        self.delta_phi *= 1.0 - d;
        self.pan_offset *= 1.0 - d;
        self.zoom_scale = 1.0;

        camera.target = self.target;
        camera.eye = self.target + self.spherical.to_offset();
    }

    pub fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    pub fn azimuth(&self) -> f32 {
        self.spherical.theta
    }
}
