use folio3d::camera::{Camera, DEFAULT_EYE};
use folio3d::config::{InteractionConfig, InteractionMode};
use folio3d::interaction::{
    Controls, InteractionController, PointerKind, IDLE_SPIN, MAX_DISTANCE, MAX_POLAR, MAX_TILT,
    MAX_TURN, MIN_DISTANCE, MIN_POLAR,
};
use folio3d::scene::ModelTransform;

const EPS: f32 = 1e-4;
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Small deterministic generator for input sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f32 / (1u64 << 31) as f32) * 2.0 - 1.0
    }
}

fn controller(mode: InteractionMode) -> (InteractionController, Camera, ModelTransform) {
    let camera = Camera::default();
    let cfg = InteractionConfig {
        mode,
        ..InteractionConfig::default()
    };
    let mut ctl = InteractionController::new(&cfg, &camera);
    ctl.resize(800.0, 600.0);
    (ctl, camera, ModelTransform::default())
}

fn orbit_state(ctl: &InteractionController) -> (f32, f32) {
    match ctl.controls() {
        Controls::Orbit(orbit) => (orbit.polar_angle(), orbit.distance()),
        Controls::Manual(_) => panic!("expected orbit controls"),
    }
}

#[test]
fn mode_follows_config() {
    assert_eq!(controller(InteractionMode::Orbit).0.mode(), InteractionMode::Orbit);
    assert_eq!(controller(InteractionMode::Manual).0.mode(), InteractionMode::Manual);
}

#[test]
fn orbit_limits_hold_under_random_input() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Orbit);
    let mut rng = Lcg(7);
    let mut now = 0.0;
    let (mut x, mut y) = (400.0, 300.0);

    for step in 0..2000 {
        match step % 7 {
            0 => ctl.pointer_down(x, y, PointerKind::Mouse, rng.next() > 0.6),
            1..=3 => {
                x += rng.next() * 900.0;
                y += rng.next() * 900.0;
                ctl.pointer_move(x, y);
            }
            4 => ctl.wheel(rng.next() * 500.0),
            5 => ctl.pointer_up(now),
            _ => ctl.pointer_leave(now),
        }
        now += FRAME_MS;
        ctl.update(now, 1.0, &mut camera, &mut model);

        let (polar, distance) = orbit_state(&ctl);
        assert!(
            (MIN_POLAR - EPS..=MAX_POLAR + EPS).contains(&polar),
            "polar {polar} at step {step}"
        );
        assert!(
            (MIN_DISTANCE - EPS..=MAX_DISTANCE + EPS).contains(&distance),
            "distance {distance} at step {step}"
        );
        let eye_distance = (camera.eye - camera.target).length();
        assert!((eye_distance - distance).abs() < 1e-3);
    }
}

#[test]
fn wheel_zoom_stops_at_limits() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Orbit);
    for i in 0..200 {
        ctl.wheel(100.0);
        ctl.update(f64::from(i) * FRAME_MS, 1.0, &mut camera, &mut model);
    }
    assert!((orbit_state(&ctl).1 - MAX_DISTANCE).abs() < EPS);

    for i in 200..400 {
        ctl.wheel(-100.0);
        ctl.update(f64::from(i) * FRAME_MS, 1.0, &mut camera, &mut model);
    }
    assert!((orbit_state(&ctl).1 - MIN_DISTANCE).abs() < EPS);
}

#[test]
fn double_click_eases_back_to_start() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Orbit);
    ctl.pointer_down(0.0, 0.0, PointerKind::Mouse, false);
    ctl.pointer_move(300.0, 120.0);
    ctl.pointer_up(0.0);
    for i in 0..30 {
        ctl.update(f64::from(i) * FRAME_MS, 1.0, &mut camera, &mut model);
    }
    assert!((camera.eye - DEFAULT_EYE).length() > 0.1);

    let start = 1000.0;
    ctl.double_click(&camera, start);
    ctl.update(start + 500.0, 1.0, &mut camera, &mut model);
    assert!((camera.eye - DEFAULT_EYE).length() > 1e-3);
    ctl.update(start + 1000.0, 1.0, &mut camera, &mut model);
    assert!((camera.eye - DEFAULT_EYE).length() < 1e-3);
    assert!(camera.target.length() < 1e-3);
}

#[test]
fn orbit_auto_rotates_only_when_idle() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Orbit);
    assert!(ctl.is_auto_rotating(0.0));

    ctl.update(0.0, 1.0, &mut camera, &mut model);
    let Controls::Orbit(orbit) = ctl.controls() else {
        panic!("expected orbit controls");
    };
    let before = orbit.azimuth();
    for i in 1..60 {
        ctl.update(f64::from(i) * FRAME_MS, 1.0, &mut camera, &mut model);
    }
    let Controls::Orbit(orbit) = ctl.controls() else {
        panic!("expected orbit controls");
    };
    assert!(orbit.azimuth() < before, "auto-rotate should turn the camera");

    ctl.pointer_down(0.0, 0.0, PointerKind::Mouse, false);
    assert!(!ctl.is_auto_rotating(2000.0));
    ctl.pointer_up(2000.0);
    ctl.pointer_leave(2000.0);
    assert!(!ctl.is_auto_rotating(4999.0));
    assert!(ctl.is_auto_rotating(5000.0));

    ctl.set_auto_rotate(false);
    assert!(!ctl.is_auto_rotating(10_000.0));
}

#[test]
fn manual_rotation_is_clamped_after_drags() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Manual);
    let mut rng = Lcg(42);
    let mut now = 0.0;
    let (mut x, mut y) = (0.0, 0.0);

    for step in 0..500 {
        let kind = if step % 2 == 0 { PointerKind::Mouse } else { PointerKind::Touch };
        ctl.pointer_down(x, y, kind, false);
        for _ in 0..5 {
            x += rng.next() * 2000.0;
            y += rng.next() * 2000.0;
            ctl.pointer_move(x, y);
        }
        now += FRAME_MS;
        ctl.update(now, 1.0, &mut camera, &mut model);
        assert!(model.rotation.x.abs() <= MAX_TILT + EPS, "tilt {}", model.rotation.x);
        assert!(model.rotation.y.abs() <= MAX_TURN + EPS, "turn {}", model.rotation.y);
        ctl.pointer_up(now);
    }
    // manual controls never move the camera
    assert_eq!(camera, Camera::default());
}

#[test]
fn manual_drag_rotates_model() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Manual);
    let start_y = model.rotation.y;
    ctl.pointer_down(100.0, 100.0, PointerKind::Mouse, false);
    ctl.pointer_move(150.0, 100.0);
    ctl.update(0.0, 1.0, &mut camera, &mut model);
    assert!((model.rotation.y - (start_y + 0.5)).abs() < EPS);

    // touch drags turn at half speed
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Manual);
    ctl.pointer_down(100.0, 100.0, PointerKind::Touch, false);
    ctl.pointer_move(150.0, 100.0);
    ctl.update(0.0, 1.0, &mut camera, &mut model);
    assert!((model.rotation.y - (start_y + 0.25)).abs() < EPS);
}

#[test]
fn manual_idle_spin_waits_for_delay() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Manual);
    ctl.pointer_down(0.0, 0.0, PointerKind::Mouse, false);
    ctl.pointer_up(100.0);

    let y = model.rotation.y;
    ctl.update(1000.0, 1.0, &mut camera, &mut model);
    assert_eq!(model.rotation.y, y);

    ctl.update(3100.0, 1.0, &mut camera, &mut model);
    assert!((model.rotation.y - (y + IDLE_SPIN)).abs() < 1e-6);
}

#[test]
fn orbit_stays_still_until_pointer_leaves() {
    let (mut ctl, _, _) = controller(InteractionMode::Orbit);
    ctl.pointer_down(10.0, 10.0, PointerKind::Mouse, false);
    ctl.pointer_up(1000.0);
    assert!(!ctl.is_dragging());
    assert!(!ctl.is_auto_rotating(4000.0));
    assert!(!ctl.is_auto_rotating(60_000.0));

    ctl.pointer_leave(60_000.0);
    assert!(!ctl.is_auto_rotating(62_999.0));
    assert!(ctl.is_auto_rotating(63_000.0));
}

#[test]
fn touch_end_releases_idle_in_both_modes() {
    for mode in [InteractionMode::Orbit, InteractionMode::Manual] {
        let (mut ctl, _, _) = controller(mode);
        ctl.pointer_down(10.0, 10.0, PointerKind::Touch, false);
        ctl.pointer_move(40.0, 10.0);
        assert!(ctl.is_dragging(), "{mode:?} touch drag");
        ctl.touch_end(500.0);
        assert!(!ctl.is_dragging());
        assert!(!ctl.is_auto_rotating(3499.0));
        assert!(ctl.is_auto_rotating(3500.0), "{mode:?} idle after touch end");
    }
}

#[test]
fn manual_pointer_up_starts_idle_delay() {
    let (mut ctl, _, _) = controller(InteractionMode::Manual);
    ctl.pointer_down(0.0, 0.0, PointerKind::Mouse, false);
    ctl.pointer_up(1000.0);
    assert!(!ctl.is_auto_rotating(3999.0));
    assert!(ctl.is_auto_rotating(4000.0));
}

#[test]
fn idle_motion_scales_with_animation_speed() {
    let (mut ctl, mut camera, mut model) = controller(InteractionMode::Manual);
    let y = model.rotation.y;
    ctl.update(0.0, 0.5, &mut camera, &mut model);
    assert!((model.rotation.y - (y + IDLE_SPIN * 0.5)).abs() < 1e-6);

    let azimuth_after = |speed: f32| {
        let (mut ctl, mut camera, mut model) = controller(InteractionMode::Orbit);
        for i in 0..30 {
            ctl.update(f64::from(i) * FRAME_MS, speed, &mut camera, &mut model);
        }
        let Controls::Orbit(orbit) = ctl.controls() else {
            panic!("expected orbit controls");
        };
        orbit.azimuth()
    };
    let start = azimuth_after(0.0);
    let full = start - azimuth_after(1.0);
    let half = start - azimuth_after(0.5);
    assert!(full > 0.0);
    assert!((half - full * 0.5).abs() < 1e-5, "half {half} full {full}");
}
