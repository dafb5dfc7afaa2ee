use folio3d::scroll::{
    section_at, ScrollSynchronizer, ScrollTick, SectionBounds, INACTIVE_OFFSET_Y, INACTIVE_SCALE,
    OPACITY_FLOOR, SETTLE_THRESHOLD,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// Tick until settled, checking the gap shrinks every step.
fn settle(sync: &mut ScrollSynchronizer) -> usize {
    let mut ticks = 0;
    let mut last = sync.distance();
    while sync.tick() == ScrollTick::Moved {
        ticks += 1;
        let d = sync.distance();
        assert!(d < last, "distance grew from {last} to {d} at tick {ticks}");
        last = d;
        assert!(ticks < 1000, "did not converge");
    }
    ticks
}

#[test]
fn converges_to_every_section() {
    for target in 0..4 {
        let mut sync = ScrollSynchronizer::new(4, 0.1);
        sync.set_target(target);
        let ticks = settle(&mut sync);
        assert!(sync.distance() <= SETTLE_THRESHOLD);
        // 3 * 0.9^n <= 0.01 needs n = 55
        assert!(ticks <= 55, "target {target} took {ticks} ticks");
        assert_eq!(sync.active_index(), target);
    }
}

#[test]
fn converges_back_down() {
    let mut sync = ScrollSynchronizer::new(4, 0.1);
    sync.set_target(3);
    settle(&mut sync);
    sync.set_target(0);
    let ticks = settle(&mut sync);
    assert!(ticks <= 55);
    assert_eq!(sync.active_index(), 0);
}

#[test]
fn settled_ticks_are_idempotent() {
    let mut sync = ScrollSynchronizer::new(4, 0.1);
    sync.set_target(1);
    settle(&mut sync);
    let before = *sync.state();
    for _ in 0..10 {
        assert_eq!(sync.tick(), ScrollTick::Settled);
    }
    assert_eq!(*sync.state(), before);
}

#[test]
fn fractional_progress_stays_in_unit_range() {
    let mut sync = ScrollSynchronizer::new(4, 0.1);
    sync.set_target(3);
    while sync.tick() == ScrollTick::Moved {
        let p = sync.fractional_progress();
        assert!((0.0..1.0).contains(&p), "progress {p}");
    }
}

#[test]
fn emphasis_at_rest() {
    let sync = ScrollSynchronizer::new(4, 0.1);
    let e = sync.emphasis();
    assert_eq!(e.len(), 4);

    assert!(e[0].active);
    assert!(approx(e[0].opacity, 1.0));
    assert!(approx(e[0].offset_y, 0.0));
    assert!(approx(e[0].scale, 1.0));

    for s in &e[1..] {
        assert!(!s.active);
        assert!(approx(s.opacity, OPACITY_FLOOR));
        assert!(approx(s.offset_y, INACTIVE_OFFSET_Y));
        assert!(approx(s.scale, INACTIVE_SCALE));
    }
}

#[test]
fn emphasis_midway_splits_between_neighbours() {
    let mut sync = ScrollSynchronizer::new(4, 0.1);
    sync.set_target(1);
    while sync.state().current_section < 0.5 {
        sync.tick();
    }
    let current = sync.state().current_section;
    let e = sync.emphasis();
    assert!(approx(e[0].progress, 1.0 - current));
    assert!(approx(e[1].progress, current));
    assert!(e[1].active);
    assert!(approx(e[3].progress, 0.0));
}

#[test]
fn navigation_fill() {
    let sync = ScrollSynchronizer::new(4, 0.1);
    assert!(approx(sync.navigation_progress(0), 0.0));
    assert!(approx(sync.navigation_progress(1), 100.0 / 3.0));
    assert!(approx(sync.navigation_progress(3), 100.0));
    assert!(approx(sync.navigation_progress(9), 100.0));
}

#[test]
fn detects_section_near_viewport_middle() {
    let sections: Vec<SectionBounds> = (0..4)
        .map(|i| SectionBounds {
            top: f64::from(i) * 800.0,
            height: 800.0,
        })
        .collect();

    assert_eq!(section_at(0.0, 800.0, &sections), Some(0));
    assert_eq!(section_at(800.0, 800.0, &sections), Some(1));
    assert_eq!(section_at(750.0, 800.0, &sections), Some(1));
    assert_eq!(section_at(2400.0, 800.0, &sections), Some(3));
    // halfway between two sections nothing is dominant
    assert_eq!(section_at(400.0, 800.0, &sections), None);
    assert_eq!(section_at(0.0, 800.0, &[]), None);
}
