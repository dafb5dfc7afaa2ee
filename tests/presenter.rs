use folio3d::config::PortfolioConfig;
use folio3d::presenter::Presenter;

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn first_frame_uploads_the_initial_screen() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    let report = p.frame(0.0);
    assert!(report.screen_dirty);
    assert!(report.emphasis.is_none());
    assert!(report.render);
    assert!(p.screen_mut().take_upload().is_some());

    let idle = p.frame(FRAME_MS);
    assert!(!idle.screen_dirty);
    assert!(idle.emphasis.is_none());
    assert!(p.screen_mut().take_upload().is_none());
}

#[test]
fn section_change_drives_screen_and_emphasis() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    p.frame(0.0);

    let fill = p.on_section_change(2);
    assert!((fill - 200.0 / 3.0).abs() < 1e-4);

    let report = p.frame(FRAME_MS);
    assert!(report.screen_dirty);
    let emphasis = report.emphasis.expect("moving frame carries emphasis");
    assert_eq!(emphasis.len(), 4);

    let mut now = FRAME_MS;
    while p.scroll().distance() > 0.01 {
        now += FRAME_MS;
        p.frame(now);
    }
    assert_eq!(p.scroll().active_index(), 2);
}

#[test]
fn heading_entrance_fires_once_per_section() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    assert_eq!(p.take_heading_entrance(), Some(0));
    assert_eq!(p.take_heading_entrance(), None);

    p.on_section_change(1);
    let mut now = 0.0;
    while p.scroll().active_index() == 0 {
        now += FRAME_MS;
        p.frame(now);
    }
    assert_eq!(p.take_heading_entrance(), Some(1));
    assert_eq!(p.take_heading_entrance(), None);
}

#[test]
fn invalidate_forces_one_redraw() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    p.frame(0.0);
    p.frame(FRAME_MS);

    p.invalidate();
    assert!(p.frame(2.0 * FRAME_MS).screen_dirty);
    assert!(!p.frame(3.0 * FRAME_MS).screen_dirty);
}

#[test]
fn hidden_page_skips_rendering() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    p.set_visible(false);
    assert!(!p.is_visible());
    assert!(!p.frame(0.0).render);
    p.set_visible(true);
    assert!(p.frame(FRAME_MS).render);
}

#[test]
fn fps_is_reported_once_per_second() {
    let mut p = Presenter::new(&PortfolioConfig::default());
    let reported: Vec<u32> = (0..=120)
        .filter_map(|i| p.frame(f64::from(i) * 1000.0 / 60.0).fps)
        .collect();
    assert_eq!(reported, vec![60, 60]);
    assert_eq!(p.stats().fps(), 60);
}
