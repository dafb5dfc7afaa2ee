use folio3d::config::{InteractionMode, PortfolioConfig};
use folio3d::scroll::{ScrollSynchronizer, ScrollTick};
use folio3d::PortfolioError;
use folio3d::scene::ModelTransform;
use glam::Vec3;

#[test]
fn defaults_carry_the_built_in_page() {
    let cfg = PortfolioConfig::default();
    assert_eq!(cfg.model.sources[0], "assets/models/laptop.glb");
    assert_eq!(cfg.model.sources.len(), 4);
    assert_eq!(cfg.scroll.total_sections, 4);
    assert_eq!(cfg.scroll.scroll_speed, 0.1);
    assert_eq!(cfg.interaction.mode, InteractionMode::Orbit);
    assert!(cfg.performance.disable_3d_on_mobile);
    assert_eq!(cfg.projects.len(), 3);
}

#[test]
fn page_block_overrides_nested_sections() {
    let cfg = PortfolioConfig::from_json(
        r##"{
            "name": "Ada Lovelace",
            "colors": { "primary": "#ff0000" },
            "model": { "sources": ["models/one.glb"], "scale": 2.0, "position": [0, 0, 1] },
            "performance": { "mobile_screen_width": 600 },
            "interaction": { "auto_rotate": false }
        }"##,
    )
    .unwrap();

    assert_eq!(cfg.name, "Ada Lovelace");
    assert_eq!(cfg.colors.primary, "#ff0000");
    assert_eq!(cfg.colors.secondary, "#4a45e6");
    assert_eq!(cfg.model.sources, ["models/one.glb"]);
    assert_eq!(cfg.performance.mobile_screen_width, 600.0);
    assert!(cfg.performance.disable_3d_on_mobile);
    assert!(!cfg.interaction.auto_rotate);
    assert_eq!(cfg.interaction.idle_delay_ms, 3000.0);

    let t = ModelTransform::from_config(&cfg.model);
    assert_eq!(t.scale, 2.0);
    assert_eq!(t.position, Vec3::new(0.0, 0.0, 1.0));
    // rotation was not overridden
    assert_eq!(t.rotation, Vec3::new(0.0, -0.3, 0.0));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(PortfolioConfig::from_json(r#"{ "interaction": { "mode": "fly" } }"#).is_err());
}

#[test]
fn scroll_speed_outside_unit_interval_is_rejected() {
    for speed in ["0", "0.0", "-0.1", "1.01", "2.5"] {
        let json = format!(r#"{{ "scroll": {{ "scroll_speed": {speed} }} }}"#);
        let err = PortfolioConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidConfig(_)), "speed {speed}: {err}");
    }
}

#[test]
fn zero_sections_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{ "scroll": { "total_sections": 0 } }"#).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidConfig(_)), "{err}");
}

#[test]
fn negative_idle_delay_is_rejected() {
    let err =
        PortfolioConfig::from_json(r#"{ "interaction": { "idle_delay_ms": -5 } }"#).unwrap_err();
    assert!(matches!(err, PortfolioError::InvalidConfig(_)), "{err}");
}

#[test]
fn accepted_scroll_settings_converge() {
    for speed in ["0.05", "0.5", "1"] {
        let json = format!(r#"{{ "scroll": {{ "scroll_speed": {speed}, "total_sections": 1 }} }}"#);
        let cfg = PortfolioConfig::from_json(&json).unwrap();
        let mut sync = ScrollSynchronizer::new(cfg.scroll.total_sections, cfg.scroll.scroll_speed);
        sync.set_target(3);
        let settled = (0..1000).any(|_| sync.tick() == ScrollTick::Settled);
        assert!(settled, "speed {speed} never settled");
        assert!(sync.distance() <= 0.01);
    }
}
