use ball_clock::core::config::ClockConfig;

#[test]
fn shipped_config_matches_builtin_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/clock.ron");
    let cfg = ClockConfig::load_from_file(path).expect("parse shipped config");
    assert_eq!(cfg, ClockConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_shipped_config() {
    let shipped = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/clock.ron");
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("clock.local.ron");
    std::fs::write(&local, r"(balls: (drop_jitter: 2.0), log_interval: 0.0)").unwrap();

    let (cfg, used, errors) = ClockConfig::load_layered([std::path::Path::new(shipped), local.as_path()]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.balls.drop_jitter, 2.0);
    assert_eq!(cfg.log_interval, 0.0);
    assert_eq!(cfg.balls.hour.radius, 38.0);
}
