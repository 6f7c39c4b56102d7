use super::*;

#[test]
fn stock_configs_match_the_reference_parameters() {
    let classic = IdentimorphConfig::classic_default();
    assert_eq!(classic.seed, "github.com/j-ncel");
    assert_eq!(classic.size, 128);
    assert_eq!(classic.glow, 0);
    assert_eq!(classic.fps.get(), 1);
    assert_eq!(classic.mode.frame_count(), 12);
    assert_eq!(classic.blocks(), 5);
    classic.validate().unwrap();

    let spiral = IdentimorphConfig::spiral_default();
    assert_eq!(spiral.seed, "github.com/jncel");
    assert_eq!(spiral.fps.get(), 5);
    assert_eq!(spiral.frame_duration_ms(), 200);
    assert_eq!(spiral.mode.frame_count(), 25);
    spiral.validate().unwrap();
}

#[test]
fn parses_minimal_json_with_mode_defaults() {
    let cfg = IdentimorphConfig::from_reader(
        r#"{ "seed": "jncel", "mode": { "spiral": {} } }"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.mode, Mode::Spiral { blocks: 5 });
    assert_eq!(cfg.size, DEFAULT_SIZE);
    assert_eq!(cfg.fps.get(), 5);

    let cfg = IdentimorphConfig::from_reader(
        r#"{ "seed": "jncel", "size": 256, "glow": 2, "fps": 4,
             "mode": { "classic": { "frame_count": 8, "blocks": 7 } } }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        cfg.mode,
        Mode::Classic {
            frame_count: 8,
            blocks: 7
        }
    );
    assert_eq!((cfg.size, cfg.glow, cfg.fps.get()), (256, 2, 4));
}

#[test]
fn json_round_trips() {
    let cfg = IdentimorphConfig::classic_default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back = IdentimorphConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn rejects_unknown_fields_and_bad_json() {
    let err = IdentimorphConfig::from_reader(
        r#"{ "seed": "x", "colour": 1, "mode": { "spiral": {} } }"#.as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, IdentimorphError::Config(_)));
    assert!(IdentimorphConfig::from_reader("not json".as_bytes()).is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = IdentimorphConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}

#[test]
fn validation_rejects_out_of_range_parameters() {
    let base = IdentimorphConfig::new("seed", Mode::Spiral { blocks: 5 });

    let mut c = base.clone();
    c.seed.clear();
    assert!(matches!(c.validate(), Err(IdentimorphError::InvalidParameter(_))));

    let mut c = base.clone();
    c.size = 0;
    assert!(matches!(c.validate(), Err(IdentimorphError::InvalidParameter(_))));

    let mut c = base.clone();
    c.size = 4;
    assert!(matches!(c.validate(), Err(IdentimorphError::InvalidParameter(_))));

    let mut c = base.clone();
    c.fps = Fps::from_raw(0);
    assert!(matches!(c.validate(), Err(IdentimorphError::InvalidParameter(_))));

    let mut c = base.clone();
    c.mode = Mode::Spiral { blocks: 8 };
    assert!(matches!(c.validate(), Err(IdentimorphError::InvalidParameter(_))));

    let mut c = base.clone();
    c.mode = Mode::Spiral { blocks: 0 };
    assert!(matches!(c.validate(), Err(IdentimorphError::EmptyFrameSequence(_))));

    let mut c = base;
    c.mode = Mode::Classic {
        frame_count: 0,
        blocks: 5,
    };
    assert!(matches!(c.validate(), Err(IdentimorphError::EmptyFrameSequence(_))));
}

#[test]
fn mode_names() {
    assert_eq!(IdentimorphConfig::classic_default().mode.name(), "classic");
    assert_eq!(IdentimorphConfig::spiral_default().mode.name(), "spiral");
}
