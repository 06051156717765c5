use super::*;

#[test]
fn defaults_match_the_widget() {
    let cfg = CarConfig::default();
    assert!(!cfg.paint_path);
    assert_eq!(cfg.rotate_duration(), Duration::from_millis(1000));
    assert_eq!(cfg.move_duration(), Duration::from_millis(2000));
    assert_eq!(
        cfg.sprite_size,
        SpriteSize {
            width: 100,
            height: 200
        }
    );
    assert_eq!(cfg.start_bottom_offset, 300.0);
    assert_eq!(cfg.ease, Ease::Linear);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = CarConfig::from_json_str(r#"{ "paint_path": true, "ease": "out_cubic" }"#).unwrap();
    assert!(cfg.paint_path);
    assert_eq!(cfg.ease, Ease::OutCubic);
    assert_eq!(cfg.move_duration_ms, 2000);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = CarConfig::from_json_str(r#"{ "paintPath": true }"#).unwrap_err();
    assert!(matches!(err, CarDriveError::Serde(_)));
}

#[test]
fn validation_catches_bad_values() {
    let zero_rotate = CarConfig {
        rotate_duration_ms: 0,
        ..CarConfig::default()
    };
    assert!(zero_rotate.validate().is_err());

    let empty_sprite = CarConfig {
        sprite_size: SpriteSize {
            width: 0,
            height: 10,
        },
        ..CarConfig::default()
    };
    assert!(empty_sprite.validate().is_err());

    let bad_stroke = CarConfig {
        path_stroke_width: -1.0,
        ..CarConfig::default()
    };
    assert!(bad_stroke.validate().is_err());

    assert!(CarConfig::from_json_str(r#"{ "move_duration_ms": 0 }"#).is_err());
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = CarConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
