use std::path::Path;
use std::time::Duration;

use food_slicer::config::GameConfig;
use food_slicer::error::Error;

fn invalid_field(config: GameConfig) -> &'static str {
    match config.validate() {
        Err(Error::InvalidConfiguration { field, .. }) => field,
        other => panic!("expected invalid configuration, got {:?}", other),
    }
}

#[test]
fn defaults() {
    let c = GameConfig::default();
    assert_eq!(c.viewport_width, 640);
    assert_eq!(c.viewport_height, 480);
    assert_eq!(c.spawn_interval(), Duration::from_secs(2));
    assert_eq!(c.max_misses, 5);
    assert_eq!(c.trail_capacity, 20);
    assert_eq!(c.gravity, 0.2);
    assert_eq!(c.half_dx, 2.0);
    assert_eq!(c.seed, None);
    assert!(c.validate().is_ok());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let c = GameConfig::from_json_str(r#"{ "max_misses": 3, "seed": 9 }"#).unwrap();
    assert_eq!(c.max_misses, 3);
    assert_eq!(c.seed, Some(9));
    assert_eq!(c.viewport_width, 640);
    assert_eq!(c.trail_capacity, 20);
}

#[test]
fn json_fractional_interval() {
    let c = GameConfig::from_json_str(r#"{ "spawn_interval_secs": 0.5 }"#).unwrap();
    assert_eq!(c.spawn_interval(), Duration::from_millis(500));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = GameConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn json_with_invalid_value_is_rejected() {
    let err = GameConfig::from_json_str(r#"{ "trail_capacity": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidConfiguration {
            field: "trail_capacity",
            ..
        }
    ));
}

#[test]
fn rejects_zero_dimensions() {
    let c = GameConfig {
        viewport_width: 0,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "viewport_width");
    let c = GameConfig {
        viewport_height: 0,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "viewport_height");
}

#[test]
fn rejects_width_without_room_to_spawn() {
    let c = GameConfig {
        viewport_width: 100,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "viewport_width");
    let c = GameConfig {
        viewport_width: 101,
        ..GameConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn rejects_bad_spawn_interval() {
    for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let c = GameConfig {
            spawn_interval_secs: secs,
            ..GameConfig::default()
        };
        assert_eq!(invalid_field(c), "spawn_interval_secs");
    }
}

#[test]
fn rejects_zero_max_misses() {
    let c = GameConfig {
        max_misses: 0,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "max_misses");
}

#[test]
fn rejects_non_finite_physics() {
    let c = GameConfig {
        gravity: f32::NAN,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "gravity");
    let c = GameConfig {
        half_dx: f32::INFINITY,
        ..GameConfig::default()
    };
    assert_eq!(invalid_field(c), "half_dx");
}

#[test]
fn error_message_names_field() {
    let c = GameConfig {
        max_misses: 0,
        ..GameConfig::default()
    };
    let msg = c.validate().unwrap_err().to_string();
    assert!(msg.contains("max_misses"), "{}", msg);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = GameConfig::load(Path::new("/definitely/not/here/food_slicer.json")).unwrap_err();
    assert!(matches!(err, Error::ConfigIo { .. }));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("food_slicer_cfg_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "viewport_width": 800, "viewport_height": 600 }"#).unwrap();
    let c = GameConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(c.viewport_width, 800);
    assert_eq!(c.viewport_height, 600);
}
