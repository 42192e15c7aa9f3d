use super::*;

#[test]
fn defaults_are_a_square_ten_by_ten_grid() {
    let cfg = SketchConfig::default();
    assert_eq!(cfg.canvas, Canvas { width: 512, height: 512 });
    assert_eq!(cfg.fps, Fps { num: 60, den: 1 });
    assert_eq!(cfg.frequency.midpoint(), 1.25);
    assert!((cfg.amplitude.midpoint() - 0.275).abs() < 1e-12);
    assert_eq!((cfg.rows, cfg.cols, cfg.steps), (10, 10, 150));
    assert_eq!(cfg.time_scale, 0.5);
    assert_eq!(cfg.background, [255, 255, 255, 255]);
    assert_eq!(cfg.stroke.color, [0, 0, 0, 255]);
    assert_eq!(cfg.stroke.cap, LineCap::Round);
    assert_eq!(cfg.stroke.join, LineJoin::Round);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let json = r#"{ "rows": 3, "amplitude": { "min": 0.1, "max": 0.3 }, "seed": 7 }"#;
    let cfg = SketchConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.rows, 3);
    assert_eq!(cfg.cols, 10);
    assert_eq!(cfg.seed, Some(7));
    assert!((cfg.amplitude.midpoint() - 0.2).abs() < 1e-12);
    assert_eq!(cfg.stroke, StrokeConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SketchConfig::from_reader(r#"{ "mouse": true }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn json_roundtrip_preserves_config() {
    let mut cfg = SketchConfig::default();
    cfg.stroke.cap = LineCap::Square;
    cfg.seed = Some(42);
    let json = cfg.to_json_pretty().unwrap();
    assert!(json.contains("\"square\""));
    let back = SketchConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        SketchConfig {
            rows: 0,
            ..SketchConfig::default()
        },
        SketchConfig {
            steps: 0,
            ..SketchConfig::default()
        },
        SketchConfig {
            amplitude: ParamRange::new(0.5, 0.1),
            ..SketchConfig::default()
        },
        SketchConfig {
            frequency: ParamRange::new(f64::NAN, 1.0),
            ..SketchConfig::default()
        },
        SketchConfig {
            time_scale: f64::INFINITY,
            ..SketchConfig::default()
        },
        SketchConfig {
            canvas: Canvas {
                width: 0,
                height: 10,
            },
            ..SketchConfig::default()
        },
        SketchConfig {
            fps: Fps { num: 60, den: 0 },
            ..SketchConfig::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }

    let mut cfg = SketchConfig::default();
    cfg.stroke.width_factor = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = SketchConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open sketch config"));
}
