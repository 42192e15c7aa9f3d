use super::*;

fn style() -> StrokeStyle {
    StrokeStyle {
        color: [0, 0, 0, 255],
        width: 1.0,
        cap: LineCap::Round,
        join: LineJoin::Round,
    }
}

#[test]
fn stroke_polyline_issues_path_in_point_order() {
    let line = Polyline {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
        ],
    };
    let mut s = RecordingSurface::new();
    s.stroke_polyline(&line, &style()).unwrap();
    assert_eq!(
        s.commands(),
        &[
            SurfaceCommand::BeginPath,
            SurfaceCommand::MoveTo(Point::new(0.0, 0.0)),
            SurfaceCommand::LineTo(Point::new(1.0, 2.0)),
            SurfaceCommand::LineTo(Point::new(3.0, 4.0)),
            SurfaceCommand::Stroke(style()),
        ]
    );
}

#[test]
fn empty_polyline_draws_nothing() {
    let mut s = RecordingSurface::new();
    s.stroke_polyline(&Polyline::default(), &style()).unwrap();
    assert!(s.commands().is_empty());
    assert_eq!(s.stroke_count(), 0);
}

#[test]
fn stroke_width_follows_shorter_side() {
    let cfg = StrokeConfig::default();
    let s = StrokeStyle::from_config(&cfg, 512.0);
    assert!((s.width - 1.024).abs() < 1e-12);
    assert_eq!(s.cap, LineCap::Round);
    assert_eq!(s.join, LineJoin::Round);
    assert_eq!(s.color, [0, 0, 0, 255]);
}

#[test]
fn take_drains_recorded_commands() {
    let mut s = RecordingSurface::new();
    s.clear([1, 2, 3, 4]).unwrap();
    assert_eq!(s.take(), vec![SurfaceCommand::Clear([1, 2, 3, 4])]);
    assert!(s.commands().is_empty());
}
