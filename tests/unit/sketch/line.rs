use super::*;

fn spec(orientation: Orientation, steps: u32) -> LineSpec {
    let (start, end) = match orientation {
        Orientation::Horizontal => (Point::new(0.0, 100.0), Point::new(200.0, 100.0)),
        Orientation::Vertical => (Point::new(50.0, 0.0), Point::new(50.0, 300.0)),
    };
    LineSpec {
        start,
        end,
        orientation,
        v: 0.25,
        amplitude: 10.0,
        frequency: 1.25,
        time: 0.5,
        steps,
    }
}

#[test]
fn output_has_exactly_steps_points() {
    let noise = |_: f64, _: f64, _: f64| 0.3;
    for steps in [1, 2, 10, 150] {
        let line = displace_line(&spec(Orientation::Horizontal, steps), &noise);
        assert_eq!(line.len(), steps as usize);
    }
    assert!(displace_line(&spec(Orientation::Vertical, 0), &noise).is_empty());
}

#[test]
fn zero_noise_yields_straight_segment() {
    let noise = |_: f64, _: f64, _: f64| 0.0;
    let line = displace_line(&spec(Orientation::Horizontal, 5), &noise);
    let xs: Vec<f64> = line.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert!(line.points.iter().all(|p| p.y == 100.0));
}

#[test]
fn horizontal_displaces_y_with_expected_coordinates() {
    let noise = |a: f64, b: f64, c: f64| {
        // Encode the coordinates so the test can read them back from the offset.
        (a * 100.0 + b * 10.0 + c) / 1000.0
    };
    let s = spec(Orientation::Horizontal, 3);
    let line = displace_line(&s, &noise);
    for (i, p) in line.points.iter().enumerate() {
        let t = s.t_at(i as u32);
        let expected = noise(t * 1.25 + 0.5, 0.25 * 1.25, 0.5) * 10.0;
        assert!((p.y - (100.0 + expected)).abs() < 1e-12);
        assert_eq!(p.x, 200.0 * t);
    }
}

#[test]
fn vertical_displaces_x_with_swapped_coordinates() {
    let noise = |a: f64, b: f64, c: f64| (a * 100.0 + b * 10.0 + c) / 1000.0;
    let s = spec(Orientation::Vertical, 4);
    let line = displace_line(&s, &noise);
    for (i, p) in line.points.iter().enumerate() {
        let t = s.t_at(i as u32);
        let expected = noise(0.25 * 1.25, t * 1.25 + 0.5, 0.5) * 10.0;
        assert!((p.x - (50.0 + expected)).abs() < 1e-12);
        assert!((p.y - 300.0 * t).abs() < 1e-12);
    }
}

#[test]
fn single_step_is_displaced_midpoint() {
    let noise = |_: f64, _: f64, _: f64| 1.0;
    let line = displace_line(&spec(Orientation::Horizontal, 1), &noise);
    assert_eq!(line.points, vec![Point::new(100.0, 110.0)]);
}

#[test]
fn endpoints_are_displaced_too() {
    let noise = |_: f64, _: f64, _: f64| -0.5;
    let line = displace_line(&spec(Orientation::Horizontal, 10), &noise);
    assert_eq!(line.points.first().unwrap().y, 95.0);
    assert_eq!(line.points.last().unwrap().y, 95.0);
}

#[test]
fn frequency_changes_sampling_not_geometry() {
    let noise = |_: f64, _: f64, _: f64| 0.0;
    let mut a = spec(Orientation::Vertical, 20);
    let mut b = a;
    a.frequency = 0.5;
    b.frequency = 2.0;
    let la = displace_line(&a, &noise);
    let lb = displace_line(&b, &noise);
    assert_eq!(la.len(), lb.len());
    assert_eq!(la.points.first(), lb.points.first());
    assert_eq!(la.points.last(), lb.points.last());
}
