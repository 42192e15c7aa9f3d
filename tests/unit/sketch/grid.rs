use super::*;

fn params(amplitude: f64) -> GridParams {
    GridParams {
        rows: 10,
        cols: 10,
        steps: 150,
        amplitude,
        frequency: 1.25,
        time: 0.0,
    }
}

#[test]
fn ten_rows_then_ten_columns_in_draw_order() {
    let canvas = Canvas::new(512, 256).unwrap();
    let specs = grid_line_specs(canvas, &params(0.2));
    assert_eq!(specs.len(), 20);
    assert!(specs[..10].iter().all(|s| s.orientation == Orientation::Horizontal));
    assert!(specs[10..].iter().all(|s| s.orientation == Orientation::Vertical));

    let ys: Vec<f64> = specs[..10].iter().map(|s| s.start.y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ys[0], 0.0);
    assert_eq!(ys[9], 256.0);

    let xs: Vec<f64> = specs[10..].iter().map(|s| s.start.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(xs[9], 512.0);
}

#[test]
fn lines_span_the_full_canvas() {
    let canvas = Canvas::new(300, 200).unwrap();
    for s in grid_line_specs(canvas, &params(0.2)) {
        match s.orientation {
            Orientation::Horizontal => {
                assert_eq!((s.start.x, s.end.x), (0.0, 300.0));
                assert_eq!(s.start.y, s.end.y);
            }
            Orientation::Vertical => {
                assert_eq!((s.start.y, s.end.y), (0.0, 200.0));
                assert_eq!(s.start.x, s.end.x);
            }
        }
        assert_eq!(s.steps, 150);
    }
}

#[test]
fn amplitude_scales_with_perpendicular_dimension() {
    let small = grid_line_specs(Canvas::new(100, 50).unwrap(), &params(0.5));
    let tall = grid_line_specs(Canvas::new(100, 150).unwrap(), &params(0.5));
    assert_eq!(small[0].amplitude, 25.0);
    assert_eq!(tall[0].amplitude, 75.0);
    assert_eq!(small[10].amplitude, 50.0);
    assert_eq!(tall[10].amplitude, 50.0);

    let wide = grid_line_specs(Canvas::new(400, 50).unwrap(), &params(0.5));
    assert_eq!(wide[10].amplitude, 4.0 * small[10].amplitude);
    assert_eq!(wide[0].amplitude, small[0].amplitude);
}

#[test]
fn single_row_and_column_sit_at_center() {
    let p = GridParams {
        rows: 1,
        cols: 1,
        ..params(0.1)
    };
    let specs = grid_line_specs(Canvas::new(200, 100).unwrap(), &p);
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].v, 0.5);
    assert_eq!(specs[0].start.y, 50.0);
    assert_eq!(specs[1].start.x, 100.0);
}

#[test]
fn zero_amplitude_grid_is_perfectly_straight() {
    let noise = crate::sketch::noise::SimplexField::new(11);
    let canvas = Canvas::new(512, 512).unwrap();
    let lines = compose_grid(canvas, &GridParams { time: 3.7, ..params(0.0) }, &noise);
    assert_eq!(lines.len(), 20);
    for (line, spec) in lines.iter().zip(grid_line_specs(canvas, &params(0.0))) {
        for (i, p) in line.points.iter().enumerate() {
            assert_eq!(*p, spec.base_point(i as u32));
        }
    }
}

#[test]
fn adjacent_rows_sample_different_noise() {
    let noise = crate::sketch::noise::SimplexField::new(5);
    let canvas = Canvas::new(512, 512).unwrap();
    let lines = compose_grid(canvas, &GridParams { time: 0.37, ..params(0.2) }, &noise);
    let offsets = |k: usize| -> Vec<f64> {
        lines[k].points.iter().map(|p| p.y - lines[k].points[0].y).collect()
    };
    assert_ne!(offsets(3), offsets(4));
}
