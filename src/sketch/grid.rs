use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::normalized_position;
use crate::sketch::line::{LineSpec, Orientation, Polyline, displace_line};
use crate::sketch::noise::NoiseField;

/// Inputs for one grid of guide lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub rows: u32,
    pub cols: u32,
    pub steps: u32,
    /// Fraction of the perpendicular canvas dimension.
    pub amplitude: f64,
    pub frequency: f64,
    /// Scaled animation time.
    pub time: f64,
}

/// Line specs in draw order: rows top to bottom, then columns left to right.
pub fn grid_line_specs(canvas: Canvas, params: &GridParams) -> Vec<LineSpec> {
    let w = canvas.width_f64();
    let h = canvas.height_f64();
    let mut specs = Vec::with_capacity((params.rows + params.cols) as usize);

    for row in 0..params.rows {
        let v = normalized_position(row, params.rows);
        let y = v * h;
        specs.push(LineSpec {
            start: Point::new(0.0, y),
            end: Point::new(w, y),
            orientation: Orientation::Horizontal,
            v,
            amplitude: params.amplitude * h,
            frequency: params.frequency,
            time: params.time,
            steps: params.steps,
        });
    }

    for col in 0..params.cols {
        let u = normalized_position(col, params.cols);
        let x = u * w;
        specs.push(LineSpec {
            start: Point::new(x, 0.0),
            end: Point::new(x, h),
            orientation: Orientation::Vertical,
            v: u,
            amplitude: params.amplitude * w,
            frequency: params.frequency,
            time: params.time,
            steps: params.steps,
        });
    }

    specs
}

/// Displace every grid line, preserving draw order.
pub fn compose_grid<N: NoiseField + ?Sized>(
    canvas: Canvas,
    params: &GridParams,
    noise: &N,
) -> Vec<Polyline> {
    grid_line_specs(canvas, params)
        .iter()
        .map(|spec| displace_line(spec, noise))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/grid.rs"]
mod tests;
