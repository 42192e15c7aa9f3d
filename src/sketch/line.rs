use crate::foundation::core::Point;
use crate::foundation::math::lerp;
use crate::sketch::noise::NoiseField;

/// Which axis a guide line runs along; displacement is applied across it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs left to right, displaced in `y`.
    Horizontal,
    /// Runs top to bottom, displaced in `x`.
    Vertical,
}

/// One guide line to be sampled and displaced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpec {
    pub start: Point,
    pub end: Point,
    pub orientation: Orientation,
    /// Normalized position among parallel peers, used as a noise coordinate.
    pub v: f64,
    /// Displacement scale in pixels.
    pub amplitude: f64,
    pub frequency: f64,
    /// Already-scaled animation time fed to the noise field.
    pub time: f64,
    pub steps: u32,
}

impl LineSpec {
    /// Interpolation parameter for sample `i`; a single sample sits at the midpoint.
    pub fn t_at(&self, i: u32) -> f64 {
        if self.steps <= 1 {
            0.5
        } else {
            f64::from(i) / f64::from(self.steps - 1)
        }
    }

    /// Undisplaced position of sample `i` on the straight segment.
    pub fn base_point(&self, i: u32) -> Point {
        let t = self.t_at(i);
        Point::new(
            lerp(self.start.x, self.end.x, t),
            lerp(self.start.y, self.end.y, t),
        )
    }
}

/// Ordered points to be joined with straight segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample `spec.steps` points along the segment and push each one across the line by
/// `amplitude * noise(..)`.
///
/// Endpoints are displaced like any other sample.
pub fn displace_line<N: NoiseField + ?Sized>(spec: &LineSpec, noise: &N) -> Polyline {
    let mut points = Vec::with_capacity(spec.steps as usize);
    for i in 0..spec.steps {
        let t = spec.t_at(i);
        let mut p = spec.base_point(i);
        let along = t * spec.frequency + spec.time;
        let across = spec.v * spec.frequency;
        match spec.orientation {
            Orientation::Horizontal => {
                p.y += noise.sample(along, across, spec.time) * spec.amplitude;
            }
            Orientation::Vertical => {
                p.x += noise.sample(across, along, spec.time) * spec.amplitude;
            }
        }
        points.push(p);
    }
    Polyline { points }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/line.rs"]
mod tests;
