use crate::sketch::config::SketchConfig;

/// Smooth day curve: 0 at midnight, 1 at noon.
///
/// `(cos((hour - 12) / 12 * PI) + 1) / 2`
pub fn time_of_day_multiplier(hour: f64) -> f64 {
    let m = (((hour - 12.0) / 12.0 * std::f64::consts::PI).cos() + 1.0) / 2.0;
    m.clamp(0.0, 1.0)
}

/// Wave parameters for one frame after applying the time-of-day curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Modulation {
    pub hour: f64,
    pub multiplier: f64,
    /// Fraction of the canvas dimension; scaled to pixels per line orientation.
    pub amplitude: f64,
    pub frequency: f64,
}

impl Modulation {
    pub fn for_hour(config: &SketchConfig, hour: f64) -> Self {
        let multiplier = time_of_day_multiplier(hour);
        Self {
            hour,
            multiplier,
            amplitude: config.amplitude.midpoint() * multiplier,
            frequency: config.frequency.midpoint(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/modulate.rs"]
mod tests;
