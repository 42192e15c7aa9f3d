use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{HourwaveError, HourwaveResult};

/// A closed `[min, max]` parameter range. The renderer uses its midpoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn validate(self, name: &str) -> HourwaveResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(HourwaveError::validation(format!(
                "{name} range must be finite"
            )));
        }
        if self.min < 0.0 {
            return Err(HourwaveError::validation(format!(
                "{name} range min must be >= 0, got {}",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(HourwaveError::validation(format!(
                "{name} range min must be <= max, got {}..{}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Cap style at the two ends of every stroked line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Join style between consecutive polyline segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeConfig {
    /// Straight-alpha RGBA8.
    pub color: [u8; 4],
    /// Line width as a fraction of the shorter canvas side.
    pub width_factor: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            width_factor: 0.002,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// Everything the renderer needs besides the per-frame context.
///
/// Loaded from JSON; every field is optional and falls back to [`SketchConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    pub canvas: Canvas,
    pub fps: Fps,
    pub frequency: ParamRange,
    /// Fraction of the canvas dimension perpendicular to each line.
    pub amplitude: ParamRange,
    pub rows: u32,
    pub cols: u32,
    /// Samples per guide line.
    pub steps: u32,
    /// Multiplier applied to elapsed seconds before sampling noise.
    pub time_scale: f64,
    /// Straight-alpha RGBA8 clear color.
    pub background: [u8; 4],
    pub stroke: StrokeConfig,
    /// Noise seed. `None` derives one at process start.
    pub seed: Option<u32>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 512,
                height: 512,
            },
            fps: Fps { num: 60, den: 1 },
            frequency: ParamRange::new(0.5, 2.0),
            amplitude: ParamRange::new(0.05, 0.5),
            rows: 10,
            cols: 10,
            steps: 150,
            time_scale: 0.5,
            background: [255, 255, 255, 255],
            stroke: StrokeConfig::default(),
            seed: None,
        }
    }
}

impl SketchConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HourwaveResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HourwaveError::serde(format!("parse sketch config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HourwaveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HourwaveError::validation(format!("open sketch config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON, as written by `hourwave config`.
    pub fn to_json_pretty(&self) -> HourwaveResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HourwaveError::serde(format!("serialize sketch config: {e}")))
    }

    pub fn validate(&self) -> HourwaveResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.frequency.validate("frequency")?;
        self.amplitude.validate("amplitude")?;
        if self.rows == 0 || self.cols == 0 {
            return Err(HourwaveError::validation(format!(
                "rows and cols must be >= 1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.steps == 0 {
            return Err(HourwaveError::validation("steps must be >= 1"));
        }
        if !self.time_scale.is_finite() {
            return Err(HourwaveError::validation("time_scale must be finite"));
        }
        if !(self.stroke.width_factor.is_finite() && self.stroke.width_factor > 0.0) {
            return Err(HourwaveError::validation(format!(
                "stroke width_factor must be > 0, got {}",
                self.stroke.width_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/config.rs"]
mod tests;
