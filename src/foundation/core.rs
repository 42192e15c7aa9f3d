use crate::foundation::error::{HourwaveError, HourwaveResult};

pub use kurbo::Point;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> HourwaveResult<Self> {
        if start.0 > end.0 {
            return Err(HourwaveError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> HourwaveResult<Self> {
        if den == 0 {
            return Err(HourwaveError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HourwaveError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> HourwaveResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> HourwaveResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HourwaveError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// The shorter side, used to size strokes.
    pub fn min_dim(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// Per-render-call inputs supplied by the animation host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    pub canvas: Canvas,
    /// Seconds since the animation started.
    pub elapsed_secs: f64,
}

impl FrameContext {
    pub fn new(canvas: Canvas, elapsed_secs: f64) -> HourwaveResult<Self> {
        canvas.validate()?;
        if !elapsed_secs.is_finite() {
            return Err(HourwaveError::validation(format!(
                "elapsed time must be finite, got {elapsed_secs}"
            )));
        }
        Ok(Self {
            canvas,
            elapsed_secs,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
