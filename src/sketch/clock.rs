use chrono::Timelike as _;

use crate::foundation::error::{HourwaveError, HourwaveResult};

/// Read-only source of the local hour of day, in `[0, 24)`.
///
/// Queried once per frame; implementations must not cache across frames.
pub trait HourSource: Send + Sync {
    fn hour(&self) -> f64;
}

/// Local wall clock. Fractional part carries minutes only.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl HourSource for SystemClock {
    fn hour(&self) -> f64 {
        let now = chrono::Local::now();
        f64::from(now.hour()) + f64::from(now.minute()) / 60.0
    }
}

/// A clock frozen at one hour, for tests and offline renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHour(f64);

impl FixedHour {
    pub fn new(hour: f64) -> HourwaveResult<Self> {
        checked_hour(hour).map(Self)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl HourSource for FixedHour {
    fn hour(&self) -> f64 {
        self.0
    }
}

pub(crate) fn checked_hour(hour: f64) -> HourwaveResult<f64> {
    if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
        return Err(HourwaveError::validation(format!(
            "hour of day must be in [0, 24), got {hour}"
        )));
    }
    Ok(hour)
}
