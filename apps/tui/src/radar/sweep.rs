use std::time::Duration;

use serde::Serialize;

use super::RadarError;

pub const FULL_ROTATION_DEGREES: f64 = 360.0;
pub const DEFAULT_SWEEP_STEP_DEGREES: f64 = 2.0;
pub const DEFAULT_SWEEP_PERIOD: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSettings {
    pub step_degrees: f64,
    pub period: Duration,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_SWEEP_STEP_DEGREES,
            period: DEFAULT_SWEEP_PERIOD,
        }
    }
}

impl SweepSettings {
    pub fn validate(&self) -> Result<(), RadarError> {
        if !valid_step(self.step_degrees) {
            return Err(RadarError::InvalidStep(self.step_degrees));
        }
        if self.period.is_zero() {
            return Err(RadarError::ZeroPeriod { clock: "sweep" });
        }
        Ok(())
    }
}

/// A usable step is finite and strictly positive.
pub fn valid_step(step_degrees: f64) -> bool {
    step_degrees.is_finite() && step_degrees > 0.0
}

/// Rotation of the beam, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SweepState {
    angle_degrees: f64,
}

impl SweepState {
    pub const fn new() -> Self {
        Self { angle_degrees: 0.0 }
    }

    pub const fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Applies `ticks` steps at once: `(angle + ticks * step) mod 360`.
    pub fn advance(&mut self, ticks: u64, step_degrees: f64) {
        if ticks == 0 {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let offset = (ticks as f64 * step_degrees).rem_euclid(FULL_ROTATION_DEGREES);
        self.angle_degrees = wrap_degrees(self.angle_degrees + offset);
    }

    pub fn reset(&mut self) {
        self.angle_degrees = 0.0;
    }
}

/// Wraps any finite angle into `[0, 360)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_ROTATION_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_ROTATION_DEGREES {
        0.0
    } else {
        wrapped
    }
}
