//! Radar settings loaded from the environment.
//!
//! A `.env` file in the working directory is read first; CLI flags are
//! applied on top by writing the same variables before loading.

use std::env;
use std::time::Duration;

use dotenv::dotenv;
use thiserror::Error;
use tracing::debug;

use crate::domain::RadarSize;
use crate::radar::blink::{BlinkSettings, DEFAULT_BLINK_PERIOD};
use crate::radar::sweep::{
    valid_step, SweepSettings, DEFAULT_SWEEP_PERIOD, DEFAULT_SWEEP_STEP_DEGREES,
};
use crate::radar::RadarConfig;

pub const SIZE_VAR: &str = "RADAR_SIZE";
pub const SHOW_MARKERS_VAR: &str = "RADAR_SHOW_MARKERS";
pub const SWEEP_STEP_VAR: &str = "RADAR_SWEEP_STEP_DEGREES";
pub const SWEEP_PERIOD_VAR: &str = "RADAR_SWEEP_PERIOD_MS";
pub const BLINK_PERIOD_VAR: &str = "RADAR_BLINK_PERIOD_MS";
pub const SEED_VAR: &str = "RADAR_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown radar size '{value}' (expected small, medium or large)")]
    InvalidSize { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a boolean")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a valid number")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: period must be greater than zero")]
    ZeroPeriod { var: &'static str },

    #[error("{var}: sweep step must be a finite number greater than zero")]
    InvalidStep { var: &'static str },
}

/// Everything needed to build the radar view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadarSettings {
    pub radar: RadarConfig,
    /// Fixed seed for reproducible blinking; thread randomness when absent.
    pub seed: Option<u64>,
}

impl RadarSettings {
    /// Loads `.env` and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        let settings = Self::from_lookup(|key| env::var(key).ok())?;
        debug!(?settings, "radar settings loaded");
        Ok(settings)
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let size = match read(SIZE_VAR) {
            Some(value) => RadarSize::parse(&value).ok_or(ConfigError::InvalidSize {
                var: SIZE_VAR,
                value,
            })?,
            None => RadarSize::default(),
        };

        let show_markers = read(SHOW_MARKERS_VAR)
            .map(|value| parse_bool(SHOW_MARKERS_VAR, &value))
            .transpose()?
            .unwrap_or(true);

        let step_degrees = read(SWEEP_STEP_VAR)
            .map(|value| parse_number::<f64>(SWEEP_STEP_VAR, &value))
            .transpose()?
            .unwrap_or(DEFAULT_SWEEP_STEP_DEGREES);
        if !valid_step(step_degrees) {
            return Err(ConfigError::InvalidStep {
                var: SWEEP_STEP_VAR,
            });
        }

        let sweep_period = read_period(&read, SWEEP_PERIOD_VAR)?.unwrap_or(DEFAULT_SWEEP_PERIOD);
        let blink_period = read_period(&read, BLINK_PERIOD_VAR)?.unwrap_or(DEFAULT_BLINK_PERIOD);

        let seed = read(SEED_VAR)
            .map(|value| parse_number::<u64>(SEED_VAR, &value))
            .transpose()?;

        Ok(Self {
            radar: RadarConfig {
                size,
                show_markers,
                sweep: SweepSettings {
                    step_degrees,
                    period: sweep_period,
                },
                blink: BlinkSettings {
                    period: blink_period,
                },
            },
            seed,
        })
    }
}

fn read_period(
    read: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = read(var) else {
        return Ok(None);
    };
    let millis = parse_number::<u64>(var, &value)?;
    if millis == 0 {
        return Err(ConfigError::ZeroPeriod { var });
    }
    Ok(Some(Duration::from_millis(millis)))
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<RadarSettings, ConfigError> {
        let vars = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        RadarSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let loaded = settings(&[]).expect("defaults");
        assert_eq!(loaded, RadarSettings::default());
        assert_eq!(loaded.radar.sweep.period, Duration::from_millis(50));
        assert_eq!(loaded.radar.blink.period, Duration::from_millis(1000));
        assert!(loaded.radar.show_markers);
    }

    #[test]
    fn reads_every_variable() {
        let loaded = settings(&[
            (SIZE_VAR, "lg"),
            (SHOW_MARKERS_VAR, "off"),
            (SWEEP_STEP_VAR, "4.5"),
            (SWEEP_PERIOD_VAR, "20"),
            (BLINK_PERIOD_VAR, "750"),
            (SEED_VAR, "1234"),
        ])
        .expect("settings");

        assert_eq!(loaded.radar.size, RadarSize::Large);
        assert!(!loaded.radar.show_markers);
        assert!((loaded.radar.sweep.step_degrees - 4.5).abs() < f64::EPSILON);
        assert_eq!(loaded.radar.sweep.period, Duration::from_millis(20));
        assert_eq!(loaded.radar.blink.period, Duration::from_millis(750));
        assert_eq!(loaded.seed, Some(1234));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let loaded = settings(&[(SIZE_VAR, "  "), (SEED_VAR, "")]).expect("settings");
        assert_eq!(loaded.radar.size, RadarSize::Medium);
        assert_eq!(loaded.seed, None);
    }

    #[test]
    fn rejects_unknown_size() {
        assert_eq!(
            settings(&[(SIZE_VAR, "xl")]),
            Err(ConfigError::InvalidSize {
                var: SIZE_VAR,
                value: "xl".to_string()
            })
        );
    }

    #[test]
    fn rejects_zero_periods() {
        assert_eq!(
            settings(&[(SWEEP_PERIOD_VAR, "0")]),
            Err(ConfigError::ZeroPeriod {
                var: SWEEP_PERIOD_VAR
            })
        );
        assert_eq!(
            settings(&[(BLINK_PERIOD_VAR, "0")]),
            Err(ConfigError::ZeroPeriod {
                var: BLINK_PERIOD_VAR
            })
        );
    }

    #[test]
    fn rejects_bad_numbers_and_steps() {
        assert!(matches!(
            settings(&[(SWEEP_PERIOD_VAR, "fast")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            settings(&[(SWEEP_STEP_VAR, "-2")]),
            Err(ConfigError::InvalidStep { .. })
        ));
        assert!(matches!(
            settings(&[(SWEEP_STEP_VAR, "NaN")]),
            Err(ConfigError::InvalidStep { .. })
        ));
        assert!(matches!(
            settings(&[(SHOW_MARKERS_VAR, "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_variable() {
        let err = settings(&[(SEED_VAR, "abc")]).unwrap_err();
        assert_eq!(err.to_string(), "RADAR_SEED: 'abc' is not a valid number");
    }
}
