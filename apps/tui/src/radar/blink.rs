use std::fmt;
use std::time::Duration;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::marker::MarkerSet;
use super::RadarError;

pub const DEFAULT_BLINK_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkSettings {
    pub period: Duration,
}

impl Default for BlinkSettings {
    fn default() -> Self {
        Self {
            period: DEFAULT_BLINK_PERIOD,
        }
    }
}

impl BlinkSettings {
    pub fn validate(&self) -> Result<(), RadarError> {
        if self.period.is_zero() {
            return Err(RadarError::ZeroPeriod { clock: "blink" });
        }
        Ok(())
    }
}

/// Source of fair coin flips for the blink clock.
pub trait RandomSource: fmt::Debug {
    fn coin_flip(&mut self) -> bool;
}

/// Reproducible flips from a `u64` seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Flips from the thread-local generator.
#[derive(Debug)]
pub struct SystemRandom {
    rng: ThreadRng,
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for SystemRandom {
    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    flips: Vec<bool>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(flips: impl Into<Vec<bool>>) -> Self {
        Self {
            flips: flips.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return false;
        }
        let flip = self.flips[self.cursor % self.flips.len()];
        self.cursor = (self.cursor + 1) % self.flips.len();
        flip
    }
}

/// One blink tick: every flag is replaced by a fresh flip.
///
/// The previous value is ignored, so a marker can stay lit or dark for
/// several ticks in a row.
pub fn apply_blink_tick(markers: &mut MarkerSet, random: &mut dyn RandomSource) {
    markers.rewrite_flags(|| random.coin_flip());
}
