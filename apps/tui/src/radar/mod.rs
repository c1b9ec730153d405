//! The station radar scope and the clocks that animate it.

pub mod blink;
pub mod clock;
pub mod geometry;
pub mod marker;
pub mod sweep;
pub mod view;

use thiserror::Error;

pub use blink::{RandomSource, ScriptedRandom, SeededRandom, SystemRandom};
pub use marker::{Marker, MarkerSet};
pub use view::{glyph_opacity, MarkerGlyph, RadarConfig, RadarPhase, RadarView, TickReport};

#[derive(Debug, Error, PartialEq)]
pub enum RadarError {
    #[error("duplicate marker id: {0}")]
    DuplicateMarker(String),

    #[error("marker {id}: {axis} = {value} is outside 0..=100")]
    PositionOutOfRange {
        id: String,
        axis: &'static str,
        value: f64,
    },

    #[error("sweep step must be a finite number greater than zero, got {0}")]
    InvalidStep(f64),

    #[error("{clock} clock period must be greater than zero")]
    ZeroPeriod { clock: &'static str },
}
