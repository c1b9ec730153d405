//! Canvas math for the radar scope.
//!
//! The canvas uses pixel units with the origin at the bottom-left and `y`
//! pointing up. Angles follow screen convention: 0° points east and the beam
//! turns clockwise.

use super::sweep::wrap_degrees;

pub const RING_COUNT: u8 = 4;

/// Width of the glow trailing the beam.
pub const SWEEP_ARC_DEGREES: f64 = 90.0;

/// Angular spacing of the lines used to shade the trailing glow.
pub const TRAIL_STEP_DEGREES: f64 = 3.0;

/// Gradient stops across the glow, measured from its far edge to the beam.
const TRAIL_STOPS: [(f64, f64); 4] = [(0.0, 0.0), (30.0, 0.3), (60.0, 0.1), (90.0, 0.0)];

/// Point at `angle_degrees` and `radius` from the center.
pub fn polar_point(center: (f64, f64), radius: f64, angle_degrees: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (
        radians.cos().mul_add(radius, center.0),
        (-radians.sin()).mul_add(radius, center.1),
    )
}

/// Canvas position of a marker placed at `(x, y)` percent from the top-left.
pub fn marker_point(x_percent: f64, y_percent: f64, diameter: f64) -> (f64, f64) {
    (
        x_percent / 100.0 * diameter,
        diameter - y_percent / 100.0 * diameter,
    )
}

/// Radii of the range rings, innermost first.
pub fn ring_radii(outer_radius: f64) -> Vec<f64> {
    (1..=RING_COUNT)
        .map(|ring| outer_radius * f64::from(ring) / f64::from(RING_COUNT))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailLine {
    pub angle_degrees: f64,
    /// Opacity in `[0, 0.3]`.
    pub intensity: f64,
}

/// Opacity of the glow at `offset` degrees past its far edge.
pub fn trail_intensity(offset: f64) -> f64 {
    if !(0.0..=SWEEP_ARC_DEGREES).contains(&offset) {
        return 0.0;
    }

    TRAIL_STOPS
        .windows(2)
        .find(|pair| offset <= pair[1].0)
        .map_or(0.0, |pair| {
            let (start, from) = pair[0];
            let (end, to) = pair[1];
            let t = (offset - start) / (end - start);
            (to - from).mul_add(t, from)
        })
}

/// Shading lines for the glow behind a beam at `beam_degrees`.
///
/// The glow covers the arc the beam has just swept, so its far edge sits a
/// full arc counter-clockwise of the beam. Lines with no opacity are skipped.
pub fn sweep_trail(beam_degrees: f64) -> Vec<TrailLine> {
    let far_edge = beam_degrees - SWEEP_ARC_DEGREES;
    let steps = (SWEEP_ARC_DEGREES / TRAIL_STEP_DEGREES).round() as u32;

    (0..=steps)
        .filter_map(|step| {
            let offset = f64::from(step) * TRAIL_STEP_DEGREES;
            let intensity = trail_intensity(offset);
            (intensity > 0.0).then(|| TrailLine {
                angle_degrees: wrap_degrees(far_edge + offset),
                intensity,
            })
        })
        .collect()
}
